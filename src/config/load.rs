use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads the given file, then lets environment variables
/// (prefix `TESLA_MUSIC__`) override individual keys.
impl Settings {
    /// Load settings from a config file plus the environment.
    pub fn load(path: &Path) -> Result<Self> {
        let cfg = ::config::Config::builder()
            .add_source(::config::File::from(path).required(true))
            .add_source(
                ::config::Environment::with_prefix("TESLA_MUSIC")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("source_directories")
                    .with_list_parse_key("file_whitelist")
                    .with_list_parse_key("file_blacklist")
                    .with_list_parse_key("extensions_whitelist")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = cfg.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that deserialize fine but cannot drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.source_directories.is_empty() {
            return Err(Error::Config(
                "source_directories must name at least one directory".to_string(),
            ));
        }
        if self.target_directory.as_os_str().is_empty() {
            return Err(Error::Config("target_directory must not be empty".to_string()));
        }
        Ok(())
    }

    /// Fail early when a source or the target is not an existing directory.
    pub fn check_paths(&self) -> Result<()> {
        for source in &self.source_directories {
            if !source.is_dir() {
                return Err(Error::MissingPath {
                    role: "source",
                    path: source.clone(),
                });
            }
        }
        if !self.target_directory.is_dir() {
            return Err(Error::MissingPath {
                role: "target",
                path: self.target_directory.clone(),
            });
        }
        Ok(())
    }
}

/// Turn a bare drive designator like `E:` into `E:\` so it names the drive
/// root rather than the drive's current directory.
pub fn normalize_root(arg: &Path) -> PathBuf {
    match arg.to_str() {
        Some(s) if s.ends_with(':') => PathBuf::from(format!("{s}\\")),
        _ => arg.to_path_buf(),
    }
}
