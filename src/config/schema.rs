use std::path::PathBuf;

use serde::{Deserialize, Deserializer};

/// Settings for one sync run.
///
/// File format: JSON or TOML, picked from the file extension.
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TESLA_MUSIC__`, lists comma separated)
/// 2) Config file
/// 3) Field defaults (only for the optional fields)
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Directories scanned for audio files, in order.
    ///
    /// A single string is accepted as a one-element list.
    #[serde(
        alias = "sourceDirectories",
        alias = "sourceDirectory",
        alias = "source_directory",
        deserialize_with = "one_or_many"
    )]
    pub source_directories: Vec<PathBuf>,

    /// Root of the mirrored library (usually the USB drive).
    #[serde(alias = "targetDirectory")]
    pub target_directory: PathBuf,

    /// Regexes a file path must match at least one of. Empty = allow all.
    #[serde(default, alias = "fileWhitelist")]
    pub file_whitelist: Vec<String>,

    /// Regexes that exclude a file or directory. Empty = block none.
    #[serde(default, alias = "fileBlacklist")]
    pub file_blacklist: Vec<String>,

    /// Extensions (without dot) appended to the whitelist as `\.ext$`.
    #[serde(default, alias = "extensionsWhitelist")]
    pub extensions_whitelist: Vec<String>,

    /// Rewrite copied titles as `NN Title` in file name order.
    #[serde(default, alias = "addIndexPrefix")]
    pub add_index_prefix: bool,

    /// Whether to follow symlinks while indexing.
    #[serde(default = "default_follow_links", alias = "followLinks")]
    pub follow_links: bool,
}

impl Settings {
    /// Settings for the two-argument form: one source, one target, defaults
    /// for everything else.
    pub fn from_paths(source: PathBuf, target: PathBuf) -> Self {
        Self {
            source_directories: vec![source],
            target_directory: target,
            file_whitelist: Vec::new(),
            file_blacklist: Vec::new(),
            extensions_whitelist: Vec::new(),
            add_index_prefix: false,
            follow_links: default_follow_links(),
        }
    }

    /// The whitelist with every `extensions_whitelist` entry turned into an
    /// extension pattern.
    pub fn effective_whitelist(&self) -> Vec<String> {
        let mut patterns = self.file_whitelist.clone();
        patterns.extend(
            self.extensions_whitelist
                .iter()
                .map(|e| e.trim().trim_start_matches('.'))
                .filter(|e| !e.is_empty())
                .map(|e| format!(r"\.{}$", regex::escape(e))),
        );
        patterns
    }
}

fn default_follow_links() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(p) => vec![p],
        OneOrMany::Many(v) => v,
    })
}
