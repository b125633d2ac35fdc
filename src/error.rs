//! Crate-wide error type.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Settings are present but unusable (empty source list, bad value).
    #[error("configuration error: {0}")]
    Config(String),

    /// The configuration file could not be read or deserialized.
    #[error("configuration error: {0}")]
    ConfigLoad(#[from] ::config::ConfigError),

    #[error("invalid filter pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A top-level source or destination directory is missing.
    #[error("{role} directory {} does not exist or is not a directory", path.display())]
    MissingPath { role: &'static str, path: PathBuf },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
