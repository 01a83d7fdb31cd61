/// Error types shared by both utilities

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The new key was never filled in
    #[error("new key is still the placeholder value {sentinel:?}")]
    PlaceholderKey { sentinel: String },

    /// The old key pattern does not compile
    #[error("invalid old key pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The configuration file is not valid JSON for the expected shape
    #[error("invalid configuration in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SetupError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SetupError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SetupError>;
