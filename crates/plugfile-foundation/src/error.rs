//! Error handling for plugfile

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for scaffolding operations
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Errors that halt a scaffolding run
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScaffoldError {
    /// Filesystem failure while reading, writing or creating `path`
    #[error("I/O error on '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source path given on the command line cannot be scaffolded
    #[error("Invalid source path '{path}': {reason}")]
    InvalidSourcePath { path: String, reason: String },

    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ScaffoldError {
    /// Create an I/O error bound to the path being touched
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an invalid source path error
    pub fn invalid_source_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSourcePath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
