//! Error types for katalog-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for katalog-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in katalog-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// An entry field failed validation
    #[error("Validation error on '{field}': {message}")]
    Validation {
        /// Field that failed validation
        field: &'static str,
        /// What went wrong
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error, optionally tied to a path
    #[error("I/O error{}: {source}", path_suffix(.path))]
    Io {
        /// Path being accessed, if known
        path: Option<PathBuf>,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" at {}", p.display()))
        .unwrap_or_default()
}

impl Error {
    /// Creates a new validation error for `field`.
    pub fn validation<S: Into<String>>(field: &'static str, message: S) -> Self {
        Error::Validation {
            field,
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: Some(path.as_ref().to_path_buf()),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { path: None, source }
    }
}
