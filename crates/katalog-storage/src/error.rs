//! Error types for katalog-storage

use thiserror::Error;

/// Result type alias for katalog-storage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in katalog-storage
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from katalog-core (validation, configuration)
    #[error("Core error: {0}")]
    Core(#[from] katalog_core::Error),

    /// An entry with this name already exists
    #[error("Duplicate entry name: {name}")]
    DuplicateName {
        /// The conflicting name
        name: String,
    },

    /// Error from the database driver
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Error {
    /// Returns `true` for a name-uniqueness violation.
    pub fn is_duplicate_name(&self) -> bool {
        matches!(self, Error::DuplicateName { .. })
    }

    /// Maps a driver error from an insert of `name`, turning unique-constraint
    /// violations into [`Error::DuplicateName`].
    pub(crate) fn from_insert(err: sqlx::Error, name: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Error::DuplicateName {
                    name: name.to_string(),
                };
            }
        }
        Error::Database(err)
    }
}
