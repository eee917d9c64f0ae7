//! Error types for katalog-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result type alias for katalog-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in katalog-api
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from katalog-core
    #[error("Core error: {0}")]
    Core(#[from] katalog_core::Error),

    /// Error from katalog-storage
    #[error("Storage error: {0}")]
    Storage(#[from] katalog_storage::Error),

    /// Error from katalog-artifact
    #[error("Artifact error: {0}")]
    Artifact(#[from] katalog_artifact::Error),

    /// Listener I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
