//! Error types for katalog-cli

use thiserror::Error;

/// Result type alias for katalog-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in katalog-cli
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
    #[error("QR code error: {0}")]
    Artifact(#[from] katalog_artifact::Error),

    /// Error from katalog-api
    #[error("Server error: {0}")]
    Api(#[from] katalog_api::Error),

    /// Address could not be encoded for terminal display
    #[error("QR code error: {0}")]
    Qr(#[from] qrcode::types::QrError),

    /// Logging could not be initialized
    #[error("Logging error: {0}")]
    Logging(String),
}
