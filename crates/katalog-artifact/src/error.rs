//! Error types for katalog-artifact

use thiserror::Error;

/// Result type alias for katalog-artifact operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating an artifact
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The address to encode was empty
    #[error("Cannot encode an empty address")]
    EmptyAddress,

    /// The address does not fit in any QR code version
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    /// PNG serialization failed
    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}
