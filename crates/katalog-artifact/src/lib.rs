//! # katalog-artifact
//!
//! Turns a page address into a scannable QR code, delivered as base64 PNG
//! text that can be inlined in HTML through a `data:` URI.
//!
//! ```
//! let artifact = katalog_artifact::generate("http://localhost:5000/instrument/1").unwrap();
//! assert!(artifact.data_uri().starts_with("data:image/png;base64,"));
//! ```

#![warn(clippy::all)]

pub mod error;
pub mod qr;

pub use error::{Error, Result};
pub use qr::{generate, Artifact, ArtifactGenerator};
