//! Katalog instrument catalog: umbrella crate.
//!
//! Re-exports the Katalog components. The HTTP server is behind the
//! `server` feature, enabled by default.

#![doc = include_str!("../README.md")]

pub use katalog_artifact as artifact;
pub use katalog_core as core;
pub use katalog_render as render;
pub use katalog_storage as storage;

#[cfg(feature = "server")]
pub use katalog_api as api;
