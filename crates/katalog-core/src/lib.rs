//! Katalog Core: shared types, configuration, errors, and seed data.
//!
//! This crate provides the foundational types used across all Katalog crates.
//! It has no internal Katalog dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`entry`]: The catalog [`Entry`] and its validated constructor input [`NewEntry`]
//! - [`seed`]: The fixed starter set inserted into an empty store
//! - [`config`]: [`KatalogConfig`] and its TOML/environment loading
//! - [`error`]: Error types and Result alias

pub mod config;
pub mod entry;
pub mod error;
pub mod seed;

// Re-export key types at crate root for convenience
pub use config::{DatabaseConfig, KatalogConfig, LoggingConfig, ServerConfig, SiteConfig};
pub use entry::{Entry, EntryId, NewEntry, MAX_IMAGE_REFERENCE_CHARS, MAX_NAME_CHARS};
pub use error::{Error, Result};
pub use seed::seed_entries;
