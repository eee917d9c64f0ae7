//! # katalog-storage
//!
//! Storage backends for the Katalog entry catalog.
//!
//! This crate provides:
//! - The [`EntryStore`] abstraction (list, lookup, create, seed)
//! - [`SqliteStore`], backed by an `sqlx` SQLite pool
//! - [`MemoryStore`], an in-process store for tests
//! - [`seed_default`], the startup seeding step

#![warn(clippy::all)]

pub mod database;
pub mod error;
pub mod memory;
pub mod seed;
pub mod traits;

pub use database::SqliteStore;
pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use seed::seed_default;
pub use traits::{EntryStore, SeedOutcome};
