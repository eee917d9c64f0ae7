//! The entry store abstraction.

use async_trait::async_trait;
use katalog_core::{Entry, EntryId, NewEntry};
use std::fmt;

use crate::Result;

/// Result of a [`EntryStore::seed_if_empty`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty and this many entries were inserted.
    Seeded(u64),
    /// The store already held this many entries; nothing was inserted.
    AlreadyPopulated(u64),
}

impl SeedOutcome {
    /// Number of entries in the store after the call.
    pub fn total(&self) -> u64 {
        match self {
            Self::Seeded(n) | Self::AlreadyPopulated(n) => *n,
        }
    }
}

impl fmt::Display for SeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seeded(n) => write!(f, "seeded {n} entries"),
            Self::AlreadyPopulated(n) => write!(f, "already populated ({n} entries)"),
        }
    }
}

/// Read-mostly store of catalog entries.
///
/// Names are unique. Entries are never updated or deleted, so an ID handed
/// out once always resolves to the same entry.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// All entries in ID order.
    async fn list_all(&self) -> Result<Vec<Entry>>;

    /// The entry with `id`, or `None` if there is none.
    async fn get_by_id(&self, id: EntryId) -> Result<Option<Entry>>;

    /// Validate and insert one entry.
    ///
    /// Fails with [`Error::DuplicateName`](crate::Error::DuplicateName) if
    /// the name is taken; nothing is written in that case.
    async fn create(&self, entry: NewEntry) -> Result<Entry>;

    /// Number of stored entries.
    async fn count(&self) -> Result<u64>;

    /// Insert `entries` as one batch if and only if the store is empty.
    ///
    /// Either every entry is inserted or none is.
    async fn seed_if_empty(&self, entries: &[NewEntry]) -> Result<SeedOutcome>;

    /// Short backend name for logs.
    fn backend_name(&self) -> &'static str;
}
