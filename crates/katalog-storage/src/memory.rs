//! In-process entry store.
//!
//! Same contract as [`SqliteStore`](crate::SqliteStore), kept in a
//! `Vec` behind an async `RwLock`. Useful for exercising the layers above
//! storage without a database.

use async_trait::async_trait;
use katalog_core::{Entry, EntryId, NewEntry};
use std::collections::HashSet;
use tokio::sync::RwLock;

use crate::traits::{EntryStore, SeedOutcome};
use crate::{Error, Result};

/// Entry store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<Vec<Entry>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_id(entries: &[Entry]) -> EntryId {
    EntryId::new(entries.last().map_or(1, |e| e.id.get() + 1))
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Entry>> {
        Ok(self.entries.read().await.clone())
    }

    async fn get_by_id(&self, id: EntryId) -> Result<Option<Entry>> {
        let entries = self.entries.read().await;
        Ok(entries.iter().find(|e| e.id == id).cloned())
    }

    async fn create(&self, entry: NewEntry) -> Result<Entry> {
        entry.validate()?;
        let mut entries = self.entries.write().await;
        if entries.iter().any(|e| e.name == entry.name) {
            return Err(Error::DuplicateName { name: entry.name });
        }
        let entry = entry.into_entry(next_id(&entries));
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.entries.read().await.len() as u64)
    }

    async fn seed_if_empty(&self, batch: &[NewEntry]) -> Result<SeedOutcome> {
        let mut entries = self.entries.write().await;
        if !entries.is_empty() {
            return Ok(SeedOutcome::AlreadyPopulated(entries.len() as u64));
        }

        let mut names = HashSet::new();
        for entry in batch {
            entry.validate()?;
            if !names.insert(entry.name.as_str()) {
                return Err(Error::DuplicateName {
                    name: entry.name.clone(),
                });
            }
        }

        for (i, entry) in batch.iter().enumerate() {
            entries.push(entry.clone().into_entry(EntryId::new(i as i64 + 1)));
        }
        Ok(SeedOutcome::Seeded(batch.len() as u64))
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use katalog_core::seed_entries;

    #[tokio::test]
    async fn test_seed_and_lookup() {
        let store = MemoryStore::new();
        assert_eq!(
            store.seed_if_empty(&seed_entries()).await.unwrap(),
            SeedOutcome::Seeded(3)
        );

        let gamelan = store.get_by_id(EntryId::new(3)).await.unwrap().unwrap();
        assert_eq!(gamelan.name, "Gamelan");
        assert!(store.get_by_id(EntryId::new(9999)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let store = MemoryStore::new();
        store.seed_if_empty(&seed_entries()).await.unwrap();
        assert_eq!(
            store.seed_if_empty(&seed_entries()).await.unwrap(),
            SeedOutcome::AlreadyPopulated(3)
        );
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_duplicate_name_after_seed() {
        let store = MemoryStore::new();
        store.seed_if_empty(&seed_entries()).await.unwrap();

        let err = store
            .create(NewEntry::new("Angklung", "dup", "https://x.test/a.png"))
            .await
            .unwrap_err();
        assert!(err.is_duplicate_name());
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_create_continues_id_sequence() {
        let store = MemoryStore::new();
        store.seed_if_empty(&seed_entries()).await.unwrap();
        let entry = store
            .create(NewEntry::new("Kecapi", "Zither.", "https://x.test/k.png"))
            .await
            .unwrap();
        assert_eq!(entry.id, EntryId::new(4));
    }

    #[tokio::test]
    async fn test_seed_batch_with_duplicate_is_atomic() {
        let store = MemoryStore::new();
        let batch = vec![
            NewEntry::new("Rebab", "Bowed.", "https://x.test/r.png"),
            NewEntry::new("Rebab", "Bowed again.", "https://x.test/r2.png"),
        ];
        assert!(store.seed_if_empty(&batch).await.unwrap_err().is_duplicate_name());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seed_batch_with_invalid_entry_is_atomic() {
        let store = MemoryStore::new();
        let batch = vec![
            NewEntry::new("Rebab", "Bowed.", "https://x.test/r.png"),
            NewEntry::new("Kendang", "", "https://x.test/k.png"),
        ];
        assert!(matches!(
            store.seed_if_empty(&batch).await.unwrap_err(),
            Error::Core(_)
        ));
        assert!(store.list_all().await.unwrap().is_empty());
    }
}
