//! Startup seeding.

use katalog_core::seed_entries;

use crate::traits::{EntryStore, SeedOutcome};
use crate::Result;

/// Insert the built-in starter entries if `store` is empty.
///
/// Safe to call on every process start.
pub async fn seed_default(store: &dyn EntryStore) -> Result<SeedOutcome> {
    let outcome = store.seed_if_empty(&seed_entries()).await?;
    match outcome {
        SeedOutcome::Seeded(n) => {
            tracing::info!(backend = store.backend_name(), entries = n, "Seeded empty catalog");
        }
        SeedOutcome::AlreadyPopulated(n) => {
            tracing::debug!(backend = store.backend_name(), entries = n, "Catalog already populated");
        }
    }
    Ok(outcome)
}
