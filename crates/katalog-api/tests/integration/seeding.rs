//! Integration tests for startup seeding and name uniqueness.

use katalog_core::{seed_entries, NewEntry};
use katalog_storage::{seed_default, EntryStore, SeedOutcome};

use crate::common::TestHarness;

#[tokio::test]
async fn test_seeded_entries_round_trip_through_lookup() {
    let harness = TestHarness::new().await;
    let stored = harness.store.list_all().await.unwrap();
    assert_eq!(stored.len(), 3);

    for (entry, seed) in stored.iter().zip(seed_entries()) {
        assert_eq!(entry.name, seed.name);
        assert_eq!(entry.description, seed.description);
        assert_eq!(entry.image_reference, seed.image_reference);
        assert_eq!(
            harness.store.get_by_id(entry.id).await.unwrap().as_ref(),
            Some(entry)
        );
    }
}

#[tokio::test]
async fn test_reseeding_is_a_no_op() {
    let harness = TestHarness::new().await;
    let outcome = seed_default(harness.store.as_ref()).await.unwrap();
    assert_eq!(outcome, SeedOutcome::AlreadyPopulated(3));
    assert_eq!(harness.store.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_duplicate_name_after_seeding_fails() {
    let harness = TestHarness::new().await;
    let err = harness
        .store
        .create(NewEntry::new(
            "Angklung",
            "Duplikat.",
            "https://via.placeholder.com/300?text=Angklung",
        ))
        .await
        .unwrap_err();

    assert!(err.is_duplicate_name());
    assert_eq!(harness.store.count().await.unwrap(), 3);
    assert_eq!(harness.get("/").await.body.matches("class=\"card\"").count(), 3);
}
