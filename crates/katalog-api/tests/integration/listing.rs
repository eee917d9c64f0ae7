//! Integration tests for the listing page.

use axum::http::StatusCode;
use katalog_core::NewEntry;
use katalog_storage::EntryStore;

use crate::common::{TestHarness, TEST_HOST};

#[tokio::test]
async fn test_fresh_store_lists_three_instruments_with_qr_codes() {
    let harness = TestHarness::new().await;
    let page = harness.get("/").await;

    assert_eq!(page.status, StatusCode::OK);
    for (id, name) in [(1, "Angklung"), (2, "Seruling"), (3, "Gamelan")] {
        assert!(
            page.body
                .contains(&format!("<a href=\"/instrument/{id}\">{name}</a>")),
            "missing link for {name}"
        );
        let qr = katalog_artifact::generate(&format!("http://{TEST_HOST}/instrument/{id}"))
            .expect("artifact");
        assert!(!qr.is_empty());
        assert!(page.body.contains(&qr.data_uri()), "missing QR for {name}");
    }
}

#[tokio::test]
async fn test_listing_order_follows_ids() {
    let harness = TestHarness::new().await;
    let body = harness.get("/").await.body;

    let positions: Vec<usize> = ["Angklung", "Seruling", "Gamelan"]
        .iter()
        .map(|name| body.find(&format!(">{name}</a>")).expect("name present"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_listing_truncates_long_descriptions() {
    let harness = TestHarness::new().await;
    let long = format!("{}TAIL", "x".repeat(200));
    harness
        .store
        .create(NewEntry::new("Kolintang", long, "https://x.test/k.png"))
        .await
        .unwrap();

    let body = harness.get("/").await.body;
    assert!(body.contains(&format!("<p>{}...</p>", "x".repeat(200))));
    assert!(!body.contains("TAIL"));
}

#[tokio::test]
async fn test_listing_is_stable_across_requests() {
    let harness = TestHarness::new().await;
    let first = harness.get("/").await.body;
    let second = harness.get("/").await.body;
    assert_eq!(first, second);
}
