//! Integration tests for the detail page.

use axum::http::StatusCode;
use katalog_core::{seed_entries, KatalogConfig, NewEntry};
use katalog_storage::EntryStore;

use crate::common::{TestHarness, TEST_HOST};

#[tokio::test]
async fn test_detail_shows_full_description_and_back_link() {
    let harness = TestHarness::new().await;
    let page = harness.get("/instrument/1").await;

    assert_eq!(page.status, StatusCode::OK);
    let angklung = &seed_entries()[0];
    assert!(page.body.contains(&format!("<p>{}</p>", angklung.description)));
    assert!(page.body.contains("<a href=\"/\">"));
}

#[tokio::test]
async fn test_detail_qr_encodes_own_address() {
    let harness = TestHarness::new().await;
    let page = harness.get("/instrument/2").await;

    let qr = katalog_artifact::generate(&format!("http://{TEST_HOST}/instrument/2")).unwrap();
    assert!(page.body.contains(&qr.data_uri()));
}

#[tokio::test]
async fn test_detail_never_truncates() {
    let harness = TestHarness::new().await;
    let long = "panjang ".repeat(60);
    let entry = harness
        .store
        .create(NewEntry::new("Sasando", long.clone(), "https://x.test/s.png"))
        .await
        .unwrap();

    let page = harness.get(&format!("/instrument/{}", entry.id)).await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains(&long));
}

#[tokio::test]
async fn test_missing_instrument_is_404() {
    let harness = TestHarness::new().await;
    assert_eq!(harness.get("/instrument/9999").await.status, StatusCode::NOT_FOUND);
    assert_eq!(harness.get("/instrument/0").await.status, StatusCode::NOT_FOUND);
    assert_eq!(harness.get("/instrument/-1").await.status, StatusCode::NOT_FOUND);
    assert_eq!(harness.get("/instrument/gong").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_public_url_overrides_host() {
    let mut config = KatalogConfig::default();
    config.server.public_url = Some("https://alat.example.org/".to_string());
    let harness = TestHarness::with_config(config).await;

    let page = harness.get("/instrument/3").await;
    let qr = katalog_artifact::generate("https://alat.example.org/instrument/3").unwrap();
    assert!(page.body.contains(&qr.data_uri()));
}
