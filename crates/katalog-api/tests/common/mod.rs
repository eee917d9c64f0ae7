//! Common test utilities and harness for Katalog integration tests.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use katalog_api::{router, AppState};
use katalog_core::KatalogConfig;
use katalog_storage::{seed_default, SqliteStore};
use tower::ServiceExt;

/// Host header sent by [`TestHarness::get`].
pub const TEST_HOST: &str = "katalog.test";

/// A rendered response.
pub struct Page {
    /// Response status.
    pub status: StatusCode,
    /// Response body as text.
    pub body: String,
}

/// Test harness: a freshly seeded in-memory store behind the router.
pub struct TestHarness {
    /// The store the router reads from.
    pub store: Arc<SqliteStore>,
    /// Configuration the router was built with.
    pub config: KatalogConfig,
}

impl TestHarness {
    /// Creates a harness with default configuration and the seed set.
    pub async fn new() -> Self {
        Self::with_config(KatalogConfig::default()).await
    }

    /// Creates a harness with custom configuration and the seed set.
    pub async fn with_config(config: KatalogConfig) -> Self {
        let store = Arc::new(SqliteStore::in_memory().await.expect("in-memory store"));
        seed_default(store.as_ref()).await.expect("seed");
        Self { store, config }
    }

    /// Issue a GET for `uri` and collect the response.
    pub async fn get(&self, uri: &str) -> Page {
        let app = router(AppState::new(&self.config, self.store.clone()));
        let request = Request::builder()
            .uri(uri)
            .header(header::HOST, TEST_HOST)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        Page {
            status,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}
