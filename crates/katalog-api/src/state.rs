//! Shared handler state.

use std::sync::Arc;

use katalog_artifact::ArtifactGenerator;
use katalog_core::{KatalogConfig, SiteConfig};
use katalog_storage::EntryStore;

/// Everything a request handler needs, cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// The entry store, initialized and seeded before serving.
    pub store: Arc<dyn EntryStore>,
    /// QR code settings.
    pub generator: ArtifactGenerator,
    /// Page header text.
    pub site: SiteConfig,
    /// Configured external base URL, without a trailing slash.
    pub public_url: Option<String>,
    /// `host:port` used when a request carries no `Host` header.
    pub fallback_host: String,
}

impl AppState {
    /// Build state from configuration and an initialized store.
    pub fn new(config: &KatalogConfig, store: Arc<dyn EntryStore>) -> Self {
        Self {
            store,
            generator: ArtifactGenerator::default(),
            site: config.site.clone(),
            public_url: config
                .server
                .public_url
                .as_deref()
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            fallback_host: config.server.bind_address(),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store.backend_name())
            .field("site", &self.site)
            .field("public_url", &self.public_url)
            .field("fallback_host", &self.fallback_host)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use katalog_storage::MemoryStore;

    #[test]
    fn test_public_url_trailing_slash_trimmed() {
        let mut config = KatalogConfig::default();
        config.server.public_url = Some("https://wiki.example.org/".to_string());
        let state = AppState::new(&config, Arc::new(MemoryStore::new()));
        assert_eq!(state.public_url.as_deref(), Some("https://wiki.example.org"));
    }

    #[test]
    fn test_fallback_host_from_bind_address() {
        let state = AppState::new(&KatalogConfig::default(), Arc::new(MemoryStore::new()));
        assert_eq!(state.fallback_host, "127.0.0.1:5000");
        assert!(state.public_url.is_none());
        assert!(format!("{state:?}").contains("memory"));
    }
}
