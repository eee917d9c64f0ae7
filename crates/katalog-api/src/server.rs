//! Server lifecycle: open the store, seed it, then serve HTTP.

use std::sync::Arc;

use axum::Router;
use katalog_core::KatalogConfig;
use katalog_storage::{seed_default, EntryStore, SqliteStore};
use tokio::net::TcpListener;

use crate::routes::router;
use crate::state::AppState;
use crate::Result;

/// Katalog HTTP server.
#[derive(Debug)]
pub struct Server {
    config: KatalogConfig,
    state: AppState,
}

impl Server {
    /// Wrap an already initialized store.
    pub fn new(config: KatalogConfig, store: Arc<dyn EntryStore>) -> Self {
        let state = AppState::new(&config, store);
        Self { config, state }
    }

    /// Open the configured SQLite database and seed it if empty.
    ///
    /// Runs once, before any request is served.
    pub async fn from_config(config: KatalogConfig) -> Result<Self> {
        let store = SqliteStore::connect(&config.database).await?;
        seed_default(&store).await?;
        Ok(Self::new(config, Arc::new(store)))
    }

    /// Shared handler state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The application router.
    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn serve(self) -> Result<()> {
        let listener = TcpListener::bind(self.config.server.bind_address()).await?;
        self.serve_on(listener).await
    }

    /// Serve on an already bound listener until Ctrl-C.
    pub async fn serve_on(self, listener: TcpListener) -> Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!(%addr, backend = self.state.store.backend_name(), "Katalog listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Katalog stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Could not listen for Ctrl-C; serving until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
