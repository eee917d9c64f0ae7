//! Katalog configuration.
//!
//! [`KatalogConfig`] is assembled in three layers:
//!
//! 1. Built-in defaults
//! 2. A TOML file (explicit path, then `$KATALOG_CONFIG`, then
//!    `<config_dir>/katalog/config.toml`), skipped when absent
//! 3. `KATALOG_*` environment overrides
//!
//! # Example
//!
//! ```
//! use katalog_core::KatalogConfig;
//!
//! let config = KatalogConfig::default();
//! assert_eq!(config.server.port, 5000);
//! assert_eq!(config.database.url, "sqlite://instruments.db");
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Project name, used for the config directory and environment prefix.
pub const PROJECT_NAME: &str = "katalog";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "KATALOG_CONFIG";

const ENV_HOST: &str = "KATALOG_HOST";
const ENV_PORT: &str = "KATALOG_PORT";
const ENV_PUBLIC_URL: &str = "KATALOG_PUBLIC_URL";
const ENV_DATABASE_URL: &str = "KATALOG_DATABASE_URL";
const ENV_LOG: &str = "KATALOG_LOG";

// ============================================================================
// Sections
// ============================================================================

/// Text shown in the page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Subtitle under the listing page title.
    pub tagline: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Wiki Alat Musik".to_string(),
            tagline: "Kumpulan informasi tentang alat-alat musik".to_string(),
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Externally visible base URL used in QR codes (e.g. `https://wiki.example.org`).
    ///
    /// When unset, the request's `Host` header decides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            public_url: None,
        }
    }
}

/// Database settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite connection URL (`sqlite://path.db` or `sqlite::memory:`).
    pub url: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://instruments.db".to_string(),
            max_connections: 5,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,katalog=debug".to_string(),
        }
    }
}

// ============================================================================
// KatalogConfig
// ============================================================================

/// Complete Katalog configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KatalogConfig {
    /// Page header text.
    pub site: SiteConfig,
    /// HTTP listener.
    pub server: ServerConfig,
    /// Backing store.
    pub database: DatabaseConfig,
    /// Log filtering.
    pub logging: LoggingConfig,
}

impl KatalogConfig {
    /// Load configuration from file and process environment.
    ///
    /// A missing file is not an error unless it was named explicitly.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) reading variables through `lookup`.
    ///
    /// An empty `KATALOG_CONFIG` counts as unset.
    pub fn load_with<F>(config_path: Option<&str>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let explicit = config_path.is_some() || config_env_path(&lookup).is_some();
        let mut config = match Self::resolve_config_path_with(config_path, &lookup) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) if explicit => {
                return Err(Error::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            _ => Self::default(),
        };
        config.apply_env(lookup)?;
        Ok(config)
    }

    /// Parse a TOML config file; missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse TOML text; missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Apply `KATALOG_*` overrides using `lookup` to read variables.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port
                .parse()
                .map_err(|_| Error::config(format!("{ENV_PORT} is not a valid port: {port}")))?;
        }
        if let Some(url) = lookup(ENV_PUBLIC_URL) {
            self.server.public_url = (!url.is_empty()).then_some(url);
        }
        if let Some(url) = lookup(ENV_DATABASE_URL) {
            self.database.url = url;
        }
        if let Some(filter) = lookup(ENV_LOG) {
            self.logging.filter = filter;
        }
        Ok(())
    }

    /// The environment variables that reproduce this configuration.
    pub fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let mut vars = vec![
            (ENV_HOST.to_string(), self.server.host.clone()),
            (ENV_PORT.to_string(), self.server.port.to_string()),
        ];
        if let Some(url) = &self.server.public_url {
            vars.push((ENV_PUBLIC_URL.to_string(), url.clone()));
        }
        vars.push((ENV_DATABASE_URL.to_string(), self.database.url.clone()));
        vars.push((ENV_LOG.to_string(), self.logging.filter.clone()));
        Ok(vars)
    }

    /// Resolve the config file path: explicit argument, `$KATALOG_CONFIG`,
    /// then the platform default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        Self::resolve_config_path_with(explicit, |key| std::env::var(key).ok())
    }

    /// [`resolve_config_path`](Self::resolve_config_path) reading variables
    /// through `lookup`.
    pub fn resolve_config_path_with<F>(explicit: Option<&str>, lookup: F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        explicit
            .map(PathBuf::from)
            .or_else(|| config_env_path(&lookup))
            .or_else(Self::default_config_path)
    }

    /// `<config_dir>/katalog/config.toml` for the current platform.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Project name used in messages and paths.
    pub fn project_name() -> &'static str {
        PROJECT_NAME
    }
}

fn config_env_path<F>(lookup: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(CONFIG_ENV_VAR)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
}

// ============================================================================
// Tests
// ============================================================================
