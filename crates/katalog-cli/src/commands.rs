//! Subcommand implementations.

use katalog_api::Server;
use katalog_core::{Entry, KatalogConfig};
use katalog_storage::{seed_default, EntryStore, SeedOutcome, SqliteStore};
use qrcode::render::unicode;
use qrcode::QrCode;

use crate::cli::{Args, Command};
use crate::config_handlers::handle_config_command;
use crate::{logging, Result};

/// Run the command selected by `args`.
pub async fn run(args: Args) -> Result<()> {
    let config_path = args.config.as_deref();
    match args.effective_command() {
        Command::Config { action } => Ok(handle_config_command(config_path, action)?),
        Command::Qr { address, png } => {
            println!("{}", render_qr(&address, png)?);
            Ok(())
        }
        Command::Serve { host, port } => {
            let mut config = load(config_path)?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            cmd_serve(config).await
        }
        Command::Seed => {
            let outcome = cmd_seed(&load(config_path)?).await?;
            println!("Catalog {outcome}");
            Ok(())
        }
        Command::List => {
            let entries = cmd_list(&load(config_path)?).await?;
            print!("{}", format_entries(&entries));
            Ok(())
        }
    }
}

fn load(config_path: Option<&str>) -> Result<KatalogConfig> {
    let config = KatalogConfig::load(config_path)?;
    logging::init(&config.logging.filter)?;
    tracing::debug!(database = %config.database.url, "Configuration loaded");
    Ok(config)
}

/// Open and seed the database, then serve until Ctrl-C.
pub async fn cmd_serve(config: KatalogConfig) -> Result<()> {
    Server::from_config(config).await?.serve().await?;
    Ok(())
}

/// Open the database, creating the schema, and seed it if empty.
pub async fn cmd_seed(config: &KatalogConfig) -> Result<SeedOutcome> {
    let store = SqliteStore::connect(&config.database).await?;
    let outcome = seed_default(&store).await?;
    store.close().await;
    Ok(outcome)
}

/// Every stored entry in ID order.
pub async fn cmd_list(config: &KatalogConfig) -> Result<Vec<Entry>> {
    let store = SqliteStore::connect(&config.database).await?;
    let entries = store.list_all().await?;
    store.close().await;
    Ok(entries)
}

/// One tab-separated line per entry: id, name, image reference.
pub fn format_entries(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}\t{}\t{}\n", e.id, e.name, e.image_reference))
        .collect()
}

/// Render `address` as base64 PNG text or as terminal block characters.
pub fn render_qr(address: &str, png: bool) -> Result<String> {
    if png {
        return Ok(katalog_artifact::generate(address)?.into_string());
    }
    if address.is_empty() {
        return Err(katalog_artifact::Error::EmptyAddress.into());
    }

    let code = QrCode::new(address.as_bytes())?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .build())
}

// ============================================================================
// Tests
// ============================================================================
