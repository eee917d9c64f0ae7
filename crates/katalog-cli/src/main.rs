//! Katalog CLI
//!
//! Serves the instrument catalog and administers its database and
//! configuration.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use katalog_cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    katalog_cli::commands::run(args).await?;
    Ok(())
}
