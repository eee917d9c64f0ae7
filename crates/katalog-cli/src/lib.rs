//! # katalog-cli
//!
//! The `katalog` binary: serve the catalog over HTTP and administer its
//! database and configuration from the shell.
//!
//! - `serve` opens and seeds the database, then serves the pages
//! - `seed` runs the startup initialization alone
//! - `list` prints every stored entry
//! - `qr` renders an address as a QR code in the terminal
//! - `config` inspects and writes the configuration file

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod error;
pub mod logging;

pub use cli::{Args, Command, ConfigAction};
pub use error::{Error, Result};
