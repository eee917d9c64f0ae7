//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Katalog - a small catalog of musical instruments
#[derive(Parser, Debug)]
#[command(name = "katalog")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Subcommand; `serve` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the database and serve the catalog over HTTP
    Serve {
        /// Interface to bind, overriding configuration
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overriding configuration
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Create the schema and insert the starter entries if the store is empty
    Seed,

    /// Print every stored entry
    List,

    /// Render an address as a QR code
    Qr {
        /// Text to encode, usually a detail page URL
        address: String,

        /// Print the base64 PNG instead of terminal blocks
        #[arg(long)]
        png: bool,
    },

    /// Configuration file management
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Print a value by dotted key, e.g. `server.port`
    Get {
        /// Dotted key
        key: String,
    },

    /// Set a value by dotted key in the config file
    Set {
        /// Dotted key
        key: String,
        /// New value; booleans and numbers are detected
        value: String,
    },

    /// Write a default config file
    Init {
        /// Destination; the platform config directory when omitted
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration as environment variables
    Export {
        /// Format as `--env KEY=VALUE` for `docker run`
        #[arg(long)]
        docker_env: bool,
    },
}

impl Args {
    /// The subcommand to run, with `serve` as the default.
    pub fn effective_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve {
            host: None,
            port: None,
        })
    }
}
