//! # katalog-api
//!
//! HTTP server for the Katalog catalog.
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | GET | `/` | Listing of every entry, each with a QR code of its detail page |
//! | GET | `/instrument/{id}` | Detail page with a QR code of itself, or 404 |
//!
//! The store is opened and seeded once by [`Server::from_config`] and then
//! shared with the handlers through [`AppState`].

#![warn(clippy::all)]

pub mod address;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{Error, Result};
pub use routes::router;
pub use server::Server;
pub use state::AppState;
