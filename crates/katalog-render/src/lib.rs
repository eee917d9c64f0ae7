//! # katalog-render
//!
//! Page composition for the catalog.
//!
//! Rendering is a pure function from a view-model to HTML text; there is no
//! template engine. All interpolated values are HTML-escaped.
//!
//! - [`view`]: view-models built from entries and artifacts
//! - [`html`]: listing, detail, and not-found pages
//! - [`truncate`]: the listing summary rule

#![warn(clippy::all)]

pub mod html;
pub mod truncate;
pub mod view;

pub use html::{render_detail, render_listing, render_not_found};
pub use truncate::{truncate_description, ELLIPSIS, SUMMARY_CHARS};
pub use view::{DetailView, ListingCard, ListingView};
