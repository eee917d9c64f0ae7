//! Page addresses.
//!
//! Links inside pages are root-relative. QR codes need absolute URLs, whose
//! base comes from configuration when set, else from the request's `Host`
//! header over plain `http`.

use axum::http::{header, HeaderMap};
use katalog_core::EntryId;

use crate::state::AppState;

/// Path of the listing page.
pub const LISTING_PATH: &str = "/";

/// Root-relative path of an entry's detail page.
pub fn detail_path(id: EntryId) -> String {
    format!("/instrument/{id}")
}

/// Scheme and authority for absolute URLs in this request, without a
/// trailing slash.
pub fn base_url(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(url) = &state.public_url {
        return url.clone();
    }
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|host| !host.is_empty())
        .unwrap_or(state.fallback_host.as_str());
    format!("http://{host}")
}

/// Absolute URL of an entry's detail page.
pub fn detail_url(base: &str, id: EntryId) -> String {
    format!("{base}{}", detail_path(id))
}
