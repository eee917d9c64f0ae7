//! Router and request handlers.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use katalog_core::EntryId;
use katalog_render::{
    render_detail, render_listing, render_not_found, DetailView, ListingCard, ListingView,
};
use tower_http::trace::TraceLayer;

use crate::address::{base_url, detail_path, detail_url, LISTING_PATH};
use crate::state::AppState;
use crate::Result;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(LISTING_PATH, get(index))
        .route("/instrument/{id}", get(instrument_detail))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /`: every entry with a QR code of its detail page.
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Result<Html<String>> {
    let entries = state.store.list_all().await?;
    let base = base_url(&state, &headers);

    let cards = entries
        .iter()
        .map(|entry| -> Result<ListingCard> {
            let artifact = state.generator.generate(&detail_url(&base, entry.id))?;
            Ok(ListingCard::from_entry(entry, detail_path(entry.id), artifact))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(entries = cards.len(), "Rendering listing");
    Ok(Html(render_listing(&ListingView {
        site: state.site.clone(),
        cards,
    })))
}

/// `GET /instrument/{id}`: one entry with a QR code of this page.
///
/// Identifiers that are not integers are treated like unknown ones.
pub async fn instrument_detail(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(raw_id): Path<String>,
) -> Result<Response> {
    let Ok(id) = raw_id.parse::<EntryId>() else {
        return Ok(not_found(&state));
    };
    let Some(entry) = state.store.get_by_id(id).await? else {
        tracing::debug!(entry_id = %id, "Entry not found");
        return Ok(not_found(&state));
    };

    let address = detail_url(&base_url(&state, &headers), entry.id);
    let artifact = state.generator.generate(&address)?;

    let view = DetailView::from_entry(state.site.clone(), &entry, artifact, LISTING_PATH);
    Ok(Html(render_detail(&view)).into_response())
}

async fn fallback(State(state): State<AppState>) -> Response {
    not_found(&state)
}

fn not_found(state: &AppState) -> Response {
    (StatusCode::NOT_FOUND, Html(render_not_found(&state.site))).into_response()
}

// ============================================================================
// Tests
// ============================================================================
