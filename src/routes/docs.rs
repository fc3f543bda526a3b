//! Documentation content API endpoints
//!
//! - `GET /` — navigation catalog (sections and topics)
//! - `GET /stats` — content cache statistics
//! - `POST /refresh` — rescan the content root into a fresh catalog
//! - `GET /*id` — full rendered document for one topic
//!
//! Documents come out of the memoizing content store, so a topic's file
//! is read and parsed once per process; the catalog is the only surface
//! that re-reads the tree, and only when asked to.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::content::{Catalog, ContentId, RenderableDocument, StoreStats};
use crate::error::Result;
use crate::state::AppState;

/// Create the docs router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_catalog))
        .route("/stats", get(get_stats))
        .route("/refresh", post(refresh_catalog))
        .route("/*id", get(get_document))
}

/// Response for a catalog refresh
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub topics: usize,
    pub message: String,
}

/// Get the navigation catalog
async fn get_catalog(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.catalog().get().await)
}

/// Get content cache statistics
async fn get_stats(State(state): State<AppState>) -> Json<StoreStats> {
    Json(state.store().stats().await)
}

/// Rescan the content root
async fn refresh_catalog(State(state): State<AppState>) -> Result<Json<RefreshResponse>> {
    state
        .catalog()
        .refresh(state.store().resolver())
        .await?;

    let topics = state.catalog().get().await.topic_count();
    tracing::info!(topics, "catalog refreshed");

    Ok(Json(RefreshResponse {
        topics,
        message: format!("Catalog refreshed with {} topics", topics),
    }))
}

/// Load one rendered document
async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RenderableDocument>> {
    let id: ContentId = id.trim_matches('/').parse()?;
    let doc = state.store().load(&id).await?;
    Ok(Json(RenderableDocument::clone(&doc)))
}
