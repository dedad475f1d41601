/// Catalog listing API routes
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use encore_core::PlayableItem;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    /// Case-insensitive title filter
    pub q: Option<String>,
}

/// GET /api/catalog - List catalog items, optionally filtered by title
pub async fn list_catalog(
    State(app_state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<Vec<PlayableItem>> {
    let term = query.q.as_deref().unwrap_or_default();
    let items = app_state
        .catalog
        .search(term)
        .into_iter()
        .cloned()
        .collect();

    Json(items)
}
