//! Encore Server Library
//!
//! HTTP host for the Encore now-playing store: a catalog listing and one
//! process-wide playback queue driven over JSON routes.
//!
//! This library exposes the router and its components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use encore_core::Catalog;
use encore_playback::{DetachedAdapter, PlayerHost};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;

/// Build the application state from configuration
///
/// The browser owns the media element, so the host drives a
/// [`DetachedAdapter`] and learns about playback through the adapter routes.
pub fn build_state(config: &ServerConfig, catalog: Catalog) -> Result<AppState> {
    let host = PlayerHost::new(config.playback.clone(), Box::new(DetachedAdapter))?;
    Ok(AppState::new(host, Arc::new(catalog)))
}

/// Build the API router
pub fn create_router(app_state: AppState) -> Router {
    let playback_routes = Router::new()
        .route("/playback", get(api::playback::get_playback))
        .route("/playback/select", post(api::playback::select))
        .route("/playback/toggle", post(api::playback::toggle))
        .route("/playback/next", post(api::playback::next))
        .route("/playback/previous", post(api::playback::previous))
        .route("/playback/shuffle", post(api::playback::shuffle))
        .route("/playback/seek", post(api::playback::seek))
        // Adapter reports
        .route("/playback/progress", post(api::playback::progress))
        .route("/playback/duration", post(api::playback::duration))
        .route("/playback/ended", post(api::playback::ended))
        .route("/playback/error", post(api::playback::error));

    let public_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/catalog", get(api::catalog::list_catalog));

    Router::new()
        .nest("/api", public_routes.merge(playback_routes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
