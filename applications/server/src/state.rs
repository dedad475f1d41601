/// Shared application state
use encore_core::Catalog;
use encore_playback::PlayerHost;
use std::sync::Arc;

/// Application state shared across all handlers
///
/// One `PlayerHost` lives for the whole process; every request drives the
/// same now-playing store.
#[derive(Clone)]
pub struct AppState {
    pub host: PlayerHost,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(host: PlayerHost, catalog: Arc<Catalog>) -> Self {
        Self { host, catalog }
    }
}
