use std::sync::Arc;

use crate::scoring::cache::MatchScoreStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Persistence side of the cache-aside contract. Default: `PgMatchScoreStore`.
    pub store: Arc<dyn MatchScoreStore>,
}
