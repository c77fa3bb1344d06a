pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::scoring::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pure scoring
        .route("/api/v1/scores/match", post(handlers::handle_match_score))
        .route(
            "/api/v1/scores/completeness",
            post(handlers::handle_completeness),
        )
        // Cached match scores
        .route(
            "/api/v1/matches/backfill",
            post(handlers::handle_backfill),
        )
        .route(
            "/api/v1/matches/:id/score",
            get(handlers::handle_get_match_score),
        )
        .route(
            "/api/v1/matches/:id/recompute",
            post(handlers::handle_recompute_match),
        )
        .route(
            "/api/v1/jobs/:id/recompute",
            post(handlers::handle_recompute_job),
        )
        .with_state(state)
}
