//! HTTP routes for story analysis.

use axum::routing::post;
use axum::Router;

use super::super::state::AppState;
use super::handlers::analyze_story;

/// Creates the analysis router.
pub fn analysis_routes(state: AppState) -> Router {
    Router::new()
        // POST /api/analyze
        .route("/api/analyze", post(analyze_story))
        .with_state(state)
}
