//! Top-level router: merges every endpoint group and applies middleware.

use std::time::Duration;

use axum::Router;
use http::{header, HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::analysis::analysis_routes;
use super::catalog::catalog_routes;
use super::scene::scene_routes;
use super::state::AppState;

/// Builds the full application router.
///
/// `request_timeout` bounds every route except `POST /api/analyze`, which is
/// bounded by the model client's own timeout and always answers with an
/// analysis.
pub fn app_router(state: AppState, cors_origins: &[String], request_timeout: Duration) -> Router {
    let bounded = Router::new()
        .merge(catalog_routes(state.clone()))
        .merge(scene_routes(state.clone()))
        .layer(TimeoutLayer::new(request_timeout));

    bounded.merge(analysis_routes(state)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(cors_origins)),
    )
}

/// Browser access for the configured frontend origins.
///
/// Credentials are allowed only for an explicit origin list; `*` opens the
/// API to any origin without credentials.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    if origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    cors.allow_origin(origins).allow_credentials(true)
}
