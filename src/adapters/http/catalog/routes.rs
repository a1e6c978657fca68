//! HTTP routes for informational endpoints.

use axum::routing::get;
use axum::Router;

use super::super::state::AppState;
use super::handlers::{
    business_metrics, examples, health_check, pricing, service_banner, use_cases,
};

/// Creates the catalog router.
pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_banner))
        .route("/api/health", get(health_check))
        .route("/api/business-metrics", get(business_metrics))
        .route("/api/use-cases", get(use_cases))
        .route("/api/pricing", get(pricing))
        .route("/api/examples", get(examples))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::metrics::InMemoryBusinessTracker;
    use crate::adapters::render::MockSceneRenderer;
    use crate::adapters::storage::InMemorySceneStore;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(provider: MockAIProvider) -> Router {
        catalog_routes(AppState::new(
            Arc::new(provider),
            Arc::new(InMemorySceneStore::new()),
            Arc::new(MockSceneRenderer::instant()),
            Arc::new(InMemoryBusinessTracker::new()),
        ))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn banner_lists_target_markets() {
        let (status, json) = get_json(app(MockAIProvider::new()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["targetMarkets"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn health_reports_model_down_but_service_healthy() {
        let (status, json) = get_json(
            app(MockAIProvider::new().with_availability(false)),
            "/api/health",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["modelAvailable"], false);
        assert!(json["timestamp"].as_f64().unwrap() > 0.0);
    }

    #[tokio::test]
    async fn business_metrics_start_at_zero() {
        let (status, json) = get_json(app(MockAIProvider::new()), "/api/business-metrics").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["totalScenesGenerated"], 0);
        assert_eq!(json["apiUsage"]["analyze"], 0);
        assert_eq!(json["traction"]["apiCalls"], 0);
    }

    #[tokio::test]
    async fn static_catalogs_are_served() {
        let (_, use_cases) = get_json(app(MockAIProvider::new()), "/api/use-cases").await;
        assert!(use_cases.get("architecture").is_some());

        let (_, pricing) = get_json(app(MockAIProvider::new()), "/api/pricing").await;
        assert_eq!(pricing["tiers"]["pro"]["price"], "$0.25 per scene");

        let (_, examples) = get_json(app(MockAIProvider::new()), "/api/examples").await;
        assert_eq!(examples.as_array().unwrap().len(), 4);
        assert_eq!(examples[2]["industry"], "education");
    }
}
