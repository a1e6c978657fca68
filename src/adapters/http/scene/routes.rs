//! HTTP routes for scenes.

use axum::routing::{get, post};
use axum::Router;

use super::super::state::AppState;
use super::handlers::{generate_scene, get_mock_model, get_mock_preview, get_scene_viewer};

/// Creates the scene router with all routes.
pub fn scene_routes(state: AppState) -> Router {
    Router::new()
        // POST /api/generate-scene
        .route("/api/generate-scene", post(generate_scene))
        // GET /api/scene-viewer/:scene_id
        .route("/api/scene-viewer/:scene_id", get(get_scene_viewer))
        // Generation results link here
        .route("/scene-viewer/:scene_id", get(get_scene_viewer))
        // GET /api/mock-model/:scene_id/:model_name
        .route("/api/mock-model/:scene_id/:model_name", get(get_mock_model))
        // GET /api/mock-preview/:scene_id
        .route("/api/mock-preview/:scene_id", get(get_mock_preview))
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

    fn app() -> Router {
        scene_routes(AppState::new(
            Arc::new(MockAIProvider::new()),
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
    async fn unknown_scene_is_not_found() {
        let (status, json) = get_json(app(), "/api/scene-viewer/ffffffff").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "SCENE_NOT_FOUND");
    }

    #[tokio::test]
    async fn unprefixed_viewer_route_is_served() {
        let (status, _) = get_json(app(), "/scene-viewer/ffffffff").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn mock_model_echoes_path() {
        let (status, json) = get_json(app(), "/api/mock-model/abc12345/knight").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["sceneId"], "abc12345");
        assert_eq!(json["modelName"], "knight");
        assert_eq!(json["status"], "mock_model");
    }

    #[tokio::test]
    async fn mock_model_decodes_encoded_name() {
        let (status, json) =
            get_json(app(), "/api/mock-model/abc12345/treasure%20chest").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["modelName"], "treasure chest");
    }

    #[tokio::test]
    async fn mock_preview_echoes_scene() {
        let (status, json) = get_json(app(), "/api/mock-preview/abc12345").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "mock_preview");
    }
}
