//! Integration tests for scene generation and retrieval.
//!
//! Exercises the analyze -> generate -> view flow through the full router.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower::ServiceExt;

use liorawave::adapters::ai::MockAIProvider;
use liorawave::adapters::http::{app_router, AppState};
use liorawave::adapters::{InMemoryBusinessTracker, InMemorySceneStore, MockSceneRenderer};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn test_app_with_renderer(renderer: MockSceneRenderer) -> Router {
    let state = AppState::new(
        Arc::new(MockAIProvider::new()),
        Arc::new(InMemorySceneStore::new()),
        Arc::new(renderer),
        Arc::new(InMemoryBusinessTracker::new()),
    )
    .with_public_base_url("https://demo.liorawave.com/");
    app_router(
        state,
        &["http://localhost:3000".to_string()],
        Duration::from_secs(10),
    )
}

fn test_app() -> Router {
    test_app_with_renderer(MockSceneRenderer::instant())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn crowded_analysis() -> Value {
    json!({
        "characters": ["hero", "mentor", "rival", "villain", "sidekick"],
        "setting": "market square",
        "objects": ["cart", "lantern", "map", "coin", "barrel", "crate", "banner"],
        "mood": "bustling",
        "actions": ["trading"],
        "complexityScore": 8,
        "estimatedRenderCost": 0
    })
}

// =============================================================================
// Generation
// =============================================================================

#[tokio::test]
async fn generation_describes_placeholder_assets() {
    let app = test_app();

    let (status, body) = send(
        &app,
        post(
            "/api/generate-scene",
            json!({"analysis": crowded_analysis(), "style": "realistic", "quality": "standard"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["format"], "GLB");
    // 3 characters + 5 props survive the layout caps
    assert_eq!(body["modelUrls"].as_array().unwrap().len(), 8);
    assert_eq!(body["polyCount"], 40000);
    assert_eq!(body["estimatedCost"], 2.0);

    let scene_id = body["sceneId"].as_str().unwrap();
    assert_eq!(scene_id.len(), 8);
    assert_eq!(body["previewImage"], format!("/api/mock-preview/{}", scene_id));
    assert_eq!(body["interactiveViewer"], format!("/scene-viewer/{}", scene_id));
    assert_eq!(body["modelUrls"][0], format!("/api/mock-model/{}/hero", scene_id));
}

#[tokio::test]
async fn missing_analysis_is_rejected() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post("/api/generate-scene", json!({"style": "fantasy"})))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

// =============================================================================
// Round trip
// =============================================================================

#[tokio::test]
async fn viewer_returns_the_generated_composition() {
    let app = test_app();

    let (_, analysis) = send(&app, post("/api/analyze", json!({"text": "A knight", "industry": "gaming"}))).await;
    let (_, generated) = send(
        &app,
        post("/api/generate-scene", json!({"analysis": analysis["analysis"]})),
    )
    .await;
    let scene_id = generated["sceneId"].as_str().unwrap().to_string();

    let (status, viewer) = send(&app, get(&format!("/api/scene-viewer/{}", scene_id))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(viewer["sceneId"], scene_id);
    assert_eq!(viewer["composition"]["sceneId"], scene_id);
    assert_eq!(viewer["viewerUrl"], format!("/api/scene-viewer/{}", scene_id));
    assert_eq!(
        viewer["embedCode"],
        format!(
            r#"<iframe src="https://demo.liorawave.com/api/scene-viewer/{}" width="800" height="600"></iframe>"#,
            scene_id
        )
    );

    let elements = viewer["composition"]["elements"].as_array().unwrap();
    assert_eq!(elements.len(), 5);
    assert_eq!(elements[0]["type"], "character");
    assert_eq!(elements[0]["name"], "knight");
    assert_eq!(elements[0]["description"], "Main character: knight");
    assert_eq!(elements[2]["type"], "prop");
    assert_eq!(elements[2]["position"], json!({"x": -3.0, "y": 0.0, "z": 0.0}));
    assert_eq!(viewer["composition"]["lighting"]["type"], "three_point");
    assert_eq!(viewer["composition"]["lighting"]["mood"], "epic and dramatic");
    assert_eq!(viewer["composition"]["cameraAngles"].as_array().unwrap().len(), 2);

    // The link in the generation result resolves to the same composition.
    let (status, linked) = send(&app, get(generated["interactiveViewer"].as_str().unwrap())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(linked["composition"], viewer["composition"]);
}

#[tokio::test]
async fn unknown_scene_is_not_found() {
    let app = test_app();

    let (status, body) = send(&app, get("/api/scene-viewer/0badc0de")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "SCENE_NOT_FOUND");
    assert_eq!(body["message"], "Scene not found");
}

// =============================================================================
// Tracking and concurrency
// =============================================================================

#[tokio::test]
async fn generations_are_tracked() {
    let app = test_app();

    for _ in 0..3 {
        let (status, _) = send(
            &app,
            post("/api/generate-scene", json!({"analysis": crowded_analysis()})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, metrics) = send(&app, get("/api/business-metrics")).await;
    assert_eq!(metrics["totalScenesGenerated"], 3);
    assert_eq!(metrics["apiUsage"]["generate3d"], 3);
    assert_eq!(metrics["traction"]["scenesGenerated"], 3);
}

#[tokio::test]
async fn slow_renders_do_not_serialize_requests() {
    let app = test_app_with_renderer(MockSceneRenderer::new(Duration::from_millis(300)));
    let started = Instant::now();

    let requests = (0..4).map(|_| {
        let app = app.clone();
        tokio::spawn(async move {
            send(
                &app,
                post("/api/generate-scene", json!({"analysis": crowded_analysis()})),
            )
            .await
        })
    });

    let mut ids = Vec::new();
    for handle in requests.collect::<Vec<_>>() {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        ids.push(body["sceneId"].as_str().unwrap().to_string());
    }

    assert!(started.elapsed() < Duration::from_millis(1000));
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}
