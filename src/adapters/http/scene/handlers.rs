//! HTTP handlers for scene generation, viewing and placeholder assets.

use axum::extract::{Json, Path, State};

use crate::application::{GenerateSceneCommand, GetSceneQuery};
use crate::domain::foundation::SceneId;

use super::super::error::ApiError;
use super::super::state::AppState;
use super::dto::{
    GenerateSceneRequest, GenerateSceneResponse, MockModelResponse, MockPreviewResponse,
    SceneViewerResponse,
};

/// POST /api/generate-scene
pub async fn generate_scene(
    State(state): State<AppState>,
    Json(request): Json<GenerateSceneRequest>,
) -> Result<Json<GenerateSceneResponse>, ApiError> {
    let cmd = GenerateSceneCommand {
        settings: request.settings(),
        analysis: request.analysis,
    };

    let result = state.generate_scene_handler().handle(cmd).await?;

    Ok(Json(GenerateSceneResponse {
        success: true,
        result: result.generation,
    }))
}

/// GET /api/scene-viewer/:scene_id
pub async fn get_scene_viewer(
    State(state): State<AppState>,
    Path(scene_id): Path<String>,
) -> Result<Json<SceneViewerResponse>, ApiError> {
    let scene_id = SceneId::new(scene_id)?;

    let composition = state
        .get_scene_handler()
        .handle(GetSceneQuery { scene_id })
        .await?;

    Ok(Json(SceneViewerResponse::new(
        composition,
        &state.public_base_url,
    )))
}

/// GET /api/mock-model/:scene_id/:model_name
pub async fn get_mock_model(
    Path((scene_id, model_name)): Path<(String, String)>,
) -> Json<MockModelResponse> {
    Json(MockModelResponse::new(scene_id, model_name))
}

/// GET /api/mock-preview/:scene_id
pub async fn get_mock_preview(Path(scene_id): Path<String>) -> Json<MockPreviewResponse> {
    Json(MockPreviewResponse::new(scene_id))
}
