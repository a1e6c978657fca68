//! Request and response bodies for scene generation and viewing.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::StoryAnalysis;
use crate::domain::foundation::SceneId;
use crate::domain::scene::{GenerationResult, RenderSettings, SceneComposition};

/// Body of `POST /api/generate-scene`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateSceneRequest {
    pub analysis: StoryAnalysis,
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default = "default_quality")]
    pub quality: String,
}

impl GenerateSceneRequest {
    pub fn settings(&self) -> RenderSettings {
        RenderSettings {
            style: self.style.clone(),
            quality: self.quality.clone(),
        }
    }
}

fn default_style() -> String {
    RenderSettings::default().style
}

fn default_quality() -> String {
    RenderSettings::default().quality
}

/// Response of `POST /api/generate-scene`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSceneResponse {
    pub success: bool,
    #[serde(flatten)]
    pub result: GenerationResult,
}

/// Response of `GET /api/scene-viewer/:scene_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneViewerResponse {
    pub scene_id: SceneId,
    pub composition: SceneComposition,
    pub viewer_url: String,
    pub embed_code: String,
}

impl SceneViewerResponse {
    pub fn new(composition: SceneComposition, public_base_url: &str) -> Self {
        let scene_id = composition.scene_id.clone();
        Self {
            viewer_url: format!("/api/scene-viewer/{}", scene_id),
            embed_code: format!(
                r#"<iframe src="{}/api/scene-viewer/{}" width="800" height="600"></iframe>"#,
                public_base_url, scene_id
            ),
            scene_id,
            composition,
        }
    }
}

/// Placeholder body of `GET /api/mock-model/:scene_id/:model_name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockModelResponse {
    pub scene_id: String,
    pub model_name: String,
    pub status: String,
    pub message: String,
}

impl MockModelResponse {
    pub fn new(scene_id: String, model_name: String) -> Self {
        Self {
            scene_id,
            model_name,
            status: "mock_model".to_string(),
            message: "This is a mock 3D model endpoint. In production, this would serve actual GLB files."
                .to_string(),
        }
    }
}

/// Placeholder body of `GET /api/mock-preview/:scene_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockPreviewResponse {
    pub scene_id: String,
    pub status: String,
    pub message: String,
}

impl MockPreviewResponse {
    pub fn new(scene_id: String) -> Self {
        Self {
            scene_id,
            status: "mock_preview".to_string(),
            message: "This is a mock preview endpoint. In production, this would serve actual preview images."
                .to_string(),
        }
    }
}
