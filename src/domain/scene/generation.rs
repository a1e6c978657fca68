//! Placeholder generation results.
//!
//! There is no geometry pipeline behind these values. A generation result
//! lists one synthetic asset reference per element and prices the scene at a
//! flat per-element rate.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::foundation::SceneId;

use super::SceneComposition;

/// Asset format reported for every scene.
pub const MODEL_FORMAT: &str = "GLB";

/// Polygon budget reported per element.
pub const POLYS_PER_ELEMENT: u64 = 5000;

/// Flat generation price per element.
pub const COST_PER_ELEMENT: f64 = 0.25;

/// Client-selected rendering options. Recorded but not interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub style: String,
    pub quality: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            style: "fantasy".to_string(),
            quality: "preview".to_string(),
        }
    }
}

/// Synthetic output of a scene render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub scene_id: SceneId,
    pub model_urls: Vec<String>,
    pub preview_image: String,
    pub interactive_viewer: String,
    pub format: String,
    pub poly_count: u64,
    /// Wall-clock seconds, rounded to two decimals.
    pub generation_time: f64,
    pub estimated_cost: f64,
}

impl GenerationResult {
    /// Describes the placeholder assets for `composition`.
    pub fn placeholder(composition: &SceneComposition, elapsed_secs: f64) -> Self {
        let scene_id = &composition.scene_id;
        let model_urls: Vec<String> = composition
            .elements
            .iter()
            .map(|element| mock_model_path(scene_id, &element.name))
            .collect();
        let count = model_urls.len();

        Self {
            scene_id: scene_id.clone(),
            preview_image: format!("/api/mock-preview/{}", scene_id),
            interactive_viewer: format!("/scene-viewer/{}", scene_id),
            format: MODEL_FORMAT.to_string(),
            poly_count: count as u64 * POLYS_PER_ELEMENT,
            generation_time: (elapsed_secs * 100.0).round() / 100.0,
            estimated_cost: COST_PER_ELEMENT * count as f64,
            model_urls,
        }
    }
}

/// `/api/mock-model/{scene_id}/{name}` with both segments percent-encoded.
fn mock_model_path(scene_id: &SceneId, name: &str) -> String {
    let raw = || format!("/api/mock-model/{}/{}", scene_id, name);
    let Ok(mut url) = Url::parse("http://localhost/api/mock-model") else {
        return raw();
    };
    match url.path_segments_mut() {
        Ok(mut segments) => {
            segments.push(scene_id.as_str()).push(name);
        }
        Err(()) => return raw(),
    }
    url.path().to_string()
}
