//! Shared application state for the HTTP layer.

use std::sync::Arc;

use crate::application::{
    AnalyzeStoryHandler, CheckHealthHandler, GenerateSceneHandler, GetBusinessMetricsHandler,
    GetSceneHandler, DEFAULT_TEMPERATURE,
};
use crate::ports::{AIProvider, BusinessTracker, SceneRenderer, SceneStore};

/// Dependencies injected into every request handler.
#[derive(Clone)]
pub struct AppState {
    pub ai_provider: Arc<dyn AIProvider>,
    pub scene_store: Arc<dyn SceneStore>,
    pub scene_renderer: Arc<dyn SceneRenderer>,
    pub business_tracker: Arc<dyn BusinessTracker>,
    /// Sampling temperature for analysis requests.
    pub temperature: f32,
    /// Base URL used in viewer embed snippets, without trailing slash.
    pub public_base_url: String,
}

impl AppState {
    pub fn new(
        ai_provider: Arc<dyn AIProvider>,
        scene_store: Arc<dyn SceneStore>,
        scene_renderer: Arc<dyn SceneRenderer>,
        business_tracker: Arc<dyn BusinessTracker>,
    ) -> Self {
        Self {
            ai_provider,
            scene_store,
            scene_renderer,
            business_tracker,
            temperature: DEFAULT_TEMPERATURE,
            public_base_url: "http://localhost:5000".to_string(),
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_public_base_url(mut self, url: impl Into<String>) -> Self {
        self.public_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn analyze_story_handler(&self) -> AnalyzeStoryHandler {
        AnalyzeStoryHandler::new(self.ai_provider.clone(), self.business_tracker.clone())
            .with_temperature(self.temperature)
    }

    pub fn generate_scene_handler(&self) -> GenerateSceneHandler {
        GenerateSceneHandler::new(
            self.scene_store.clone(),
            self.scene_renderer.clone(),
            self.business_tracker.clone(),
        )
    }

    pub fn get_scene_handler(&self) -> GetSceneHandler {
        GetSceneHandler::new(self.scene_store.clone())
    }

    pub fn business_metrics_handler(&self) -> GetBusinessMetricsHandler {
        GetBusinessMetricsHandler::new(self.business_tracker.clone())
    }

    pub fn health_handler(&self) -> CheckHealthHandler {
        CheckHealthHandler::new(self.ai_provider.clone())
    }
}
