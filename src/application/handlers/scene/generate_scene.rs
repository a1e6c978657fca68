//! GenerateSceneHandler - Command handler composing and rendering a scene.

use std::sync::Arc;

use crate::domain::analysis::StoryAnalysis;
use crate::domain::foundation::SceneId;
use crate::domain::scene::{
    GenerationResult, RenderSettings, SceneComposer, SceneComposition, SceneError,
};
use crate::ports::{BusinessTracker, SceneRenderer, SceneStore};

/// Command to generate a scene from an analysis.
#[derive(Debug, Clone)]
pub struct GenerateSceneCommand {
    pub analysis: StoryAnalysis,
    pub settings: RenderSettings,
}

/// Result of successful scene generation.
#[derive(Debug, Clone)]
pub struct GenerateSceneResult {
    /// Composition as stored; retrievable by its scene id.
    pub composition: SceneComposition,
    pub generation: GenerationResult,
}

/// Handler for scene generation.
pub struct GenerateSceneHandler {
    store: Arc<dyn SceneStore>,
    renderer: Arc<dyn SceneRenderer>,
    tracker: Arc<dyn BusinessTracker>,
}

impl GenerateSceneHandler {
    pub fn new(
        store: Arc<dyn SceneStore>,
        renderer: Arc<dyn SceneRenderer>,
        tracker: Arc<dyn BusinessTracker>,
    ) -> Self {
        Self {
            store,
            renderer,
            tracker,
        }
    }

    pub async fn handle(&self, cmd: GenerateSceneCommand) -> Result<GenerateSceneResult, SceneError> {
        // 1. Lay out the scene under a fresh id
        let composition = SceneComposer::compose(SceneId::generate(), &cmd.analysis);

        // 2. Make it retrievable before rendering
        self.store.save(composition.clone()).await;

        // 3. Render placeholder assets
        let generation = self.renderer.render(&composition, &cmd.settings).await?;

        // 4. Count only completed generations
        self.tracker.track_generation().await;

        tracing::info!(
            scene_id = %generation.scene_id,
            style = %cmd.settings.style,
            quality = %cmd.settings.quality,
            elements = composition.elements.len(),
            generation_time = generation.generation_time,
            "Scene generated"
        );

        Ok(GenerateSceneResult {
            composition,
            generation,
        })
    }
}
