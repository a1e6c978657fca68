//! Mock scene renderer.
//!
//! Stands in for a real 3D backend: waits a configurable amount of time and
//! then describes placeholder assets served by the mock asset routes.

use async_trait::async_trait;
use std::time::{Duration, Instant};
use tokio::time::sleep;

use crate::domain::scene::{GenerationResult, RenderSettings, SceneComposition, SceneError};
use crate::ports::SceneRenderer;

/// Renderer that produces placeholder assets after a simulated delay.
#[derive(Debug, Clone)]
pub struct MockSceneRenderer {
    delay: Duration,
}

impl MockSceneRenderer {
    /// Creates a renderer that waits `delay` per render.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Creates a renderer that returns immediately.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for MockSceneRenderer {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

#[async_trait]
impl SceneRenderer for MockSceneRenderer {
    async fn render(
        &self,
        composition: &SceneComposition,
        settings: &RenderSettings,
    ) -> Result<GenerationResult, SceneError> {
        let started = Instant::now();

        tracing::debug!(
            scene_id = %composition.scene_id,
            style = %settings.style,
            quality = %settings.quality,
            elements = composition.elements.len(),
            "Rendering placeholder scene"
        );

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        Ok(GenerationResult::placeholder(
            composition,
            started.elapsed().as_secs_f64(),
        ))
    }
}
