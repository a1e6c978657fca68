//! SceneRenderer port - Produces assets for a composition.

use async_trait::async_trait;

use crate::domain::scene::{GenerationResult, RenderSettings, SceneComposition, SceneError};

/// Renders a composition into downloadable assets.
#[async_trait]
pub trait SceneRenderer: Send + Sync {
    /// Renders `composition`. Must not block the executor while working.
    async fn render(
        &self,
        composition: &SceneComposition,
        settings: &RenderSettings,
    ) -> Result<GenerationResult, SceneError>;
}
