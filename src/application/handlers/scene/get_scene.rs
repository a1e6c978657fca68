//! GetSceneHandler - Query handler for a stored composition.

use std::sync::Arc;

use crate::domain::foundation::SceneId;
use crate::domain::scene::{SceneComposition, SceneError};
use crate::ports::SceneStore;

/// Query for a composition by id.
#[derive(Debug, Clone)]
pub struct GetSceneQuery {
    pub scene_id: SceneId,
}

/// Handler for composition lookups.
pub struct GetSceneHandler {
    store: Arc<dyn SceneStore>,
}

impl GetSceneHandler {
    pub fn new(store: Arc<dyn SceneStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetSceneQuery) -> Result<SceneComposition, SceneError> {
        self.store
            .find(&query.scene_id)
            .await
            .ok_or(SceneError::NotFound(query.scene_id))
    }
}
