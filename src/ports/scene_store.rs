//! SceneStore port - Storage for scene compositions.

use async_trait::async_trait;

use crate::domain::foundation::SceneId;
use crate::domain::scene::SceneComposition;

/// Keeps compositions retrievable by id.
///
/// Entries live for the lifetime of the store; there is no eviction.
#[async_trait]
pub trait SceneStore: Send + Sync {
    /// Stores a composition under its own `scene_id`, replacing any previous entry.
    async fn save(&self, composition: SceneComposition);

    /// Returns the composition stored under `scene_id`, if any.
    async fn find(&self, scene_id: &SceneId) -> Option<SceneComposition>;
}
