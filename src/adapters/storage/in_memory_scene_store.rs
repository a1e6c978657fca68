//! In-Memory Scene Store Adapter
//!
//! Keeps compositions in a process-local map for the life of the server.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SceneId;
use crate::domain::scene::SceneComposition;
use crate::ports::SceneStore;

/// In-memory storage for scene compositions
#[derive(Debug, Clone, Default)]
pub struct InMemorySceneStore {
    scenes: Arc<RwLock<HashMap<SceneId, SceneComposition>>>,
}

impl InMemorySceneStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored scenes
    pub async fn scene_count(&self) -> usize {
        self.scenes.read().await.len()
    }
}

#[async_trait]
impl SceneStore for InMemorySceneStore {
    async fn save(&self, composition: SceneComposition) {
        let mut scenes = self.scenes.write().await;
        scenes.insert(composition.scene_id.clone(), composition);
    }

    async fn find(&self, scene_id: &SceneId) -> Option<SceneComposition> {
        self.scenes.read().await.get(scene_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{FallbackAnalyzer, Industry};
    use crate::domain::scene::SceneComposer;

    fn composition(id: &str) -> SceneComposition {
        let analysis = FallbackAnalyzer::analyze("", &Industry::Gaming);
        SceneComposer::compose(SceneId::new(id).unwrap(), &analysis)
    }

    #[tokio::test]
    async fn saves_and_finds() {
        let store = InMemorySceneStore::new();
        store.save(composition("abc12345")).await;

        let found = store.find(&SceneId::new("abc12345").unwrap()).await;
        assert_eq!(found, Some(composition("abc12345")));
    }

    #[tokio::test]
    async fn missing_id_returns_none() {
        let store = InMemorySceneStore::new();
        assert!(store.find(&SceneId::new("nope").unwrap()).await.is_none());
    }

    #[tokio::test]
    async fn save_replaces_existing_entry() {
        let store = InMemorySceneStore::new();
        store.save(composition("abc12345")).await;

        let mut updated = composition("abc12345");
        updated.lighting.mood = "somber".to_string();
        store.save(updated).await;

        assert_eq!(store.scene_count().await, 1);
        let found = store.find(&SceneId::new("abc12345").unwrap()).await.unwrap();
        assert_eq!(found.lighting.mood, "somber");
    }

    #[tokio::test]
    async fn concurrent_saves_are_all_kept() {
        let store = InMemorySceneStore::new();
        let mut tasks = Vec::new();
        for i in 0..20 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                store.save(composition(&format!("scene{:03}", i))).await;
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }
        assert_eq!(store.scene_count().await, 20);
    }
}
