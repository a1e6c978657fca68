//! Storage Adapters
//!
//! Implementations of the SceneStore port.
//!
//! - **InMemorySceneStore** - Process-local map, lost on restart

mod in_memory_scene_store;

pub use in_memory_scene_store::InMemorySceneStore;
