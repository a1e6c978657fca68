//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Language model clients (Ollama, mock)
//! - `storage` - Scene composition storage
//! - `metrics` - Business counters
//! - `render` - Placeholder scene renderer
//! - `http` - Axum REST API

pub mod ai;
pub mod http;
pub mod metrics;
pub mod render;
pub mod storage;

pub use ai::{MockAIProvider, OllamaConfig, OllamaProvider};
pub use metrics::InMemoryBusinessTracker;
pub use render::MockSceneRenderer;
pub use storage::InMemorySceneStore;
