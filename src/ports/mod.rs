//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Text-completion model service
//! - `SceneStore` - Process-lifetime storage of scene compositions
//! - `BusinessTracker` - Usage counters and cumulative cost savings
//! - `SceneRenderer` - Turns a composition into (placeholder) assets

mod ai_provider;
mod business_tracker;
mod scene_renderer;
mod scene_store;

pub use ai_provider::{AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo};
pub use business_tracker::{ApiUsage, BusinessMetrics, BusinessTracker, CostSavings};
pub use scene_renderer::SceneRenderer;
pub use scene_store::SceneStore;
