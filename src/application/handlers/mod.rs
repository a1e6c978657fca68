//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analysis;
pub mod health;
pub mod metrics;
pub mod scene;

pub use analysis::{
    AnalyzeStoryCommand, AnalyzeStoryHandler, AnalyzeStoryResult, DEFAULT_TEMPERATURE,
};
pub use health::{CheckHealthHandler, HealthStatus};
pub use metrics::GetBusinessMetricsHandler;
pub use scene::{
    GenerateSceneCommand, GenerateSceneHandler, GenerateSceneResult, GetSceneHandler,
    GetSceneQuery,
};
