//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers change state (analysis tracking, scene storage); query
//! handlers only read it.

pub mod handlers;

pub use handlers::{
    AnalyzeStoryCommand, AnalyzeStoryHandler, AnalyzeStoryResult, CheckHealthHandler,
    GenerateSceneCommand, GenerateSceneHandler, GenerateSceneResult, GetBusinessMetricsHandler,
    GetSceneHandler, GetSceneQuery, HealthStatus, DEFAULT_TEMPERATURE,
};
