//! Analysis Module - Pure domain services for story analysis.
//!
//! This module turns free-text story descriptions into structured scene
//! analyses and prices them.
//!
//! # Components
//!
//! - `StoryAnalysis` - Characters, setting, props, mood, actions and derived metrics
//! - `Industry` - Market tag driving cost baselines and prompt focus
//! - `ResponseSanitizer` - Extracts a JSON object from a raw model completion
//! - `CostEstimator` - Deterministic per-industry render cost estimate
//! - `FallbackAnalyzer` - Canned, industry-aware analysis used when the model fails
//! - `AnalysisPrompt` - Prompt template sent to the language model
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. Calling the model,
//! tracking metrics and choosing between model output and fallback happen in
//! the application layer.

mod cost_estimator;
mod errors;
mod fallback_analyzer;
mod industry;
mod prompt;
mod response_sanitizer;
mod story_analysis;

pub use cost_estimator::CostEstimator;
pub use errors::AnalysisError;
pub use fallback_analyzer::FallbackAnalyzer;
pub use industry::Industry;
pub use prompt::AnalysisPrompt;
pub use response_sanitizer::ResponseSanitizer;
pub use story_analysis::{
    AnalysisEngine, StoryAnalysis, DEFAULT_COMPLEXITY, MAX_COMPLEXITY, MIN_COMPLEXITY,
};
