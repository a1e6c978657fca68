//! StoryAnalysis - structured extraction of a story's scene elements.

use serde::{Deserialize, Serialize};

use super::{CostEstimator, Industry};

/// Lowest complexity score a caller ever sees.
pub const MIN_COMPLEXITY: f64 = 1.0;

/// Highest complexity score a caller ever sees.
pub const MAX_COMPLEXITY: f64 = 10.0;

/// Complexity assumed when the model omits the score.
pub const DEFAULT_COMPLEXITY: f64 = 5.0;

/// Narrative elements of a story plus derived cost and complexity metrics.
///
/// Deserialization accepts both camelCase and snake_case keys so analyses
/// produced by older clients can be fed back into scene generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryAnalysis {
    pub characters: Vec<String>,
    pub setting: String,
    pub objects: Vec<String>,
    pub mood: String,
    pub actions: Vec<String>,
    #[serde(alias = "complexity_score", default = "default_complexity")]
    pub complexity_score: f64,
    #[serde(alias = "estimated_render_cost", default)]
    pub estimated_render_cost: f64,
}

fn default_complexity() -> f64 {
    DEFAULT_COMPLEXITY
}

impl StoryAnalysis {
    /// Number of characters plus props, the size factor of the cost model.
    pub fn element_count(&self) -> usize {
        self.characters.len() + self.objects.len()
    }

    /// Clamps the complexity score and recomputes the render cost.
    ///
    /// Every analysis goes through this before leaving the service, whatever
    /// produced it. Any cost already present is discarded.
    pub fn finalize(mut self, industry: &Industry) -> Self {
        self.complexity_score = clamp_complexity(self.complexity_score);
        self.estimated_render_cost = CostEstimator::estimate(&self, industry);
        self
    }
}

/// Clamps a score into [MIN_COMPLEXITY, MAX_COMPLEXITY]; NaN maps to the default.
pub(crate) fn clamp_complexity(score: f64) -> f64 {
    if score.is_nan() {
        return DEFAULT_COMPLEXITY;
    }
    score.clamp(MIN_COMPLEXITY, MAX_COMPLEXITY)
}

/// Which path produced an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisEngine {
    /// Parsed from the language model's completion.
    Model,
    /// Substituted by the deterministic fallback.
    Fallback,
}

impl AnalysisEngine {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisEngine::Model => "model",
            AnalysisEngine::Fallback => "fallback",
        }
    }
}
