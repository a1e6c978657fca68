//! CostEstimator - render cost for an analysis.

use super::{Industry, StoryAnalysis};

/// Computes the service price of producing a scene.
///
/// Pure and deterministic. Model-supplied costs are never consulted.
pub struct CostEstimator;

impl CostEstimator {
    /// Complexity at which the industry base cost applies unscaled.
    pub const REFERENCE_COMPLEXITY: f64 = 5.0;

    /// Cost increase per character or prop in the scene.
    pub const PER_ELEMENT_FACTOR: f64 = 0.1;

    /// Share of the traditional price charged by the service (80% reduction).
    pub const SERVICE_COST_SHARE: f64 = 0.2;

    /// Estimates the render cost of an analysis, rounded to cents.
    ///
    /// # Algorithm
    /// `base(industry) * (complexity / 5) * (1 + 0.1 * (characters + objects)) * 0.2`
    ///
    /// Negative products (only reachable with an unclamped negative score)
    /// are floored at zero.
    pub fn estimate(analysis: &StoryAnalysis, industry: &Industry) -> f64 {
        let complexity_factor = analysis.complexity_score / Self::REFERENCE_COMPLEXITY;
        let size_factor = 1.0 + Self::PER_ELEMENT_FACTOR * analysis.element_count() as f64;
        let traditional = industry.base_cost() * complexity_factor * size_factor;
        round_cents(traditional * Self::SERVICE_COST_SHARE).max(0.0)
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
