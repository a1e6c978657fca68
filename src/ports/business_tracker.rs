//! BusinessTracker port - Interface for usage and savings counters.
//!
//! Counters are only ever incremented, by exactly two operations: one per
//! completed analysis and one per completed scene generation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Process-wide business counters.
#[async_trait]
pub trait BusinessTracker: Send + Sync {
    /// Records one completed analysis and adds its cost estimate to the savings total.
    async fn track_analysis(&self, cost_savings: f64);

    /// Records one completed scene generation.
    async fn track_generation(&self);

    /// Returns a consistent snapshot of all counters.
    async fn metrics(&self) -> BusinessMetrics;
}

/// Snapshot of business counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessMetrics {
    pub total_scenes_generated: u64,
    pub api_usage: ApiUsage,
    pub cost_savings: CostSavings,
}

/// Call counts per tracked endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUsage {
    pub analyze: u64,
    #[serde(rename = "generate3d")]
    pub generate_3d: u64,
}

impl ApiUsage {
    /// Total tracked calls across endpoints.
    pub fn total(&self) -> u64 {
        self.analyze + self.generate_3d
    }
}

/// Cumulative cost savings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSavings {
    pub total_saved: f64,
    pub average_per_scene: f64,
}

impl BusinessMetrics {
    /// Builds a snapshot from raw counters, rounding money to cents.
    ///
    /// The average divides by the number of generated scenes (at least one),
    /// not by the number of analyses.
    pub fn from_counters(scenes_generated: u64, api_usage: ApiUsage, total_saved: f64) -> Self {
        let average = total_saved / scenes_generated.max(1) as f64;
        Self {
            total_scenes_generated: scenes_generated,
            api_usage,
            cost_savings: CostSavings {
                total_saved: round_cents(total_saved),
                average_per_scene: round_cents(average),
            },
        }
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
