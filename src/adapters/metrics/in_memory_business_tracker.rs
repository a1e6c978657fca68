//! In-memory business tracker implementation.
//!
//! Counters live for the lifetime of the process and start at zero on boot.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::ports::{ApiUsage, BusinessMetrics, BusinessTracker};

#[derive(Debug, Default)]
struct Counters {
    scenes_generated: u64,
    usage: ApiUsage,
    total_saved: f64,
}

/// In-memory implementation of the BusinessTracker port.
///
/// All counters sit behind one lock so a snapshot never mixes values from
/// before and after a concurrent update.
///
/// # Example
///
/// ```ignore
/// let tracker = InMemoryBusinessTracker::new();
/// tracker.track_analysis(2250.0).await;
/// tracker.track_generation().await;
///
/// let metrics = tracker.metrics().await;
/// assert_eq!(metrics.total_scenes_generated, 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBusinessTracker {
    counters: Mutex<Counters>,
}

impl InMemoryBusinessTracker {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BusinessTracker for InMemoryBusinessTracker {
    async fn track_analysis(&self, cost_savings: f64) {
        let mut counters = self.counters.lock().await;
        counters.usage.analyze += 1;
        if cost_savings.is_finite() && cost_savings > 0.0 {
            counters.total_saved += cost_savings;
        }
    }

    async fn track_generation(&self) {
        let mut counters = self.counters.lock().await;
        counters.usage.generate_3d += 1;
        counters.scenes_generated += 1;
    }

    async fn metrics(&self) -> BusinessMetrics {
        let counters = self.counters.lock().await;
        BusinessMetrics::from_counters(
            counters.scenes_generated,
            counters.usage.clone(),
            counters.total_saved,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn starts_at_zero() {
        let metrics = InMemoryBusinessTracker::new().metrics().await;
        assert_eq!(metrics, BusinessMetrics::default());
    }

    #[tokio::test]
    async fn analysis_adds_savings_without_counting_scenes() {
        let tracker = InMemoryBusinessTracker::new();
        tracker.track_analysis(2250.0).await;
        tracker.track_analysis(600.0).await;

        let metrics = tracker.metrics().await;
        assert_eq!(metrics.api_usage.analyze, 2);
        assert_eq!(metrics.api_usage.generate_3d, 0);
        assert_eq!(metrics.total_scenes_generated, 0);
        assert_eq!(metrics.cost_savings.total_saved, 2850.0);
        assert_eq!(metrics.cost_savings.average_per_scene, 2850.0);
    }

    #[tokio::test]
    async fn generation_counts_scenes() {
        let tracker = InMemoryBusinessTracker::new();
        tracker.track_analysis(2250.0).await;
        tracker.track_generation().await;
        tracker.track_generation().await;

        let metrics = tracker.metrics().await;
        assert_eq!(metrics.total_scenes_generated, 2);
        assert_eq!(metrics.api_usage.generate_3d, 2);
        assert_eq!(metrics.cost_savings.average_per_scene, 1125.0);
    }

    #[tokio::test]
    async fn ignores_non_finite_savings() {
        let tracker = InMemoryBusinessTracker::new();
        tracker.track_analysis(f64::NAN).await;
        tracker.track_analysis(-5.0).await;

        let metrics = tracker.metrics().await;
        assert_eq!(metrics.api_usage.analyze, 2);
        assert_eq!(metrics.cost_savings.total_saved, 0.0);
    }

    #[tokio::test]
    async fn concurrent_updates_are_not_lost() {
        let tracker = Arc::new(InMemoryBusinessTracker::new());
        let mut tasks = Vec::new();
        for _ in 0..50 {
            let tracker = tracker.clone();
            tasks.push(tokio::spawn(async move {
                tracker.track_analysis(10.0).await;
                tracker.track_generation().await;
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        let metrics = tracker.metrics().await;
        assert_eq!(metrics.api_usage.analyze, 50);
        assert_eq!(metrics.api_usage.generate_3d, 50);
        assert_eq!(metrics.total_scenes_generated, 50);
        assert_eq!(metrics.cost_savings.total_saved, 500.0);
    }
}
