//! GetBusinessMetricsHandler - Query handler for the business counters.

use std::sync::Arc;

use crate::ports::{BusinessMetrics, BusinessTracker};

/// Handler returning a snapshot of the business counters.
pub struct GetBusinessMetricsHandler {
    tracker: Arc<dyn BusinessTracker>,
}

impl GetBusinessMetricsHandler {
    pub fn new(tracker: Arc<dyn BusinessTracker>) -> Self {
        Self { tracker }
    }

    pub async fn handle(&self) -> BusinessMetrics {
        self.tracker.metrics().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::metrics::InMemoryBusinessTracker;

    #[tokio::test]
    async fn reflects_tracked_activity() {
        let tracker = Arc::new(InMemoryBusinessTracker::new());
        tracker.track_analysis(2250.0).await;
        tracker.track_generation().await;

        let metrics = GetBusinessMetricsHandler::new(tracker).handle().await;

        assert_eq!(metrics.total_scenes_generated, 1);
        assert_eq!(metrics.api_usage.total(), 2);
        assert_eq!(metrics.cost_savings.average_per_scene, 2250.0);
    }
}
