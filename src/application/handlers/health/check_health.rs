//! CheckHealthHandler - Query handler probing the model service.

use std::sync::Arc;

use crate::ports::{AIProvider, ProviderInfo};

/// Outcome of a health probe.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthStatus {
    pub model_available: bool,
    pub provider: ProviderInfo,
}

/// Handler for health checks.
///
/// The service itself is always reported healthy; an unreachable model only
/// means analyses will come from the fallback.
pub struct CheckHealthHandler {
    provider: Arc<dyn AIProvider>,
}

impl CheckHealthHandler {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(&self) -> HealthStatus {
        let model_available = self.provider.is_available().await;
        if !model_available {
            tracing::debug!("Model service not reachable, analyses will use fallback");
        }
        HealthStatus {
            model_available,
            provider: self.provider.provider_info(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;

    #[tokio::test]
    async fn reports_model_availability() {
        let up = CheckHealthHandler::new(Arc::new(MockAIProvider::new()))
            .handle()
            .await;
        assert!(up.model_available);
        assert_eq!(up.provider.name, "mock");

        let down = CheckHealthHandler::new(Arc::new(MockAIProvider::new().with_availability(false)))
            .handle()
            .await;
        assert!(!down.model_available);
    }
}
