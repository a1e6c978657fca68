//! Render configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Placeholder renderer configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Artificial latency per render in milliseconds
    #[serde(default = "default_simulated_delay")]
    pub simulated_delay_ms: u64,
}

impl RenderConfig {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.simulated_delay_ms > 60_000 {
            return Err(ValidationError::InvalidRenderDelay);
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_simulated_delay(),
        }
    }
}

fn default_simulated_delay() -> u64 {
    2000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay() {
        assert_eq!(
            RenderConfig::default().simulated_delay(),
            Duration::from_secs(2)
        );
    }

    #[test]
    fn test_zero_delay_is_valid() {
        let config = RenderConfig {
            simulated_delay_ms: 0,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_excessive_delay_is_rejected() {
        let config = RenderConfig {
            simulated_delay_ms: 120_000,
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidRenderDelay));
    }
}
