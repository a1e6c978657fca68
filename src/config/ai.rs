//! Model service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::is_http_url;

/// Language model service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Base URL of the Ollama server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model name passed with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Completion timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Timeout for the health probe in seconds
    #[serde(default = "default_health_timeout")]
    pub health_timeout_secs: u64,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get health probe timeout as Duration
    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }

    /// Validate model service configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.base_url) {
            return Err(ValidationError::InvalidUrl("ai.base_url"));
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::EmptyModelName);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 600 {
            return Err(ValidationError::InvalidModelTimeout);
        }
        if self.health_timeout_secs == 0 || self.health_timeout_secs > self.timeout_secs {
            return Err(ValidationError::InvalidTimeout);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout(),
            temperature: default_temperature(),
            health_timeout_secs: default_health_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama2".to_string()
}

fn default_timeout() -> u64 {
    45
}

fn default_temperature() -> f32 {
    0.2
}

fn default_health_timeout() -> u64 {
    2
}
