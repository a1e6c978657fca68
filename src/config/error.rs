//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("{0} must be an http(s) URL")]
    InvalidUrl(&'static str),

    #[error("Model name must not be empty")]
    EmptyModelName,

    #[error("Model timeout must be between 1 and 600 seconds")]
    InvalidModelTimeout,

    #[error("Temperature must be between 0.0 and 2.0")]
    InvalidTemperature,

    #[error("Simulated render delay must not exceed 60000 ms")]
    InvalidRenderDelay,

    #[error("Request timeout must exceed the simulated render delay ({render_secs}s)")]
    RequestTimeoutTooShort { render_secs: u64 },
}
