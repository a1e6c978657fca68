//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `LIORAWAVE` prefix and
//! nested values are separated by double underscores. Every field has a
//! default, so an empty environment yields a runnable configuration.
//!
//! # Example
//!
//! ```no_run
//! use liorawave::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on port {}", config.server.port);
//! ```

mod ai;
mod error;
mod render;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use render::RenderConfig;
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Language model service (Ollama)
    #[serde(default)]
    pub ai: AiConfig,

    /// Placeholder renderer
    #[serde(default)]
    pub render: RenderConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `LIORAWAVE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `LIORAWAVE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `LIORAWAVE__AI__MODEL=mistral` -> `ai.model = "mistral"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LIORAWAVE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid value found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.render.validate()?;

        // Scene generation runs under the request timeout
        let render_secs = self.render.simulated_delay_ms.div_ceil(1000);
        if self.server.request_timeout_secs <= render_secs {
            return Err(ValidationError::RequestTimeoutTooShort { render_secs });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
