//! Ollama Provider - Implementation of AIProvider for a local Ollama server.
//!
//! Talks to the native `/api/generate` endpoint with streaming disabled.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OllamaConfig::new("http://localhost:11434")
//!     .with_model("llama2")
//!     .with_timeout(Duration::from_secs(45));
//!
//! let provider = OllamaProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo};

/// Configuration for the Ollama provider.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Base URL of the server (default: http://localhost:11434).
    pub base_url: String,
    /// Model to use (e.g., "llama2").
    pub model: String,
    /// Completion request timeout.
    pub timeout: Duration,
    /// Timeout for the availability probe.
    pub health_timeout: Duration,
}

impl OllamaConfig {
    /// Creates a new configuration for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: "llama2".to_string(),
            timeout: Duration::from_secs(45),
            health_timeout: Duration::from_secs(2),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the completion timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the availability probe timeout.
    pub fn with_health_timeout(mut self, timeout: Duration) -> Self {
        self.health_timeout = timeout;
        self
    }
}

/// Ollama API provider implementation.
pub struct OllamaProvider {
    config: OllamaConfig,
    client: Client,
}

impl OllamaProvider {
    /// Creates a new provider with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `AIError::Network` if the HTTP client cannot be built.
    pub fn new(config: OllamaConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the generate endpoint URL.
    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.config.base_url)
    }

    /// Builds the model listing URL used as a liveness probe.
    fn tags_url(&self) -> String {
        format!("{}/api/tags", self.config.base_url)
    }

    /// Converts our request to Ollama's format.
    fn to_ollama_request(&self, request: &CompletionRequest) -> OllamaRequest {
        OllamaRequest {
            model: self.config.model.clone(),
            prompt: request.prompt.clone(),
            stream: false,
            options: OllamaOptions {
                temperature: request.temperature,
            },
        }
    }

    /// Sends a request.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let body = self.to_ollama_request(request);

        self.client
            .post(self.generate_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))
    }

    fn map_transport_error(&self, e: reqwest::Error) -> AIError {
        if e.is_timeout() {
            AIError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            AIError::network(format!("Connection failed: {}", e))
        } else {
            AIError::network(e.to_string())
        }
    }

    /// Parses the response, mapping non-success statuses to errors.
    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AIError> {
        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(AIError::unavailable(format!(
                "Status {}: {}",
                status, error_body
            )));
        }

        let ollama_response: OllamaResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                AIError::Timeout {
                    timeout_secs: self.config.timeout.as_secs(),
                }
            } else {
                AIError::parse(format!("Failed to parse response: {}", e))
            }
        })?;

        Ok(CompletionResponse {
            content: ollama_response.response,
            model: ollama_response
                .model
                .unwrap_or_else(|| self.config.model.clone()),
        })
    }
}

#[async_trait]
impl AIProvider for OllamaProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        tracing::debug!(
            trace_id = %request.trace_id,
            model = %self.config.model,
            url = %self.generate_url(),
            "Sending completion request"
        );

        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }

    async fn is_available(&self) -> bool {
        match self
            .client
            .get(self.tags_url())
            .timeout(self.config.health_timeout)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("Model service probe failed: {}", e);
                false
            }
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("ollama", &self.config.model)
    }
}

// ----- Ollama API Types -----

#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    response: String,
    model: Option<String>,
}
