//! AI Provider Port - Interface for the text-completion model service.
//!
//! This port abstracts the external language model so story analysis can
//! request completions without coupling to a specific server.
//!
//! # Design
//!
//! - Single-shot, non-streaming completions
//! - Provider-agnostic request format (prompt + sampling options)
//! - Error variants distinguish timeouts, transport failures and undecodable
//!   responses so callers can log the failure class
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoProvider;
//!
//! #[async_trait]
//! impl AIProvider for EchoProvider {
//!     async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
//!         Ok(CompletionResponse::new(request.prompt, "echo"))
//!     }
//!     // ... other methods
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for language model interactions.
///
/// The service behind this port is treated as untrusted and unreliable:
/// implementations bound every call with a timeout and report failures as
/// `AIError` rather than panicking.
#[async_trait]
pub trait AIProvider: Send + Sync {
    /// Generate a single completion.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError>;

    /// Cheap reachability probe used by the health endpoint.
    async fn is_available(&self) -> bool;

    /// Get provider information (name, model).
    fn provider_info(&self) -> ProviderInfo;
}

/// Request for a completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Full prompt text.
    pub prompt: String,
    /// Sampling temperature (0.0 = deterministic).
    pub temperature: Option<f32>,
    /// Correlation id for logs.
    pub trace_id: String,
}

impl CompletionRequest {
    /// Creates a new completion request.
    pub fn new(prompt: impl Into<String>, trace_id: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: None,
            trace_id: trace_id.into(),
        }
    }

    /// Sets the temperature.
    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }
}

/// Response from a completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    /// Raw generated text, not yet sanitized.
    pub content: String,
    /// Model that generated the response.
    pub model: String,
}

impl CompletionResponse {
    pub fn new(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            model: model.into(),
        }
    }
}

/// Provider information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "ollama").
    pub name: String,
    /// Model identifier (e.g., "llama2").
    pub model: String,
}

impl ProviderInfo {
    /// Creates new provider info.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// AI provider errors.
#[derive(Debug, thiserror::Error)]
pub enum AIError {
    /// Provider answered with a non-success status.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to decode the provider response envelope.
    #[error("parse error: {0}")]
    Parse(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },
}

impl AIError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_request_builder_works() {
        let request = CompletionRequest::new("Analyze this", "trace-1").with_temperature(0.2);

        assert_eq!(request.prompt, "Analyze this");
        assert_eq!(request.temperature, Some(0.2));
        assert_eq!(request.trace_id, "trace-1");
    }

    #[test]
    fn completion_request_defaults_to_no_temperature() {
        let request = CompletionRequest::new("p", "t");
        assert_eq!(request.temperature, None);
    }

    #[test]
    fn provider_info_new_works() {
        let info = ProviderInfo::new("ollama", "llama2");
        assert_eq!(info.name, "ollama");
        assert_eq!(info.model, "llama2");
    }

    #[test]
    fn ai_error_displays_correctly() {
        assert_eq!(
            AIError::Timeout { timeout_secs: 45 }.to_string(),
            "request timed out after 45s"
        );
        assert_eq!(
            AIError::unavailable("status 503").to_string(),
            "provider unavailable: status 503"
        );
        assert_eq!(AIError::network("refused").to_string(), "network error: refused");
        assert_eq!(AIError::parse("bad body").to_string(), "parse error: bad body");
    }
}
