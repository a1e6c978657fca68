//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `OllamaProvider` - Local Ollama server (`/api/generate`)
//! - `MockAIProvider` - Configurable mock for testing

mod mock_provider;
mod ollama_provider;

pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use ollama_provider::{OllamaConfig, OllamaProvider};
