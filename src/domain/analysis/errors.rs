//! Analysis error taxonomy.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Errors raised while analyzing a story.
///
/// Only `EmptyInput` ever reaches a client. The model failure classes are
/// resolved by substituting the fallback analysis and exist so the
/// substitution can be logged with its cause.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("No story text provided")]
    EmptyInput,

    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("model timed out after {timeout_secs}s")]
    ModelTimeout { timeout_secs: u64 },

    #[error("malformed model output: {0}")]
    MalformedModelOutput(String),
}

impl AnalysisError {
    /// Creates a malformed output error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        AnalysisError::MalformedModelOutput(reason.into())
    }

    /// Creates a model unavailable error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        AnalysisError::ModelUnavailable(reason.into())
    }

    /// Returns true when the fallback analysis may stand in for this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AnalysisError::EmptyInput)
    }

    /// Short label used as the `failure_class` log field.
    pub fn failure_class(&self) -> &'static str {
        match self {
            AnalysisError::EmptyInput => "empty_input",
            AnalysisError::ModelUnavailable(_) => "model_unavailable",
            AnalysisError::ModelTimeout { .. } => "model_timeout",
            AnalysisError::MalformedModelOutput(_) => "malformed_model_output",
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::EmptyInput => ErrorCode::EmptyInput,
            AnalysisError::ModelUnavailable(_) => ErrorCode::ModelUnavailable,
            AnalysisError::ModelTimeout { .. } => ErrorCode::ModelTimeout,
            AnalysisError::MalformedModelOutput(_) => ErrorCode::MalformedModelOutput,
        }
    }
}
