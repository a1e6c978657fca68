//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
///
/// Rendered into the `code` field of HTTP error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyInput,

    // Not found errors
    SceneNotFound,

    // Model errors (resolved by fallback, never surfaced)
    ModelUnavailable,
    ModelTimeout,
    MalformedModelOutput,

    // Generation errors
    RenderFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyInput => "EMPTY_INPUT",
            ErrorCode::SceneNotFound => "SCENE_NOT_FOUND",
            ErrorCode::ModelUnavailable => "MODEL_UNAVAILABLE",
            ErrorCode::ModelTimeout => "MODEL_TIMEOUT",
            ErrorCode::MalformedModelOutput => "MALFORMED_MODEL_OUTPUT",
            ErrorCode::RenderFailed => "RENDER_FAILED",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("text");
        assert_eq!(format!("{}", err), "Field 'text' cannot be empty");
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("scene_id", "contains whitespace");
        assert_eq!(
            format!("{}", err),
            "Field 'scene_id' has invalid format: contains whitespace"
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::SceneNotFound), "SCENE_NOT_FOUND");
        assert_eq!(format!("{}", ErrorCode::EmptyInput), "EMPTY_INPUT");
    }
}
