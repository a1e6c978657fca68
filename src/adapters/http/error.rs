//! HTTP error type shared by all endpoints.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::analysis::AnalysisError;
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::scene::SceneError;

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// API error that implements IntoResponse.
#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: ErrorCode, message: String },
    NotFound { code: ErrorCode, message: String },
    Internal { code: ErrorCode, message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::BadRequest { code, message }
            | ApiError::NotFound { code, message }
            | ApiError::Internal { code, message } => ErrorResponse::new(code, message),
        };
        if status.is_server_error() {
            tracing::error!(code = %body.code, message = %body.message, "Request failed");
        }
        (status, Json(body)).into_response()
    }
}

impl From<AnalysisError> for ApiError {
    fn from(error: AnalysisError) -> Self {
        match error {
            AnalysisError::EmptyInput => ApiError::BadRequest {
                code: ErrorCode::EmptyInput,
                message: error.to_string(),
            },
            // Model failures are resolved by the fallback before reaching here.
            other => ApiError::Internal {
                code: other.code(),
                message: other.to_string(),
            },
        }
    }
}

impl From<SceneError> for ApiError {
    fn from(error: SceneError) -> Self {
        match error {
            SceneError::NotFound(_) => ApiError::NotFound {
                code: ErrorCode::SceneNotFound,
                message: "Scene not found".to_string(),
            },
            SceneError::RenderFailed(message) => ApiError::Internal {
                code: ErrorCode::RenderFailed,
                message,
            },
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::BadRequest {
            code: ErrorCode::ValidationFailed,
            message: error.to_string(),
        }
    }
}
