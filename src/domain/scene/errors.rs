//! Scene error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, SceneId};

/// Errors raised by scene generation and lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("Scene not found: {0}")]
    NotFound(SceneId),

    #[error("Scene generation failed: {0}")]
    RenderFailed(String),
}

impl SceneError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SceneError::NotFound(_) => ErrorCode::SceneNotFound,
            SceneError::RenderFailed(_) => ErrorCode::RenderFailed,
        }
    }
}
