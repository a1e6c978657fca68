//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers and error vocabulary shared by the analysis and
//! scene modules.

mod errors;
mod ids;

pub use errors::{ErrorCode, ValidationError};
pub use ids::SceneId;
