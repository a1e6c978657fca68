//! HTTP adapters - REST API implementations.
//!
//! Each endpoint group has its own module with `dto`, `handlers` and
//! `routes`; `router` merges them and applies the middleware stack.

pub mod analysis;
pub mod catalog;
pub mod error;
pub mod router;
pub mod scene;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use router::{app_router, cors_layer};
pub use state::AppState;
