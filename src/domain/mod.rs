//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, error codes)
//! - `analysis` - Story analysis, sanitizing model output, pricing, fallback
//! - `scene` - Scene layout and placeholder generation results

pub mod analysis;
pub mod foundation;
pub mod scene;
