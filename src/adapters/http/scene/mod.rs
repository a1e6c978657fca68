//! Scene HTTP adapter module.
//!
//! Generation, composition lookup and the placeholder asset endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::scene_routes;
