//! Informational HTTP endpoints: banner, health, metrics and static catalogs.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::catalog_routes;
