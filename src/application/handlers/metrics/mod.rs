//! Metrics query handlers.

mod get_business_metrics;

pub use get_business_metrics::GetBusinessMetricsHandler;
