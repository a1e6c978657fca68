//! Metrics Adapters
//!
//! Implementations of the BusinessTracker port.

mod in_memory_business_tracker;

pub use in_memory_business_tracker::InMemoryBusinessTracker;
