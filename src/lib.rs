//! LioraWave - Story-to-scene API
//!
//! Turns free-text story descriptions into structured scene analyses using a
//! local language model (with a deterministic fallback), and composes those
//! analyses into mock 3D scenes.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
