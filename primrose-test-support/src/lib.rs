//! Shared test utilities used across primrose crates.

pub mod ci;
pub mod tracing;
