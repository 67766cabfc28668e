//! Benchmark support crate for primrose.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks comparing the naive and heap Prim builders.

pub mod error;
pub mod params;
pub mod synthetic;
