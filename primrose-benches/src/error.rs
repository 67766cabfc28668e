//! Benchmark setup error type.
//!
//! Lets setup code propagate failures with `?` instead of `.expect()`.

use crate::synthetic::SyntheticError;
use primrose_core::{GraphError, MstError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph parameters were rejected.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// The generated edges could not be assembled into a graph.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// A warm-up spanning-tree computation failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
}
