//! Benchmark parameter types.

use std::fmt;

/// Size of the graph used in one benchmark case.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edges, including the spanning backbone.
    pub edge_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V={},E={}", self.vertex_count, self.edge_count)
    }
}
