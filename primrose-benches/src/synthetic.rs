//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph is connected: a random spanning backbone links each
//! vertex to an earlier one, and extra random edges are layered on top.

use primrose_core::{Graph, GraphBuilder};

use crate::error::BenchSetupError;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// Extra edges were requested for a graph that cannot hold them.
    #[error("a single-vertex graph cannot carry {extra_edges} extra edges")]
    NoRoomForEdges {
        /// The rejected extra edge count.
        extra_edges: usize,
    },
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices, labelled `0..vertex_count`.
    pub vertex_count: usize,
    /// Random edges added on top of the `vertex_count - 1` backbone edges.
    pub extra_edges: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    /// Total number of edges the generated graph will hold.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.vertex_count
            .saturating_sub(1)
            .saturating_add(self.extra_edges)
    }
}

/// Generates a connected graph with weights drawn uniformly from `[1, 100)`.
///
/// # Errors
///
/// Returns [`SyntheticError`] for a zero vertex count or for extra edges on
/// a single vertex, and a graph error if the graph cannot be assembled.
///
/// # Examples
///
/// ```
/// use primrose_benches::synthetic::{SyntheticGraphConfig, generate_graph};
///
/// let config = SyntheticGraphConfig { vertex_count: 10, extra_edges: 5, seed: 42 };
/// let graph = generate_graph(&config)?;
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edge_count(), 14);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<Graph<usize>, BenchSetupError> {
    let vertex_count = config.vertex_count;
    if vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices.into());
    }
    if vertex_count == 1 && config.extra_edges > 0 {
        return Err(SyntheticError::NoRoomForEdges {
            extra_edges: config.extra_edges,
        }
        .into());
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut builder = GraphBuilder::new().with_vertex(0);
    for vertex in 1..vertex_count {
        let parent = rng.gen_range(0..vertex);
        builder = builder.with_edge(parent, vertex, weight(&mut rng));
    }
    for _ in 0..config.extra_edges {
        let source = rng.gen_range(0..vertex_count);
        let target = distinct_vertex(&mut rng, vertex_count, source);
        builder = builder.with_edge(source, target, weight(&mut rng));
    }
    Ok(builder.build()?)
}

fn weight(rng: &mut SmallRng) -> f64 {
    rng.gen_range(1.0..100.0)
}

/// Draws a vertex other than `exclude`; requires `vertex_count >= 2`.
fn distinct_vertex(rng: &mut SmallRng, vertex_count: usize, exclude: usize) -> usize {
    let drawn = rng.gen_range(0..vertex_count.saturating_sub(1));
    if drawn >= exclude {
        drawn.saturating_add(1)
    } else {
        drawn
    }
}
