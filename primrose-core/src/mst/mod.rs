//! Minimum spanning tree (MST) construction with Prim's algorithm.
//!
//! Two builders share the same contract:
//!
//! - [`naive_prim`] rescans every edge leaving the frontier on each
//!   iteration and picks the lightest one. `O(V·E)`.
//! - [`heap_prim`] keeps the crossing edges in a binary min-heap and discards
//!   stale entries when they are popped (lazy deletion). `O(E log E)`.
//!
//! Both grow the tree from the first vertex in insertion order unless the
//! `*_from` variant names another start vertex. Both fail with
//! [`MstError::Disconnected`] instead of looping when the frontier stops
//! growing, and both return trees of identical total weight. When several
//! edges tie for the minimum the selected edges may differ between the two
//! builders; the total weight never does.

mod frontier;
mod heap;
mod naive;
mod strategy;

use crate::{
    error::{MstError, Result},
    graph::{Graph, Vertex},
};

pub use self::{
    heap::{heap_prim, heap_prim_from},
    naive::{naive_prim, naive_prim_from},
    strategy::PrimStrategy,
};

/// A single edge selected for the spanning tree.
///
/// `source` is the endpoint that was already in the tree when the edge was
/// selected and `target` is the vertex the edge brought in.
#[derive(Clone, Debug, PartialEq)]
pub struct MstEdge<V> {
    source: V,
    target: V,
    weight: f64,
}

impl<V> MstEdge<V> {
    /// Returns the endpoint that was already part of the tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> &V { &self.source }

    /// Returns the endpoint this edge added to the tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> &V { &self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }
}

/// The output of a spanning-tree computation.
///
/// Edges are stored in selection order. For a graph with `V` vertices the
/// tree holds exactly `V - 1` edges.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningTree<V> {
    edges: Vec<MstEdge<V>>,
    total_weight: f64,
    vertex_count: usize,
}

impl<V> MinimumSpanningTree<V> {
    /// Returns the tree edges in selection order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[MstEdge<V>] { &self.edges }

    /// Returns the sum of the edge weights, accumulated in selection order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of vertices spanned by the tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of tree edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the tree has no edges (single-vertex graph).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Consumes the tree and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<MstEdge<V>> {
        self.edges
    }
}

/// Picks the vertex index the frontier starts from.
fn resolve_start<V: Vertex>(graph: &Graph<V>, start: Option<&V>) -> Result<usize> {
    if graph.is_empty() {
        return Err(MstError::EmptyGraph);
    }
    match start {
        Some(vertex) => Ok(graph.require_index(vertex)?),
        None => Ok(0),
    }
}


#[cfg(test)]
mod property;
