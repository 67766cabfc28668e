//! Runtime selection between the two Prim builders.

use std::fmt;

use crate::{
    error::Result,
    graph::{Graph, Vertex},
};

use super::{MinimumSpanningTree, heap_prim, heap_prim_from, naive_prim, naive_prim_from};

/// Selects which Prim builder computes a spanning tree.
///
/// `Heap` is the default: it is asymptotically faster on sparse graphs and
/// returns the same total weight as `Naive`.
///
/// # Examples
/// ```
/// use primrose_core::{Graph, PrimStrategy};
///
/// let graph = Graph::from_edges([(1, 2, 3.0), (2, 3, 7.0)])?;
/// for strategy in PrimStrategy::ALL {
///     assert_eq!(strategy.run(&graph)?.total_weight(), 10.0);
/// }
/// assert_eq!(PrimStrategy::default(), PrimStrategy::Heap);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum PrimStrategy {
    /// Rescan every frontier edge on each iteration.
    Naive,
    /// Pop crossing edges from a binary heap with lazy deletion.
    #[default]
    Heap,
}

impl PrimStrategy {
    /// Every available strategy, in declaration order.
    pub const ALL: [Self; 2] = [Self::Naive, Self::Heap];

    /// Returns the stable lowercase name of the strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Heap => "heap",
        }
    }

    /// Runs the selected builder from the default start vertex.
    ///
    /// # Errors
    /// Propagates the builder's [`crate::MstError`].
    pub fn run<V: Vertex>(self, graph: &Graph<V>) -> Result<MinimumSpanningTree<V>> {
        match self {
            Self::Naive => naive_prim(graph),
            Self::Heap => heap_prim(graph),
        }
    }

    /// Runs the selected builder from `start`.
    ///
    /// # Errors
    /// Propagates the builder's [`crate::MstError`].
    pub fn run_from<V: Vertex>(self, graph: &Graph<V>, start: &V) -> Result<MinimumSpanningTree<V>> {
        match self {
            Self::Naive => naive_prim_from(graph, start),
            Self::Heap => heap_prim_from(graph, start),
        }
    }
}

impl fmt::Display for PrimStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
