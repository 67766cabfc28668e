//! Naive Prim: rescan the whole frontier on every iteration.

use tracing::{debug, instrument};

use crate::{
    error::{MstError, Result},
    graph::{Graph, Vertex},
};

use super::{
    MinimumSpanningTree, resolve_start,
    frontier::{Frontier, SelectedEdge, TreeAssembler},
};

/// Computes a minimum spanning tree by scanning every frontier edge on each
/// iteration, starting from the first vertex in insertion order.
///
/// Ties are broken by scan order: frontier vertices are visited in the order
/// they joined the tree, their neighbours in edge insertion order, and the
/// first minimum-weight candidate wins. The result is therefore fully
/// reproducible for a given graph.
///
/// # Errors
/// Returns [`MstError::EmptyGraph`] for a graph without vertices and
/// [`MstError::Disconnected`] when some vertex cannot be reached.
///
/// # Examples
/// ```
/// use primrose_core::{Graph, naive_prim};
///
/// let graph = Graph::from_edges([(1, 2, 3.0), (2, 3, 7.0), (1, 3, 9.0)])?;
/// let tree = naive_prim(&graph)?;
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.total_weight(), 10.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn naive_prim<V: Vertex>(graph: &Graph<V>) -> Result<MinimumSpanningTree<V>> {
    grow(graph, None)
}

/// Computes a minimum spanning tree with the naive scan, growing the tree
/// from `start`.
///
/// # Errors
/// Returns [`MstError::Graph`] wrapping an unknown-vertex error when `start`
/// is absent, plus every error [`naive_prim`] can return.
pub fn naive_prim_from<V: Vertex>(graph: &Graph<V>, start: &V) -> Result<MinimumSpanningTree<V>> {
    grow(graph, Some(start))
}

#[instrument(
    name = "mst.naive_prim",
    err,
    skip_all,
    fields(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        explicit_start = start.is_some(),
    ),
)]
fn grow<V: Vertex>(graph: &Graph<V>, start: Option<&V>) -> Result<MinimumSpanningTree<V>> {
    let root = resolve_start(graph, start)?;
    let mut frontier = Frontier::new(graph.vertex_count(), root);
    let mut tree = TreeAssembler::for_vertices(graph.vertex_count());

    while !frontier.is_complete() {
        let edge = lightest_crossing_edge(graph, &frontier).ok_or(MstError::Disconnected {
            reached: frontier.len(),
            vertex_count: graph.vertex_count(),
        })?;
        frontier.insert(edge.target);
        tree.push(edge);
    }

    let mst = tree.finish(graph);
    debug!(
        edges = mst.len(),
        total_weight = mst.total_weight(),
        "naive prim complete"
    );
    Ok(mst)
}

/// Returns the lightest edge leaving the frontier, or `None` when no edge
/// crosses the cut.
fn lightest_crossing_edge<V>(graph: &Graph<V>, frontier: &Frontier) -> Option<SelectedEdge> {
    let mut best: Option<SelectedEdge> = None;
    for &source in frontier.members() {
        for adjacent in graph.adjacent(source) {
            if frontier.contains(adjacent.vertex) {
                continue;
            }
            let lighter =
                best.is_none_or(|current| adjacent.weight.total_cmp(&current.weight).is_lt());
            if lighter {
                best = Some(SelectedEdge {
                    source,
                    target: adjacent.vertex,
                    weight: adjacent.weight,
                });
            }
        }
    }
    best
}
