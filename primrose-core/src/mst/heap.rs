//! Heap-accelerated Prim with lazy deletion.
//!
//! Crossing edges are pushed into a binary min-heap as they are discovered.
//! Entries are never removed early: when an entry whose far endpoint has
//! already joined the frontier reaches the top of the heap it is simply
//! dropped. This trades up to `O(E)` extra queue entries for not needing a
//! decrease-key operation.

use std::{cmp::Ordering, cmp::Reverse, collections::BinaryHeap};

use tracing::{debug, instrument};

use crate::{
    error::{MstError, Result},
    graph::{Adjacent, Graph, Vertex},
};

use super::{
    MinimumSpanningTree, resolve_start,
    frontier::{Frontier, SelectedEdge, TreeAssembler},
};

/// Computes a minimum spanning tree with a binary heap, starting from the
/// first vertex in insertion order.
///
/// Heap entries are ordered by weight and then by push order, so equal
/// weights pop first-in first-out and repeated runs select identical edges.
/// Under ties the selected edges may differ from [`crate::naive_prim`]; the
/// total weight never does.
///
/// # Errors
/// Returns [`MstError::EmptyGraph`] for a graph without vertices and
/// [`MstError::Disconnected`] when the queue runs dry before every vertex
/// has been reached.
///
/// # Examples
/// ```
/// use primrose_core::{Graph, heap_prim};
///
/// let graph = Graph::from_edges([("a", "b", 1.0), ("b", "c", 2.0), ("a", "c", 5.0)])?;
/// let tree = heap_prim(&graph)?;
/// assert_eq!(tree.total_weight(), 3.0);
/// assert_eq!(tree.edges()[1].target(), &"c");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn heap_prim<V: Vertex>(graph: &Graph<V>) -> Result<MinimumSpanningTree<V>> {
    grow(graph, None)
}

/// Computes a minimum spanning tree with the heap builder, growing the tree
/// from `start`.
///
/// # Errors
/// Returns [`MstError::Graph`] wrapping an unknown-vertex error when `start`
/// is absent, plus every error [`heap_prim`] can return.
pub fn heap_prim_from<V: Vertex>(graph: &Graph<V>, start: &V) -> Result<MinimumSpanningTree<V>> {
    grow(graph, Some(start))
}

/// A crossing edge waiting in the heap.
#[derive(Clone, Copy, Debug)]
struct QueuedEdge {
    weight: f64,
    sequence: u64,
    source: usize,
    target: usize,
}

impl PartialEq for QueuedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedEdge {}

impl Ord for QueuedEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for QueuedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<QueuedEdge> for SelectedEdge {
    fn from(entry: QueuedEdge) -> Self {
        Self {
            source: entry.source,
            target: entry.target,
            weight: entry.weight,
        }
    }
}

/// Min-heap of crossing edges with push and discard counters.
#[derive(Debug, Default)]
struct EdgeQueue {
    heap: BinaryHeap<Reverse<QueuedEdge>>,
    pushed: u64,
    stale: u64,
}

impl EdgeQueue {
    /// Pushes every edge from `source` whose far endpoint is outside the
    /// frontier.
    fn push_crossing(&mut self, source: usize, adjacent: &[Adjacent], frontier: &Frontier) {
        for entry in adjacent {
            if frontier.contains(entry.vertex) {
                continue;
            }
            self.heap.push(Reverse(QueuedEdge {
                weight: entry.weight,
                sequence: self.pushed,
                source,
                target: entry.vertex,
            }));
            self.pushed = self.pushed.saturating_add(1);
        }
    }

    fn pop(&mut self) -> Option<QueuedEdge> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }
}

#[instrument(
    name = "mst.heap_prim",
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
    let mut queue = EdgeQueue::default();
    queue.push_crossing(root, graph.adjacent(root), &frontier);

    while !frontier.is_complete() {
        let Some(entry) = queue.pop() else {
            return Err(MstError::Disconnected {
                reached: frontier.len(),
                vertex_count: graph.vertex_count(),
            });
        };
        if !frontier.insert(entry.target) {
            queue.stale = queue.stale.saturating_add(1);
            continue;
        }
        tree.push(entry.into());
        queue.push_crossing(entry.target, graph.adjacent(entry.target), &frontier);
    }

    let mst = tree.finish(graph);
    debug!(
        edges = mst.len(),
        total_weight = mst.total_weight(),
        pushed = queue.pushed,
        stale = queue.stale,
        pending = queue.heap.len(),
        "heap prim complete"
    );
    Ok(mst)
}
