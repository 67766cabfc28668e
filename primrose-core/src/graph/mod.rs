//! Undirected weighted graph storage.
//!
//! Vertices are kept in first-seen insertion order and mapped to dense
//! indices. Each vertex owns an adjacency list of `(neighbour, weight)`
//! entries, so neighbour queries run in time proportional to the degree.
//! Adjacency is symmetric: an edge `(u, v, w)` is recorded in both lists.

mod builder;

use std::{collections::HashMap, fmt, hash::Hash, sync::Arc};

use crate::error::GraphError;

pub use self::builder::GraphBuilder;

/// Identifier usable as a graph vertex.
///
/// Implemented for every type that can be cloned, hashed, compared and
/// rendered; integers and strings both qualify.
pub trait Vertex: Clone + Eq + Hash + fmt::Display {}

impl<T> Vertex for T where T: Clone + Eq + Hash + fmt::Display {}

/// A single undirected weighted edge.
///
/// # Examples
/// ```
/// use primrose_core::Edge;
///
/// let edge = Edge::new("a", "b", 2.5);
/// assert_eq!(edge.weight(), 2.5);
/// let same: Edge<&str> = ("a", "b", 2.5).into();
/// assert_eq!(edge, same);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<V> {
    source: V,
    target: V,
    weight: f64,
}

impl<V> Edge<V> {
    /// Creates an edge between `source` and `target`.
    #[must_use]
    pub const fn new(source: V, target: V, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint as supplied by the caller.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> &V { &self.source }

    /// Returns the second endpoint as supplied by the caller.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> &V { &self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }
}

impl<V> From<(V, V, f64)> for Edge<V> {
    fn from((source, target, weight): (V, V, f64)) -> Self {
        Self::new(source, target, weight)
    }
}

/// Entry in a vertex's adjacency list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Adjacent {
    pub(crate) vertex: usize,
    pub(crate) weight: f64,
}

/// Immutable undirected weighted graph.
///
/// Build one with [`Graph::from_edges`] or [`GraphBuilder`]. The graph is
/// read-only afterwards, so it can be shared between threads and handed to
/// several spanning-tree computations at once.
///
/// # Examples
/// ```
/// use primrose_core::Graph;
///
/// let graph = Graph::from_edges([(1, 2, 3.0), (2, 3, 7.0)])?;
/// assert_eq!(graph.vertices(), &[1, 2, 3]);
/// assert_eq!(graph.edge_count(), 2);
/// let neighbours: Vec<_> = graph.neighbors(&2)?.collect();
/// assert_eq!(neighbours, vec![(&1, 3.0), (&3, 7.0)]);
/// # Ok::<(), primrose_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    adjacency: Vec<Vec<Adjacent>>,
    edges: Vec<(usize, usize, f64)>,
}

impl<V: Vertex> PartialEq for Graph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
            && self.index == other.index
            && self.adjacency == other.adjacency
            && self.edges == other.edges
    }
}

impl<V: Vertex> Graph<V> {
    /// Builds a graph from a sequence of `(u, v, weight)` edges.
    ///
    /// Vertices are registered in the order they are first seen. Self-loops
    /// register their endpoint but are otherwise discarded because they can
    /// never join a new vertex to a spanning tree. Parallel edges are kept.
    ///
    /// # Errors
    /// Returns [`GraphError::NonFiniteWeight`] when an edge weight is NaN or
    /// infinite.
    pub fn from_edges<I>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (V, V, f64)>,
    {
        GraphBuilder::new().with_edges(edges).build()
    }

    /// Starts an incremental [`GraphBuilder`].
    #[must_use]
    pub fn builder() -> GraphBuilder<V> {
        GraphBuilder::new()
    }

    /// Returns `true` when `vertex` belongs to the graph.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Returns the dense index assigned to `vertex`, if present.
    #[must_use]
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    /// Returns the neighbours of `vertex` with the connecting edge weights,
    /// in edge insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `vertex` is absent.
    pub fn neighbors(&self, vertex: &V) -> Result<Neighbors<'_, V>, GraphError> {
        let index = self.require_index(vertex)?;
        Ok(Neighbors {
            graph: self,
            entries: self.adjacent(index).iter(),
        })
    }

    /// Iterates over every stored undirected edge once, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<&V>> + '_ {
        self.edges.iter().filter_map(|&(source, target, weight)| {
            Some(Edge::new(
                self.vertex(source)?,
                self.vertex(target)?,
                weight,
            ))
        })
    }

    pub(crate) fn require_index(&self, vertex: &V) -> Result<usize, GraphError> {
        self.index_of(vertex)
            .ok_or_else(|| GraphError::UnknownVertex {
                vertex: Arc::from(vertex.to_string()),
            })
    }
}

impl<V> Graph<V> {
    /// Returns the vertices in first-seen insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[V] { &self.vertices }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertices.len() }

    /// Returns the number of stored undirected edges, excluding self-loops.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub(crate) fn vertex(&self, index: usize) -> Option<&V> {
        self.vertices.get(index)
    }

    pub(crate) fn adjacent(&self, index: usize) -> &[Adjacent] {
        self.adjacency.get(index).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Iterator over a vertex's neighbours, yielded by [`Graph::neighbors`].
#[derive(Clone, Debug)]
pub struct Neighbors<'a, V> {
    graph: &'a Graph<V>,
    entries: std::slice::Iter<'a, Adjacent>,
}

impl<'a, V> Iterator for Neighbors<'a, V> {
    type Item = (&'a V, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.entries
            .by_ref()
            .find_map(|entry| Some((graph.vertex(entry.vertex)?, entry.weight)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.entries.len()))
    }
}
