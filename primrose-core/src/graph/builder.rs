//! Incremental construction of [`Graph`] values.

use std::{collections::HashMap, sync::Arc};

use crate::error::GraphError;

use super::{Adjacent, Edge, Graph, Vertex};

#[derive(Clone, Debug)]
enum Item<V> {
    Vertex(V),
    Edge(Edge<V>),
}

/// Configures and constructs [`Graph`] instances.
///
/// Vertices and edges are recorded in call order and validated by
/// [`GraphBuilder::build`]. Explicit vertices make it possible to describe
/// graphs with isolated vertices, such as the single-vertex graph.
///
/// # Examples
/// ```
/// use primrose_core::GraphBuilder;
///
/// let graph = GraphBuilder::new()
///     .with_vertex("hub")
///     .with_edge("spoke", "hub", 1.0)
///     .build()?;
/// assert_eq!(graph.vertices(), &["hub", "spoke"]);
/// # Ok::<(), primrose_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GraphBuilder<V> {
    items: Vec<Item<V>>,
}

impl<V> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<V: Vertex> GraphBuilder<V> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `vertex` without connecting it to anything.
    ///
    /// Registering a vertex twice has no further effect.
    #[must_use]
    pub fn with_vertex(mut self, vertex: V) -> Self {
        self.items.push(Item::Vertex(vertex));
        self
    }

    /// Adds an undirected edge between `source` and `target`.
    #[must_use]
    pub fn with_edge(mut self, source: V, target: V, weight: f64) -> Self {
        self.items
            .push(Item::Edge(Edge::new(source, target, weight)));
        self
    }

    /// Adds every `(u, v, weight)` triple in `edges`.
    #[must_use]
    pub fn with_edges<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, f64)>,
    {
        self.items
            .extend(edges.into_iter().map(|edge| Item::Edge(edge.into())));
        self
    }

    /// Validates the recorded items and constructs the [`Graph`].
    ///
    /// # Errors
    /// Returns [`GraphError::NonFiniteWeight`] for the first edge whose
    /// weight is NaN or infinite. The edge index counts edges only.
    pub fn build(self) -> Result<Graph<V>, GraphError> {
        let mut graph = Graph {
            vertices: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edges: Vec::new(),
        };
        let mut edge_index = 0_usize;

        for item in self.items {
            match item {
                Item::Vertex(vertex) => {
                    intern(&mut graph, vertex);
                }
                Item::Edge(edge) => {
                    insert_edge(&mut graph, edge_index, edge)?;
                    edge_index = edge_index.saturating_add(1);
                }
            }
        }

        Ok(graph)
    }
}

fn intern<V: Vertex>(graph: &mut Graph<V>, vertex: V) -> usize {
    if let Some(&index) = graph.index.get(&vertex) {
        return index;
    }
    let index = graph.vertices.len();
    graph.index.insert(vertex.clone(), index);
    graph.vertices.push(vertex);
    graph.adjacency.push(Vec::new());
    index
}

fn insert_edge<V: Vertex>(
    graph: &mut Graph<V>,
    edge_index: usize,
    edge: Edge<V>,
) -> Result<(), GraphError> {
    let Edge {
        source,
        target,
        weight,
    } = edge;

    if !weight.is_finite() {
        return Err(GraphError::NonFiniteWeight {
            index: edge_index,
            left: Arc::from(source.to_string()),
            right: Arc::from(target.to_string()),
            weight,
        });
    }

    let left = intern(graph, source);
    let right = intern(graph, target);
    if left == right {
        return Ok(());
    }

    push_adjacent(graph, left, right, weight);
    push_adjacent(graph, right, left, weight);
    graph.edges.push((left, right, weight));
    Ok(())
}

fn push_adjacent<V>(graph: &mut Graph<V>, from: usize, to: usize, weight: f64) {
    if let Some(list) = graph.adjacency.get_mut(from) {
        list.push(Adjacent { vertex: to, weight });
    }
}
