//! Frontier and tree bookkeeping shared by both Prim builders.

use crate::graph::Graph;

use super::{MinimumSpanningTree, MstEdge};

/// Vertices already joined to the tree, tracked both as a membership bitmap
/// and in join order.
#[derive(Debug)]
pub(super) struct Frontier {
    member: Vec<bool>,
    order: Vec<usize>,
}

impl Frontier {
    pub(super) fn new(vertex_count: usize, start: usize) -> Self {
        let mut frontier = Self {
            member: vec![false; vertex_count],
            order: Vec::with_capacity(vertex_count),
        };
        frontier.insert(start);
        frontier
    }

    pub(super) fn contains(&self, vertex: usize) -> bool {
        self.member.get(vertex).copied().unwrap_or(false)
    }

    /// Adds `vertex`, returning `false` when it was already a member.
    pub(super) fn insert(&mut self, vertex: usize) -> bool {
        match self.member.get_mut(vertex) {
            Some(slot) if !*slot => {
                *slot = true;
                self.order.push(vertex);
                true
            }
            _ => false,
        }
    }

    /// Members in the order they joined.
    pub(super) fn members(&self) -> &[usize] {
        &self.order
    }

    pub(super) fn len(&self) -> usize {
        self.order.len()
    }

    pub(super) fn is_complete(&self) -> bool {
        self.order.len() == self.member.len()
    }
}

/// An accepted edge expressed in dense vertex indices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct SelectedEdge {
    pub(super) source: usize,
    pub(super) target: usize,
    pub(super) weight: f64,
}

/// Collects accepted edges and resolves them to caller-facing vertices.
#[derive(Debug)]
pub(super) struct TreeAssembler {
    edges: Vec<SelectedEdge>,
}

impl TreeAssembler {
    pub(super) fn for_vertices(vertex_count: usize) -> Self {
        Self {
            edges: Vec::with_capacity(vertex_count.saturating_sub(1)),
        }
    }

    pub(super) fn push(&mut self, edge: SelectedEdge) {
        self.edges.push(edge);
    }

    pub(super) fn finish<V: Clone>(self, graph: &Graph<V>) -> MinimumSpanningTree<V> {
        let edges: Vec<MstEdge<V>> = self
            .edges
            .iter()
            .filter_map(|edge| {
                Some(MstEdge {
                    source: graph.vertex(edge.source)?.clone(),
                    target: graph.vertex(edge.target)?.clone(),
                    weight: edge.weight,
                })
            })
            .collect();
        let total_weight = edges.iter().map(MstEdge::weight).sum();
        MinimumSpanningTree {
            edges,
            total_weight,
            vertex_count: graph.vertex_count(),
        }
    }
}
