//! Sequential Kruskal oracle for MST property verification.
//!
//! A small, independently written Kruskal over the raw fixture edges. It
//! shares no code with the Prim builders, so agreement between the two is
//! meaningful evidence of correctness.

use std::cmp::Ordering;

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct SequentialMstResult {
    /// Total weight of the spanning forest.
    pub total_weight: f64,
    /// Number of edges in the spanning forest.
    pub edge_count: usize,
    /// Number of connected components after construction.
    pub component_count: usize,
}

impl SequentialMstResult {
    /// Returns `true` when the input graph forms a single component.
    pub(super) fn is_connected(&self) -> bool {
        self.component_count == 1
    }
}

/// Computes a minimum spanning forest using sequential Kruskal's algorithm.
///
/// Self-loops and out-of-range endpoints are ignored. Edges are sorted by
/// weight with `total_cmp`; ties keep input order.
pub(super) fn sequential_kruskal(
    vertex_count: usize,
    edges: &[(usize, usize, f64)],
) -> SequentialMstResult {
    let mut sorted: Vec<&(usize, usize, f64)> = edges
        .iter()
        .filter(|(s, t, _)| s != t && *s < vertex_count && *t < vertex_count)
        .collect();
    sorted.sort_by(|a, b| cmp_weight(a.2, b.2));

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    let mut total_weight = 0.0;
    let mut edge_count = 0;

    for &&(source, target, weight) in &sorted {
        let ra = find_root(&mut parent, source);
        let rb = find_root(&mut parent, target);
        if ra != rb {
            parent[rb.max(ra)] = ra.min(rb);
            total_weight += weight;
            edge_count += 1;
            components -= 1;
        }
    }

    SequentialMstResult {
        total_weight,
        edge_count,
        component_count: components,
    }
}

fn cmp_weight(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}
