//! Property 2: Structural invariant verification.
//!
//! For every tree either builder produces, verifies:
//!
//! - **Edge count**: exactly `V - 1` edges.
//! - **Acyclicity**: union-find never joins two vertices already joined.
//! - **Spanning**: every vertex ends in one component.
//! - **Membership**: each tree edge exists in the input with that weight.
//! - **Frontier growth**: each edge's source was reached before its target.

use std::collections::HashSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{MinimumSpanningTree, PrimStrategy};

use super::helpers::{find_root, run_or_fail};
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
///
/// Disconnected fixtures have no tree to inspect and pass trivially; the
/// equivalence property covers their error path.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    if !sequential_kruskal(fixture.vertex_count, &fixture.edges).is_connected() {
        return Ok(());
    }

    let graph = fixture.graph();
    for strategy in PrimStrategy::ALL {
        let tree = run_or_fail(strategy, &graph, fixture)?;
        let context = format!("{strategy}, {}", fixture.describe());
        validate_edge_count(fixture.vertex_count, &tree, &context)?;
        validate_acyclic_and_spanning(fixture.vertex_count, &tree, &context)?;
        validate_membership(fixture, &tree, &context)?;
        validate_frontier_growth(&tree, &context)?;
    }
    Ok(())
}

fn validate_edge_count(
    vertex_count: usize,
    tree: &MinimumSpanningTree<usize>,
    context: &str,
) -> TestCaseResult {
    let expected = vertex_count.saturating_sub(1);
    if tree.len() != expected || tree.vertex_count() != vertex_count {
        return Err(TestCaseError::fail(format!(
            "tree has {} edges over {} vertices, expected {expected} over {vertex_count} ({context})",
            tree.len(),
            tree.vertex_count(),
        )));
    }
    Ok(())
}

fn validate_acyclic_and_spanning(
    vertex_count: usize,
    tree: &MinimumSpanningTree<usize>,
    context: &str,
) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (i, edge) in tree.edges().iter().enumerate() {
        let ra = find_root(&mut parent, *edge.source());
        let rb = find_root(&mut parent, *edge.target());
        if ra == rb {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({}, {}) creates a cycle ({context})",
                edge.source(),
                edge.target(),
            )));
        }
        parent[rb] = ra;
    }

    let roots: HashSet<usize> = (0..vertex_count)
        .map(|node| find_root(&mut parent, node))
        .collect();
    if roots.len() > 1 {
        return Err(TestCaseError::fail(format!(
            "tree leaves {} components ({context})",
            roots.len(),
        )));
    }
    Ok(())
}

/// Each selected edge must be an input edge (in either orientation) with
/// the same weight.
fn validate_membership(
    fixture: &MstFixture,
    tree: &MinimumSpanningTree<usize>,
    context: &str,
) -> TestCaseResult {
    for (i, edge) in tree.edges().iter().enumerate() {
        let (s, t, w) = (*edge.source(), *edge.target(), edge.weight());
        if s == t {
            return Err(TestCaseError::fail(format!(
                "edge {i}: self-loop on {s} ({context})"
            )));
        }
        let present = fixture
            .edges
            .iter()
            .any(|&(a, b, weight)| weight == w && ((a, b) == (s, t) || (a, b) == (t, s)));
        if !present {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({s}, {t}, {w}) is not an input edge ({context})"
            )));
        }
    }
    Ok(())
}

/// Prim grows one tree from the start vertex, so every edge's source must
/// already be reached when the edge is selected.
fn validate_frontier_growth(tree: &MinimumSpanningTree<usize>, context: &str) -> TestCaseResult {
    let mut reached = HashSet::from([0_usize]);
    for (i, edge) in tree.edges().iter().enumerate() {
        if !reached.contains(edge.source()) {
            return Err(TestCaseError::fail(format!(
                "edge {i}: source {} was not yet in the tree ({context})",
                edge.source(),
            )));
        }
        if !reached.insert(*edge.target()) {
            return Err(TestCaseError::fail(format!(
                "edge {i}: target {} was already in the tree ({context})",
                edge.target(),
            )));
        }
    }
    Ok(())
}
