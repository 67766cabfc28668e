//! Property 1: Equivalence with the sequential oracle.
//!
//! For connected inputs both Prim builders must report the oracle's total
//! weight and edge count. For disconnected inputs both must fail with
//! [`MstError::Disconnected`].

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{MstError, PrimStrategy};

use super::helpers::run_or_fail;
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
///
/// Weights are integral, so totals are compared exactly.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);

    for strategy in PrimStrategy::ALL {
        if !oracle.is_connected() {
            match strategy.run(&graph) {
                Err(MstError::Disconnected { vertex_count, .. })
                    if vertex_count == fixture.vertex_count => {}
                other => {
                    return Err(TestCaseError::fail(format!(
                        "{strategy}: expected a disconnected-graph error, got {other:?} ({})",
                        fixture.describe(),
                    )));
                }
            }
            continue;
        }

        let tree = run_or_fail(strategy, &graph, fixture)?;

        if tree.total_weight() != oracle.total_weight {
            return Err(TestCaseError::fail(format!(
                "{strategy}: total weight {} but oracle found {} ({})",
                tree.total_weight(),
                oracle.total_weight,
                fixture.describe(),
            )));
        }

        if tree.len() != oracle.edge_count {
            return Err(TestCaseError::fail(format!(
                "{strategy}: {} edges but oracle found {} ({})",
                tree.len(),
                oracle.edge_count,
                fixture.describe(),
            )));
        }
    }

    Ok(())
}
