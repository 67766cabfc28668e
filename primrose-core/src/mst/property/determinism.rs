//! Property 3: Determinism.
//!
//! Re-runs each builder on one shared graph, sequentially and from rayon
//! worker threads, and asserts every run returns exactly the baseline
//! result (edge list, order, and total weight).

use proptest::test_runner::{TestCaseError, TestCaseResult};
use rayon::prelude::*;

use crate::{MstError, PrimStrategy};

use super::types::{MstFixture, RepeatConfig};

/// Runs the determinism property for the given fixture.
///
/// The repetition count is controlled by [`RepeatConfig`].
pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let config = RepeatConfig::load();
    let graph = fixture.graph();

    for strategy in PrimStrategy::ALL {
        let baseline = strategy.run(&graph);

        for run in 1..config.repetitions {
            if strategy.run(&graph) != baseline {
                return Err(diverged(strategy, &format!("run {run}"), fixture));
            }
        }

        let concurrent: Vec<Result<_, MstError>> = (0..config.repetitions)
            .into_par_iter()
            .map(|_| strategy.run(&graph))
            .collect();
        if let Some(worker) = concurrent.iter().position(|result| *result != baseline) {
            return Err(diverged(strategy, &format!("worker {worker}"), fixture));
        }
    }

    Ok(())
}

fn diverged(strategy: PrimStrategy, label: &str, fixture: &MstFixture) -> TestCaseError {
    TestCaseError::fail(format!(
        "{strategy}: {label} differs from the baseline ({})",
        fixture.describe(),
    ))
}
