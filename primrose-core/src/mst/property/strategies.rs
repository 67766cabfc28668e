//! Strategy builders for MST property-based tests.
//!
//! Provides graph generation strategies that produce varied weight
//! distributions and topologies. Weights are integral `f64` values so total
//! weights compare exactly.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 48;
/// Maximum vertex count for dense graphs (the naive builder is `O(V·E)`).
const DENSE_MAX_VERTICES: usize = 24;
/// Upper bound (exclusive) for continuous integral weights.
const MAX_WEIGHT: u32 = 1_000;

/// Generates MST fixtures covering all five weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
///
/// Useful for targeted rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

// ── Connected backbone helper ───────────────────────────────────────────

/// Adds a random spanning path over `0..vertex_count` so the generated graph
/// is connected, drawing each weight from `weight_generator`.
fn spanning_backbone(
    vertex_count: usize,
    rng: &mut SmallRng,
    weight_generator: &mut impl FnMut(&mut SmallRng) -> f64,
) -> Vec<(usize, usize, f64)> {
    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(rng);
    order
        .windows(2)
        .map(|pair| (pair[0], pair[1], weight_generator(rng)))
        .collect()
}

/// Builds a connected graph from a spanning backbone plus every other pair
/// with probability drawn from `edge_prob_range`.
fn generate_connected_graph(
    rng: &mut SmallRng,
    max_vertices: usize,
    edge_prob_range: (f64, f64),
    distribution: WeightDistribution,
    mut weight_generator: impl FnMut(&mut SmallRng) -> f64,
) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let edge_probability: f64 = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut edges = spanning_backbone(vertex_count, rng, &mut weight_generator);

    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                edges.push((i, j, weight_generator(rng)));
            }
        }
    }

    MstFixture {
        vertex_count,
        edges,
        distribution,
    }
}

fn integral_weight(rng: &mut SmallRng) -> f64 {
    f64::from(rng.gen_range(1..MAX_WEIGHT))
}

// ── Unique weights ──────────────────────────────────────────────────────

/// Generates a graph in which every edge has a distinct weight, so the MST
/// is unique and both builders must select the same edge set.
fn generate_unique_weights(rng: &mut SmallRng) -> MstFixture {
    let mut fixture = generate_connected_graph(
        rng,
        MAX_VERTICES,
        (0.1, 0.5),
        WeightDistribution::Unique,
        |_| 0.0,
    );
    let mut weights: Vec<u32> = (1..).take(fixture.edges.len()).collect();
    weights.shuffle(rng);
    for (edge, weight) in fixture.edges.iter_mut().zip(weights) {
        edge.2 = f64::from(weight);
    }
    fixture
}

// ── Many identical weights ──────────────────────────────────────────────

/// Generates a graph where large groups of edges share the same weight.
///
/// This is the main stress case for tie-breaking: the two builders are free
/// to pick different edges but must agree on the total.
fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let weight_pool_size = rng.gen_range(1..=3);
    let weight_pool: Vec<f64> = (0..weight_pool_size)
        .map(|_| f64::from(rng.gen_range(1_u8..=10)))
        .collect();

    generate_connected_graph(
        rng,
        MAX_VERTICES,
        (0.3, 0.7),
        WeightDistribution::ManyIdentical,
        move |r| weight_pool[r.gen_range(0..weight_pool.len())],
    )
}

// ── Sparse ──────────────────────────────────────────────────────────────

/// Generates a sparse graph: a random spanning backbone plus roughly `0.5n`
/// to `n` extra edges. Extra edges may repeat a pair, producing parallel
/// edges with different weights.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = spanning_backbone(vertex_count, rng, &mut integral_weight);

    let extra_count = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra_count {
        let i = rng.gen_range(0..vertex_count);
        let j = rng.gen_range(0..vertex_count);
        if i != j {
            edges.push((i, j, integral_weight(rng)));
        }
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

// ── Dense ───────────────────────────────────────────────────────────────

/// Generates a dense graph approaching a complete graph, with vertex count
/// capped at [`DENSE_MAX_VERTICES`].
fn generate_dense(rng: &mut SmallRng) -> MstFixture {
    generate_connected_graph(
        rng,
        DENSE_MAX_VERTICES,
        (0.7, 0.95),
        WeightDistribution::Dense,
        integral_weight,
    )
}

// ── Disconnected ────────────────────────────────────────────────────────

/// Generates a graph with 2-5 components, each connected internally, and no
/// cross-component edges. Single-vertex components are isolated vertices.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=5);
    let component_sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let vertex_count: usize = component_sizes.iter().sum();
    let mut edges = Vec::new();
    let mut offset = 0;

    for &size in &component_sizes {
        let component = spanning_backbone(size, rng, &mut integral_weight);
        edges.extend(
            component
                .into_iter()
                .map(|(s, t, w)| (s + offset, t + offset, w)),
        );
        for i in 0..size {
            for j in (i + 1)..size {
                if rng.gen_bool(0.3) {
                    edges.push((offset + i, offset + j, integral_weight(rng)));
                }
            }
        }
        offset += size;
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

// Proptest `Arbitrary` implementation for `WeightDistribution` is provided
// manually because we want biased weighting (ManyIdentical is the most
// important stress case).
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
