//! Strategy builders for spanning tree property-based tests.
//!
//! Each generator starts from a random spanning tree over `1..=n`, so every
//! fixture is connected, then adds extra edges between unused vertex pairs.
//! Edge order and endpoint order are shuffled so Kruskal's tie-breaking and
//! the orientation bookkeeping both get exercised.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{GraphFixture, Topology};

/// Minimum vertex count for generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count. A complete graph on six vertices has fifteen edges,
/// which keeps brute-force spanning tree enumeration cheap.
const MAX_VERTICES: usize = 6;
/// Upper bound for weights when collisions are not the point of the test.
const MAX_WEIGHT: i64 = 100;

/// Generates fixtures covering every topology.
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<Topology>(), any::<u64>()).prop_map(|(topology, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(topology, &mut rng)
    })
}

/// Generates a fixture for a specific topology.
pub(super) fn generate_fixture(topology: Topology, rng: &mut SmallRng) -> GraphFixture {
    match topology {
        Topology::Tree => generate_graph(rng, topology, (0.0, 0.0), |r| {
            r.gen_range(1..=MAX_WEIGHT)
        }),
        Topology::Sparse => generate_graph(rng, topology, (0.1, 0.4), |r| {
            r.gen_range(1..=MAX_WEIGHT)
        }),
        Topology::Dense => generate_graph(rng, topology, (0.7, 0.95), |r| {
            r.gen_range(1..=MAX_WEIGHT)
        }),
        Topology::EqualWeights => generate_equal_weights(rng),
    }
}

fn generate_equal_weights(rng: &mut SmallRng) -> GraphFixture {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<i64> = (0..pool_size).map(|_| rng.gen_range(1..=5)).collect();
    generate_graph(rng, Topology::EqualWeights, (0.3, 0.8), move |r| {
        pool[r.gen_range(0..pool.len())]
    })
}

/// Builds a random spanning tree and then adds every remaining vertex pair
/// with a probability drawn from `extra_edge_range`.
fn generate_graph(
    rng: &mut SmallRng,
    topology: Topology,
    extra_edge_range: (f64, f64),
    mut weight_generator: impl FnMut(&mut SmallRng) -> i64,
) -> GraphFixture {
    let number_of_vertices = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut present = vec![vec![false; number_of_vertices + 1]; number_of_vertices + 1];
    let mut edges = Vec::new();

    for vertex in 2..=number_of_vertices {
        let parent = rng.gen_range(1..vertex);
        present[parent][vertex] = true;
        present[vertex][parent] = true;
        let weight = weight_generator(rng);
        edges.push(oriented_randomly(parent, vertex, weight, rng));
    }

    let probability: f64 = if extra_edge_range.1 > 0.0 {
        rng.gen_range(extra_edge_range.0..=extra_edge_range.1)
    } else {
        0.0
    };
    for first in 1..=number_of_vertices {
        for second in (first + 1)..=number_of_vertices {
            if present[first][second] || !rng.gen_bool(probability) {
                continue;
            }
            present[first][second] = true;
            present[second][first] = true;
            let weight = weight_generator(rng);
            edges.push(oriented_randomly(first, second, weight, rng));
        }
    }

    shuffle(&mut edges, rng);
    GraphFixture {
        number_of_vertices,
        edges,
        topology,
    }
}

fn oriented_randomly(first: usize, second: usize, weight: i64, rng: &mut SmallRng) -> Edge {
    if rng.gen_bool(0.5) {
        Edge::new(first, second, weight)
    } else {
        Edge::new(second, first, weight)
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [Edge], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

// Biased towards tie-heavy graphs, where the replacement tie-break matters.
impl proptest::arbitrary::Arbitrary for Topology {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            1 => Just(Self::Tree),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            3 => Just(Self::EqualWeights),
        ]
    }
}
