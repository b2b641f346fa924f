//! Shared test utilities for `spanning-core`.

use proptest::test_runner::Config as ProptestConfig;
use spanning_test_support::proptest_profile::ProptestProfile;

use crate::{Edge, Graph, GraphInfo};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `SPANNING_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestProfile::from_env(default_cases);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph from `(u, v, w)` triples, deriving the edge count.
pub(crate) fn graph(number_of_vertices: usize, triples: &[(usize, usize, i64)]) -> Graph {
    let edges: Vec<Edge> = triples.iter().copied().map(Edge::from).collect();
    let info = GraphInfo {
        number_of_vertices,
        number_of_edges: edges.len(),
    };
    match Graph::new(info, edges) {
        Ok(graph) => graph,
        Err(err) => panic!("test graph must be valid: {err}"),
    }
}

/// Converts `(u, v, w)` triples into edges.
pub(crate) fn edges(triples: &[(usize, usize, i64)]) -> Vec<Edge> {
    triples.iter().copied().map(Edge::from).collect()
}
