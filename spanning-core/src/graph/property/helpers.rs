//! Shared helper functions for spanning tree property-based tests.

use proptest::test_runner::TestCaseError;

use crate::{Edge, Graph, GraphInfo};

use super::types::GraphFixture;

/// Builds a [`Graph`] from a fixture, failing the case on invalid input.
pub(super) fn build_graph(fixture: &GraphFixture) -> Result<Graph, TestCaseError> {
    let info = GraphInfo {
        number_of_vertices: fixture.number_of_vertices,
        number_of_edges: fixture.edges.len(),
    };
    Graph::new(info, fixture.edges.clone()).map_err(|e| {
        TestCaseError::fail(format!(
            "generated graph rejected: {e} (topology={:?}, vertices={}, edges={})",
            fixture.topology,
            fixture.number_of_vertices,
            fixture.edges.len(),
        ))
    })
}

/// Sums edge weights.
pub(super) fn total_weight(edges: &[Edge]) -> i64 {
    edges.iter().map(Edge::weight).sum()
}
