//! Property 1: Equivalence with the brute-force oracle.
//!
//! For any generated connected graph, the MST weight must match the lightest
//! spanning tree and the second-smallest weight must match the next lightest
//! one, with `None` exactly when the graph is itself a tree.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::helpers::build_graph;
use super::oracle::brute_force_spanning_trees;
use super::types::GraphFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let mut graph = build_graph(fixture)?;
    let oracle = brute_force_spanning_trees(fixture.number_of_vertices, &fixture.edges);

    let mst = graph
        .smallest_mst()
        .map_err(|e| TestCaseError::fail(format!("smallest_mst failed: {e} ({fixture:?})")))?;
    if mst.weight() != oracle.mst_weight {
        return Err(TestCaseError::fail(format!(
            "MST weight mismatch: engine={}, oracle={} (topology={:?}, vertices={}, edges={})",
            mst.weight(),
            oracle.mst_weight,
            fixture.topology,
            fixture.number_of_vertices,
            fixture.edges.len(),
        )));
    }

    let second = graph.second_smallest_mst().map_err(|e| {
        TestCaseError::fail(format!("second_smallest_mst failed: {e} ({fixture:?})"))
    })?;
    let second_weight = second.as_ref().map(|tree| tree.weight());
    if second_weight != oracle.second_weight {
        return Err(TestCaseError::fail(format!(
            "second-smallest weight mismatch: engine={second_weight:?}, oracle={:?} \
             (topology={:?}, vertices={}, edges={}, spanning trees={})",
            oracle.second_weight,
            fixture.topology,
            fixture.number_of_vertices,
            fixture.edges.len(),
            oracle.tree_count,
        )));
    }

    Ok(())
}
