//! Property 2: Structural invariant verification.
//!
//! For the minimum and second-smallest trees returned by the engine:
//!
//! - **Edge count**: exactly `n - 1` edges.
//! - **Spanning**: the edges connect every vertex without a cycle.
//! - **Provenance**: every edge comes from the input edge list.
//! - **Ordering**: edges are sorted by first vertex, then second vertex.
//! - **Weight**: the reported weight is the sum of the edge weights.
//! - **One swap**: the second tree differs from the MST by one edge and is
//!   no lighter than it.
//! - **Idempotence**: recomputing returns identical trees.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::Edge;

use super::helpers::{build_graph, total_weight};
use super::oracle::spans_all_vertices;
use super::types::GraphFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    let mut graph = build_graph(fixture)?;

    let (mst_edges, mst_weight) = graph
        .compute_smallest_spanning_tree()
        .map_err(|e| TestCaseError::fail(format!("MST failed: {e} ({fixture:?})")))?;
    validate_tree("MST", fixture, &mst_edges, mst_weight)?;

    let second = graph
        .second_smallest_mst()
        .map_err(|e| TestCaseError::fail(format!("second tree failed: {e} ({fixture:?})")))?;
    let Some(second) = second else {
        return if fixture.edges.len() == fixture.number_of_vertices.saturating_sub(1) {
            Ok(())
        } else {
            Err(TestCaseError::fail(format!(
                "no second tree although {} edges exceed a tree ({fixture:?})",
                fixture.edges.len()
            )))
        };
    };

    validate_tree("second tree", fixture, second.edges(), second.weight())?;
    validate_single_swap(&mst_edges, second.edges())?;
    if second.weight() < mst_weight {
        return Err(TestCaseError::fail(format!(
            "second tree weight {} is below MST weight {mst_weight}",
            second.weight()
        )));
    }

    let repeated = graph
        .compute_smallest_spanning_tree()
        .map_err(|e| TestCaseError::fail(format!("repeated MST failed: {e}")))?;
    if repeated != (mst_edges, mst_weight) {
        return Err(TestCaseError::fail("MST changed between calls"));
    }
    Ok(())
}

fn validate_tree(label: &str, fixture: &GraphFixture, edges: &[Edge], weight: i64) -> TestCaseResult {
    let required = fixture.number_of_vertices.saturating_sub(1);
    if edges.len() != required {
        return Err(TestCaseError::fail(format!(
            "{label}: {} edges, expected {required}",
            edges.len()
        )));
    }

    let references: Vec<&Edge> = edges.iter().collect();
    if !spans_all_vertices(fixture.number_of_vertices, &references) {
        return Err(TestCaseError::fail(format!(
            "{label}: edges do not span the graph: {edges:?}"
        )));
    }

    if let Some(stranger) = edges.iter().find(|edge| !fixture.edges.contains(edge)) {
        return Err(TestCaseError::fail(format!(
            "{label}: edge {stranger} is not in the input"
        )));
    }

    let ordered = edges
        .windows(2)
        .all(|pair| pair[0].endpoints() <= pair[1].endpoints());
    if !ordered {
        return Err(TestCaseError::fail(format!(
            "{label}: edges are not sorted by vertex: {edges:?}"
        )));
    }

    if total_weight(edges) != weight {
        return Err(TestCaseError::fail(format!(
            "{label}: reported weight {weight} differs from edge sum {}",
            total_weight(edges)
        )));
    }
    Ok(())
}

fn validate_single_swap(mst: &[Edge], second: &[Edge]) -> TestCaseResult {
    let mut remaining: Vec<Edge> = mst.to_vec();
    let mut added = 0usize;
    for edge in second {
        match remaining.iter().position(|candidate| candidate == edge) {
            Some(position) => {
                remaining.swap_remove(position);
            }
            None => added += 1,
        }
    }
    if added != 1 || remaining.len() != 1 {
        return Err(TestCaseError::fail(format!(
            "second tree must differ from the MST by one edge: added {added}, removed {}",
            remaining.len()
        )));
    }
    Ok(())
}
