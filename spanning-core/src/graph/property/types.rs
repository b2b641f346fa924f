//! Type definitions for spanning tree property-based tests.

use crate::Edge;

/// Shape of a generated graph.
///
/// Every topology is connected; they differ in how many edges sit outside
/// the minimum spanning tree and how often weights collide.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Topology {
    /// A bare spanning tree, so no second-smallest tree exists.
    Tree,
    /// A spanning tree plus a few extra edges.
    Sparse,
    /// Close to a complete graph.
    Dense,
    /// Weights drawn from a pool of one to three values, stressing ties.
    EqualWeights,
}

/// Fixture for spanning tree property tests.
///
/// Captures the vertex count, generated edges, and the topology used during
/// generation, providing full context for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of vertices, numbered from `1`.
    pub number_of_vertices: usize,
    /// Generated edges in input order.
    pub edges: Vec<Edge>,
    /// Topology used during generation.
    pub topology: Topology,
}
