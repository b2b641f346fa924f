//! Spanning core library.
//!
//! Computes the minimum spanning tree of a simple, connected, weighted,
//! undirected graph with Kruskal's algorithm, and the second-smallest
//! spanning tree by exchanging one tree edge for the cheapest rejected edge.
//!
//! Vertices are numbered from `1`. The second-smallest tree is rooted at
//! vertex [`ROOT_VERTEX`]; when every edge already belongs to the minimum
//! spanning tree there is no second tree, reported as `None` or, through the
//! tuple interface, as an empty edge list with [`NO_SECOND_TREE_WEIGHT`].

mod edge;
mod error;
mod graph;
mod membership;
mod union_find;

#[cfg(test)]
mod test_utils;

pub use crate::{
    edge::{Edge, Orientation, OrientedEdge},
    error::{GraphError, GraphErrorCode, Result},
    graph::{
        Graph, GraphInfo, NO_SECOND_TREE_WEIGHT, ROOT_VERTEX, RootedTree, SpanningTree, VertexInfo,
    },
    membership::MembershipSet,
    union_find::DisjointSet,
};
