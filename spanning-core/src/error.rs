//! Error types for the spanning core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors returned while building a [`crate::Graph`] or computing its
/// spanning trees.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The graph declared zero vertices.
    #[error("graph must contain at least one vertex")]
    EmptyGraph,
    /// The declared edge count disagrees with the supplied edge list.
    #[error("graph declares {declared} edges but {actual} were supplied")]
    EdgeCountMismatch {
        /// Edge count announced by the graph header.
        declared: usize,
        /// Number of edges actually supplied.
        actual: usize,
    },
    /// An edge or query named a vertex outside `[1, number_of_vertices]`.
    #[error("vertex {vertex} is outside 1..={vertex_count}")]
    InvalidVertexId {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge joined a vertex to itself.
    #[error("edge ({vertex}, {vertex}) is a self-loop")]
    SelfLoop {
        /// The vertex on both ends of the edge.
        vertex: usize,
    },
    /// An edge carried a negative weight.
    #[error("edge ({first}, {second}) has negative weight {weight}")]
    NegativeWeight {
        /// First endpoint as supplied.
        first: usize,
        /// Second endpoint as supplied.
        second: usize,
        /// The rejected weight.
        weight: i64,
    },
    /// Kruskal could not connect every vertex.
    #[error("graph is disconnected: spanning forest has {tree_edges} edges, a tree needs {required}")]
    Disconnected {
        /// Edges accepted by Kruskal's algorithm.
        tree_edges: usize,
        /// Edges required for a spanning tree (`number_of_vertices - 1`).
        required: usize,
    },
    /// The rooted tree did not match the MST it was built from.
    #[error("spanning tree invariant violated: {invariant} (vertex {vertex})")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// Vertex at which the violation was detected.
        vertex: usize,
    },
}

define_error_codes! {
    /// Machine-readable error codes for [`GraphError`].
    enum GraphErrorCode for GraphError {
        /// The graph declared zero vertices.
        EmptyGraph => EmptyGraph => "EMPTY_GRAPH",
        /// Declared and supplied edge counts differ.
        EdgeCountMismatch => EdgeCountMismatch { .. } => "EDGE_COUNT_MISMATCH",
        /// An edge or query named an unknown vertex.
        InvalidVertexId => InvalidVertexId { .. } => "INVALID_VERTEX_ID",
        /// An edge was a self-loop.
        SelfLoop => SelfLoop { .. } => "SELF_LOOP",
        /// An edge carried a negative weight.
        NegativeWeight => NegativeWeight { .. } => "NEGATIVE_WEIGHT",
        /// The graph is not connected.
        Disconnected => Disconnected { .. } => "DISCONNECTED_GRAPH",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "INVARIANT_VIOLATION",
    }
}

/// Convenient result alias for spanning tree operations.
pub type Result<T> = std::result::Result<T, GraphError>;
