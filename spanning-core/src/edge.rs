//! Edge types shared by the spanning tree engine.
//!
//! [`Edge`] is the undirected input/output edge. Two edges compare equal when
//! they join the same unordered vertex pair with the same weight, so `(1, 2, 5)`
//! and `(2, 1, 5)` are the same edge. [`OrientedEdge`] is the adjacency entry
//! used while rooting the tree; it remembers whether it runs in the stored
//! order of the edge it came from so that edge can be recovered exactly.

use std::fmt;

/// An undirected weighted edge `(first_vertex, second_vertex, weight)`.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    first_vertex: usize,
    second_vertex: usize,
    weight: i64,
}

impl Edge {
    /// Creates an edge between two 1-based vertex ids.
    ///
    /// # Examples
    /// ```
    /// use spanning_core::Edge;
    ///
    /// let edge = Edge::new(1, 2, 7);
    /// assert_eq!(edge, Edge::new(2, 1, 7));
    /// assert_ne!(edge, Edge::new(1, 2, 8));
    /// ```
    #[must_use]
    pub const fn new(first_vertex: usize, second_vertex: usize, weight: i64) -> Self {
        Self {
            first_vertex,
            second_vertex,
            weight,
        }
    }

    /// Returns the first endpoint in stored order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn first_vertex(&self) -> usize { self.first_vertex }

    /// Returns the second endpoint in stored order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn second_vertex(&self) -> usize { self.second_vertex }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }

    /// Returns the endpoints as `(first_vertex, second_vertex)`.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.first_vertex, self.second_vertex)
    }

    pub(crate) const fn oriented(self, orientation: Orientation) -> OrientedEdge {
        let (from, to) = match orientation {
            Orientation::Forward => (self.first_vertex, self.second_vertex),
            Orientation::Reversed => (self.second_vertex, self.first_vertex),
        };
        OrientedEdge {
            from,
            to,
            weight: self.weight,
            orientation,
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        let same_order =
            self.first_vertex == other.first_vertex && self.second_vertex == other.second_vertex;
        let swapped =
            self.first_vertex == other.second_vertex && self.second_vertex == other.first_vertex;
        self.weight == other.weight && (same_order || swapped)
    }
}

impl Eq for Edge {}

impl From<(usize, usize, i64)> for Edge {
    fn from((first_vertex, second_vertex, weight): (usize, usize, i64)) -> Self {
        Self::new(first_vertex, second_vertex, weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.first_vertex, self.second_vertex, self.weight
        )
    }
}

/// Direction of an [`OrientedEdge`] relative to the edge it was derived from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Orientation {
    /// `from`/`to` match the stored `first_vertex`/`second_vertex`.
    Forward,
    /// `from`/`to` are the stored endpoints swapped.
    Reversed,
}

/// An adjacency entry pointing from one tree vertex to a neighbour.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OrientedEdge {
    from: usize,
    to: usize,
    weight: i64,
    orientation: Orientation,
}

impl OrientedEdge {
    /// Returns the vertex whose adjacency list holds this entry.
    #[must_use]
    #[rustfmt::skip]
    pub const fn from(&self) -> usize { self.from }

    /// Returns the neighbouring vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn to(&self) -> usize { self.to }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }

    /// Returns the orientation relative to the originating edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn orientation(&self) -> Orientation { self.orientation }

    /// Reconstructs the originating [`Edge`] with its stored endpoint order.
    #[must_use]
    pub const fn canonical(&self) -> Edge {
        match self.orientation {
            Orientation::Forward => Edge::new(self.from, self.to, self.weight),
            Orientation::Reversed => Edge::new(self.to, self.from, self.weight),
        }
    }
}
