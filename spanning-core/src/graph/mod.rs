//! Minimum and second-smallest spanning trees of a weighted graph.
//!
//! [`Graph`] is a single-pass batch processor. Kruskal's algorithm builds the
//! minimum spanning tree (MST) and keeps every rejected edge. The
//! second-smallest tree is then found by rooting the MST, asking for the
//! heaviest tree edge on the cycle each rejected edge would close, and
//! swapping in the rejected edge that adds the least weight.
//!
//! Results are cached, so repeated calls return the same trees without
//! recomputing them.

mod rooted;

use tracing::{Span, debug, field, info, instrument};

use crate::edge::Edge;
use crate::error::{GraphError, Result};
use crate::union_find::DisjointSet;

pub use self::rooted::{ROOT_VERTEX, RootedTree, VertexInfo};

/// Weight reported by [`Graph::compute_second_smallest_spanning_tree`] when
/// no second-smallest spanning tree exists.
pub const NO_SECOND_TREE_WEIGHT: i64 = -1;

/// Vertex and edge counts announced ahead of the edge list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphInfo {
    /// Number of vertices, numbered `1..=number_of_vertices`.
    pub number_of_vertices: usize,
    /// Number of edges in the edge list.
    pub number_of_edges: usize,
}

/// Edges of a spanning tree together with their total weight.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    weight: i64,
}

impl SpanningTree {
    /// Returns the tree edges sorted by first vertex, then second vertex.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the total edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }

    /// Splits the tree into its edges and weight.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Edge>, i64) {
        (self.edges, self.weight)
    }
}

#[derive(Clone, Debug)]
struct MstState {
    edges: Vec<Edge>,
    weight: i64,
    edges_not_in_mst: Vec<Edge>,
    sorted: bool,
}

#[derive(Clone, Debug)]
enum Replacement {
    NotComputed,
    Unavailable,
    Found(SpanningTree),
}

/// A simple, connected, weighted, undirected graph.
#[derive(Clone, Debug)]
pub struct Graph {
    number_of_vertices: usize,
    number_of_edges: usize,
    edges: Vec<Edge>,
    mst: Option<MstState>,
    rooted: Option<RootedTree>,
    replacement: Replacement,
}

impl Graph {
    /// Creates a graph from its header and edge list.
    ///
    /// # Errors
    /// Returns an error when:
    /// - `number_of_vertices == 0`
    /// - `edges.len()` differs from `number_of_edges`
    /// - an edge has a vertex outside `1..=number_of_vertices`
    /// - an edge is a self-loop
    /// - an edge weight is negative
    ///
    /// # Examples
    /// ```
    /// use spanning_core::{Edge, Graph, GraphInfo};
    ///
    /// let info = GraphInfo { number_of_vertices: 3, number_of_edges: 3 };
    /// let edges = vec![Edge::new(1, 2, 1), Edge::new(2, 3, 2), Edge::new(1, 3, 3)];
    /// let mut graph = Graph::new(info, edges)?;
    /// let (mst, weight) = graph.compute_smallest_spanning_tree()?;
    /// assert_eq!(weight, 3);
    /// assert_eq!(mst, vec![Edge::new(1, 2, 1), Edge::new(2, 3, 2)]);
    /// # Ok::<(), spanning_core::GraphError>(())
    /// ```
    pub fn new(info: GraphInfo, edges: Vec<Edge>) -> Result<Self> {
        let GraphInfo {
            number_of_vertices,
            number_of_edges,
        } = info;

        if number_of_vertices == 0 {
            return Err(GraphError::EmptyGraph);
        }
        if edges.len() != number_of_edges {
            return Err(GraphError::EdgeCountMismatch {
                declared: number_of_edges,
                actual: edges.len(),
            });
        }
        for edge in &edges {
            validate_edge(edge, number_of_vertices)?;
        }

        Ok(Self {
            number_of_vertices,
            number_of_edges,
            edges,
            mst: None,
            rooted: None,
            replacement: Replacement::NotComputed,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn number_of_vertices(&self) -> usize { self.number_of_vertices }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn number_of_edges(&self) -> usize { self.number_of_edges }

    /// Returns the edges in the order they were supplied.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the MST edges once Kruskal has run.
    #[must_use]
    pub fn mst_edges(&self) -> Option<&[Edge]> {
        self.mst.as_ref().map(|state| state.edges.as_slice())
    }

    /// Returns the MST weight once Kruskal has run.
    #[must_use]
    pub fn mst_weight(&self) -> Option<i64> {
        self.mst.as_ref().map(|state| state.weight)
    }

    /// Returns the edges Kruskal rejected, in ascending weight order.
    #[must_use]
    pub fn edges_not_in_mst(&self) -> Option<&[Edge]> {
        self.mst
            .as_ref()
            .map(|state| state.edges_not_in_mst.as_slice())
    }

    /// Returns the second-smallest spanning tree once it has been computed
    /// and exists.
    #[must_use]
    pub fn second_smallest_mst_edges(&self) -> Option<&[Edge]> {
        match &self.replacement {
            Replacement::Found(tree) => Some(tree.edges()),
            Replacement::NotComputed | Replacement::Unavailable => None,
        }
    }

    /// Returns the second-smallest spanning tree weight once it has been
    /// computed and exists.
    #[must_use]
    pub fn second_smallest_mst_weight(&self) -> Option<i64> {
        match &self.replacement {
            Replacement::Found(tree) => Some(tree.weight()),
            Replacement::NotComputed | Replacement::Unavailable => None,
        }
    }

    /// Runs Kruskal's algorithm unless it has already run.
    ///
    /// Edges are visited in ascending weight order, ties keeping their input
    /// order. An edge joining two components enters the MST; any other edge
    /// is kept as a replacement candidate.
    ///
    /// # Errors
    /// Returns [`GraphError::Disconnected`] when the accepted edges do not
    /// span every vertex.
    #[instrument(
        name = "graph.kruskal",
        err,
        skip(self),
        fields(vertices = self.number_of_vertices, edges = self.number_of_edges, tree_edges = field::Empty),
    )]
    pub fn kruskal(&mut self) -> Result<()> {
        if self.mst.is_some() {
            return Ok(());
        }

        let mut by_weight = self.edges.clone();
        by_weight.sort_by_key(Edge::weight);

        let mut forest = DisjointSet::new(self.number_of_vertices.saturating_add(1));
        let required = self.number_of_vertices.saturating_sub(1);
        let mut tree_edges = Vec::with_capacity(required);
        let mut edges_not_in_mst = Vec::new();
        let mut weight: i64 = 0;

        for edge in by_weight {
            if forest.union(edge.first_vertex(), edge.second_vertex()) {
                weight = weight.saturating_add(edge.weight());
                tree_edges.push(edge);
            } else {
                edges_not_in_mst.push(edge);
            }
        }

        Span::current().record("tree_edges", tree_edges.len());
        if tree_edges.len() < required {
            return Err(GraphError::Disconnected {
                tree_edges: tree_edges.len(),
                required,
            });
        }

        debug!(
            weight,
            rejected = edges_not_in_mst.len(),
            "minimum spanning tree constructed"
        );
        self.mst = Some(MstState {
            edges: tree_edges,
            weight,
            edges_not_in_mst,
            sorted: false,
        });
        Ok(())
    }

    /// Returns the minimum spanning tree, running Kruskal if required.
    ///
    /// # Errors
    /// Returns [`GraphError::Disconnected`] when the graph is not connected.
    #[instrument(name = "graph.smallest_mst", err, skip(self))]
    pub fn smallest_mst(&mut self) -> Result<SpanningTree> {
        let state = self.sorted_mst_state()?;
        Ok(SpanningTree {
            edges: state.edges.clone(),
            weight: state.weight,
        })
    }

    /// Returns the MST rooted at [`ROOT_VERTEX`], building it if required.
    ///
    /// # Errors
    /// Returns [`GraphError::Disconnected`] when the graph is not connected.
    pub fn rooted_tree(&mut self) -> Result<&RootedTree> {
        if self.rooted.is_none() {
            let number_of_vertices = self.number_of_vertices;
            let state = self.sorted_mst_state()?;
            let tree = RootedTree::build(number_of_vertices, &state.edges)?;
            self.rooted = Some(tree);
        }
        self.rooted.as_ref().ok_or(GraphError::InvariantViolation {
            invariant: "rooted tree must be cached after construction",
            vertex: ROOT_VERTEX,
        })
    }

    /// Returns the heaviest MST edge on the tree path between two vertices,
    /// or `None` when both vertices are the same.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertexId`] for unknown vertices and
    /// [`GraphError::Disconnected`] when the graph is not connected.
    ///
    /// # Examples
    /// ```
    /// use spanning_core::{Edge, Graph, GraphInfo};
    ///
    /// let info = GraphInfo { number_of_vertices: 3, number_of_edges: 2 };
    /// let mut graph = Graph::new(info, vec![Edge::new(1, 2, 4), Edge::new(2, 3, 9)])?;
    /// assert_eq!(graph.max_edge_on_path(1, 3)?, Some(Edge::new(2, 3, 9)));
    /// assert_eq!(graph.max_edge_on_path(2, 2)?, None);
    /// # Ok::<(), spanning_core::GraphError>(())
    /// ```
    pub fn max_edge_on_path(&mut self, first: usize, second: usize) -> Result<Option<Edge>> {
        for vertex in [first, second] {
            if vertex == 0 || vertex > self.number_of_vertices {
                return Err(GraphError::InvalidVertexId {
                    vertex,
                    vertex_count: self.number_of_vertices,
                });
            }
        }
        let heaviest = self.rooted_tree()?.max_edge_on_path(first, second)?;
        Ok(heaviest.map(|entry| entry.canonical()))
    }

    /// Returns the second-smallest spanning tree, or `None` when the MST
    /// already uses every edge.
    ///
    /// Every rejected edge is tried as a replacement for the heaviest MST
    /// edge on the cycle it closes. The candidate adding the least weight
    /// wins; on equal cost the later candidate in ascending-weight order is
    /// kept.
    ///
    /// # Errors
    /// Returns [`GraphError::Disconnected`] when the graph is not connected.
    #[instrument(
        name = "graph.second_smallest_mst",
        err,
        skip(self),
        fields(candidates = field::Empty, weight = field::Empty),
    )]
    pub fn second_smallest_mst(&mut self) -> Result<Option<SpanningTree>> {
        self.sorted_mst_state()?;
        match &self.replacement {
            Replacement::Found(tree) => return Ok(Some(tree.clone())),
            Replacement::Unavailable => return Ok(None),
            Replacement::NotComputed => {}
        }

        let candidates = self.mst_state()?.edges_not_in_mst.len();
        let span = Span::current();
        span.record("candidates", candidates);
        if candidates == 0 {
            debug!("every edge is in the minimum spanning tree");
            self.replacement = Replacement::Unavailable;
            return Ok(None);
        }

        self.rooted_tree()?;
        let tree = self.best_replacement()?;
        span.record("weight", tree.weight());
        info!(weight = tree.weight(), "second-smallest spanning tree found");
        self.replacement = Replacement::Found(tree.clone());
        Ok(Some(tree))
    }

    /// Returns the MST edges and weight.
    ///
    /// # Errors
    /// Returns [`GraphError::Disconnected`] when the graph is not connected.
    pub fn compute_smallest_spanning_tree(&mut self) -> Result<(Vec<Edge>, i64)> {
        self.smallest_mst().map(SpanningTree::into_parts)
    }

    /// Returns the second-smallest spanning tree edges and weight, or an
    /// empty edge list with [`NO_SECOND_TREE_WEIGHT`] when none exists.
    ///
    /// # Errors
    /// Returns [`GraphError::Disconnected`] when the graph is not connected.
    pub fn compute_second_smallest_spanning_tree(&mut self) -> Result<(Vec<Edge>, i64)> {
        Ok(self
            .second_smallest_mst()?
            .map_or((Vec::new(), NO_SECOND_TREE_WEIGHT), SpanningTree::into_parts))
    }

    fn best_replacement(&self) -> Result<SpanningTree> {
        let state = self.mst_state()?;
        let rooted = self.rooted.as_ref().ok_or(GraphError::InvariantViolation {
            invariant: "rooted tree must exist before replacement search",
            vertex: ROOT_VERTEX,
        })?;

        let mut best: Option<(i64, Edge, Edge)> = None;
        for candidate in &state.edges_not_in_mst {
            let heaviest = rooted
                .max_edge_on_path(candidate.first_vertex(), candidate.second_vertex())?
                .ok_or(GraphError::InvariantViolation {
                    invariant: "replacement candidate must close a cycle",
                    vertex: candidate.first_vertex(),
                })?;
            let difference = candidate.weight().saturating_sub(heaviest.weight());
            if best.is_none_or(|(best_difference, _, _)| difference <= best_difference) {
                best = Some((difference, heaviest.canonical(), *candidate));
            }
        }

        let Some((_, removed, added)) = best else {
            return Err(GraphError::InvariantViolation {
                invariant: "replacement search needs at least one candidate",
                vertex: ROOT_VERTEX,
            });
        };

        let mut edges = state.edges.clone();
        let position = edges.iter().position(|edge| *edge == removed).ok_or(
            GraphError::InvariantViolation {
                invariant: "replaced edge must belong to the minimum spanning tree",
                vertex: removed.first_vertex(),
            },
        )?;
        edges.remove(position);
        edges.push(added);
        sort_edges_by_vertex(&mut edges);

        debug!(
            removed = %removed,
            added = %added,
            "replacement edge selected"
        );
        let weight = state
            .weight
            .saturating_add(added.weight())
            .saturating_sub(removed.weight());
        Ok(SpanningTree { edges, weight })
    }

    /// Runs Kruskal if required and sorts the MST edges by vertex once.
    fn sorted_mst_state(&mut self) -> Result<&MstState> {
        self.kruskal()?;
        let state = self.mst_state_mut()?;
        if !state.sorted {
            sort_edges_by_vertex(&mut state.edges);
            state.sorted = true;
        }
        Ok(&*state)
    }

    fn mst_state(&self) -> Result<&MstState> {
        self.mst.as_ref().ok_or(MST_NOT_BUILT)
    }

    fn mst_state_mut(&mut self) -> Result<&mut MstState> {
        self.mst.as_mut().ok_or(MST_NOT_BUILT)
    }
}

const MST_NOT_BUILT: GraphError = GraphError::InvariantViolation {
    invariant: "kruskal must run before the tree is read",
    vertex: ROOT_VERTEX,
};

fn validate_edge(edge: &Edge, number_of_vertices: usize) -> Result<()> {
    for vertex in [edge.first_vertex(), edge.second_vertex()] {
        if vertex == 0 || vertex > number_of_vertices {
            return Err(GraphError::InvalidVertexId {
                vertex,
                vertex_count: number_of_vertices,
            });
        }
    }
    if edge.first_vertex() == edge.second_vertex() {
        return Err(GraphError::SelfLoop {
            vertex: edge.first_vertex(),
        });
    }
    if edge.weight() < 0 {
        return Err(GraphError::NegativeWeight {
            first: edge.first_vertex(),
            second: edge.second_vertex(),
            weight: edge.weight(),
        });
    }
    Ok(())
}

/// Orders edges by first vertex, then second vertex. The sort is stable, so
/// edges sharing both endpoints keep their relative order.
fn sort_edges_by_vertex(edges: &mut [Edge]) {
    edges.sort_by_key(|edge| (edge.first_vertex(), edge.second_vertex()));
}

#[cfg(test)]
mod property;
