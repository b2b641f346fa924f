//! Rooted view of a minimum spanning tree.
//!
//! The tree is rooted at vertex [`ROOT_VERTEX`] and labelled with a
//! stack-driven (depth-first) walk. Every non-root vertex stores its parent,
//! the adjacency entry leading to it, and its depth, which is enough to climb
//! from any two vertices to their lowest common ancestor.

use crate::edge::{Edge, Orientation, OrientedEdge};
use crate::error::{GraphError, Result};
use crate::membership::MembershipSet;

/// Vertex used as the root of every rooted spanning tree.
pub const ROOT_VERTEX: usize = 1;

/// Placement of one vertex inside a [`RootedTree`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VertexInfo {
    vertex: usize,
    parent: Option<usize>,
    parent_edge: Option<OrientedEdge>,
    depth: usize,
}

impl VertexInfo {
    /// Returns the vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex(&self) -> usize { self.vertex }

    /// Returns the parent vertex, `None` only for the root.
    #[must_use]
    #[rustfmt::skip]
    pub const fn parent(&self) -> Option<usize> { self.parent }

    /// Returns the tree edge to the parent, `None` only for the root.
    #[must_use]
    #[rustfmt::skip]
    pub const fn parent_edge(&self) -> Option<OrientedEdge> { self.parent_edge }

    /// Returns the number of edges between this vertex and the root.
    #[must_use]
    #[rustfmt::skip]
    pub const fn depth(&self) -> usize { self.depth }
}

/// Spanning tree rooted at [`ROOT_VERTEX`].
#[derive(Clone, Debug)]
pub struct RootedTree {
    infos: Vec<Option<VertexInfo>>,
    visit_order: Vec<usize>,
}

impl RootedTree {
    /// Roots the tree formed by `tree_edges` over vertices `1..=number_of_vertices`.
    ///
    /// Each tree edge `(u, v, w)` contributes a reversed entry to `v`'s
    /// adjacency list and then a forward entry to `u`'s list. Vertices are
    /// expanded in last-in first-out order.
    pub(crate) fn build(number_of_vertices: usize, tree_edges: &[Edge]) -> Result<Self> {
        let slots = number_of_vertices.saturating_add(1);
        let adjacency = adjacency_lists(slots, tree_edges);

        let mut infos: Vec<Option<VertexInfo>> = vec![None; slots];
        infos[ROOT_VERTEX] = Some(VertexInfo {
            vertex: ROOT_VERTEX,
            parent: None,
            parent_edge: None,
            depth: 0,
        });

        let mut visited = MembershipSet::with_capacity(slots);
        let mut visit_order = Vec::with_capacity(number_of_vertices);
        let mut pending = vec![ROOT_VERTEX];

        while let Some(current) = pending.pop() {
            visited.add(current);
            visit_order.push(current);
            let depth = lookup(&infos, current)?.depth.saturating_add(1);

            for entry in &adjacency[current] {
                let child = entry.to();
                if visited.contains(child) {
                    continue;
                }
                infos[child] = Some(VertexInfo {
                    vertex: child,
                    parent: Some(current),
                    parent_edge: Some(*entry),
                    depth,
                });
                visited.add(child);
                pending.push(child);
            }
        }

        if visited.len() != number_of_vertices {
            let missing = (1..=number_of_vertices)
                .find(|vertex| !visited.contains(*vertex))
                .unwrap_or(ROOT_VERTEX);
            return Err(GraphError::InvariantViolation {
                invariant: "rooted tree must reach every vertex",
                vertex: missing,
            });
        }

        Ok(Self { infos, visit_order })
    }

    /// Returns the placement of `vertex`, or `None` when it is not in the tree.
    #[must_use]
    pub fn info(&self, vertex: usize) -> Option<&VertexInfo> {
        self.infos.get(vertex).and_then(Option::as_ref)
    }

    /// Returns the vertices in the order the walk expanded them.
    #[must_use]
    pub fn visit_order(&self) -> &[usize] {
        &self.visit_order
    }

    /// Returns the heaviest tree edge on the path between `first` and `second`.
    ///
    /// Two cursors climb towards the root. Whichever cursor is at least as
    /// deep as the other moves to its parent (both move on equal depth, the
    /// second cursor first), and the edge it crosses replaces the running
    /// maximum only when strictly heavier. The climb stops when the cursors
    /// meet at the lowest common ancestor. Returns `None` when
    /// `first == second`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertexId`] when a vertex is not part of
    /// the tree, or [`GraphError::InvariantViolation`] when a non-root vertex
    /// has no parent.
    pub fn max_edge_on_path(&self, first: usize, second: usize) -> Result<Option<OrientedEdge>> {
        let mut first_cursor = first;
        let mut second_cursor = second;
        let mut heaviest: Option<OrientedEdge> = None;

        while first_cursor != second_cursor {
            let first_info = *self.placed(first_cursor)?;
            let second_info = *self.placed(second_cursor)?;

            if first_info.depth <= second_info.depth {
                second_cursor = climb(&second_info, &mut heaviest)?;
            }
            if first_info.depth >= second_info.depth {
                first_cursor = climb(&first_info, &mut heaviest)?;
            }
        }

        Ok(heaviest)
    }

    fn placed(&self, vertex: usize) -> Result<&VertexInfo> {
        self.info(vertex).ok_or(GraphError::InvalidVertexId {
            vertex,
            vertex_count: self.infos.len().saturating_sub(1),
        })
    }
}

fn adjacency_lists(slots: usize, tree_edges: &[Edge]) -> Vec<Vec<OrientedEdge>> {
    let mut adjacency = vec![Vec::new(); slots];
    for edge in tree_edges {
        adjacency[edge.second_vertex()].push(edge.oriented(Orientation::Reversed));
        adjacency[edge.first_vertex()].push(edge.oriented(Orientation::Forward));
    }
    adjacency
}

fn lookup(infos: &[Option<VertexInfo>], vertex: usize) -> Result<&VertexInfo> {
    infos
        .get(vertex)
        .and_then(Option::as_ref)
        .ok_or(GraphError::InvariantViolation {
            invariant: "expanded vertex must already be placed",
            vertex,
        })
}

/// Moves one cursor to its parent, folding the crossed edge into `heaviest`.
fn climb(info: &VertexInfo, heaviest: &mut Option<OrientedEdge>) -> Result<usize> {
    let (Some(parent), Some(edge)) = (info.parent, info.parent_edge) else {
        return Err(GraphError::InvariantViolation {
            invariant: "only the root may lack a parent",
            vertex: info.vertex,
        });
    };
    if heaviest.is_none_or(|current| edge.weight() > current.weight()) {
        *heaviest = Some(edge);
    }
    Ok(parent)
}
