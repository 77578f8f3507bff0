use std::collections::VecDeque;
use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FusedIterator;
use std::slice;

use tracing::debug;

use crate::collections::traits::{Container, Insert, Remove};
use crate::error::{GraphError, KindMismatch, NodeNotFound, NotFound, RemoveError};
use crate::value::{Tofu, TofuKind};

/// A directed graph whose vertices are distinct values of one kind.
///
/// Vertices are identified by value and stored in insertion order, each with a list of outgoing
/// edges. An edge is stored as the index of its target, so removing a vertex shifts the indices of
/// every later vertex.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `v`: The number of vertices.
/// - `e`: The number of edges.
///
/// | Method | Complexity |
/// |-|-|
/// | `add_vertex` | `O(v)` |
/// | `add_edge/has_edge/remove_edge` | `O(v)` |
/// | `remove_vertex` | `O(v + e)` |
/// | `breadth_first/depth_first` | `O(v + e)` |
pub struct Graph {
    pub(crate) kind: TofuKind,
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) edge_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Vertex {
    pub value: Tofu,
    pub edges: Vec<usize>,
}

impl Graph {
    pub const fn new(kind: TofuKind) -> Graph {
        Graph {
            kind,
            vertices: Vec::new(),
            edge_count: 0,
        }
    }

    pub const fn kind(&self) -> TofuKind {
        self.kind
    }

    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Adds `value` as a vertex with no edges, returning false if it is already a vertex.
    pub fn add_vertex(&mut self, value: Tofu) -> Result<bool, KindMismatch> {
        self.kind.check(&value)?;
        if self.position(&value).is_some() {
            return Ok(false);
        }
        self.vertices.push(Vertex {
            value,
            edges: Vec::new(),
        });
        Ok(true)
    }

    /// Adds a directed edge from `from` to `to`, returning false if the edge already exists.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if either endpoint isn't a vertex.
    pub fn add_edge(&mut self, from: &Tofu, to: &Tofu) -> Result<bool, GraphError> {
        let source = self.vertex_index(from)?;
        let target = self.vertex_index(to)?;

        let edges = &mut self.vertices[source].edges;
        if edges.contains(&target) {
            return Ok(false);
        }
        edges.push(target);
        self.edge_count += 1;
        Ok(true)
    }

    /// Removes the edge from `from` to `to`, returning false if there was no such edge.
    pub fn remove_edge(&mut self, from: &Tofu, to: &Tofu) -> Result<bool, GraphError> {
        let source = self.vertex_index(from)?;
        let target = self.vertex_index(to)?;

        let edges = &mut self.vertices[source].edges;
        match edges.iter().position(|edge| *edge == target) {
            Some(index) => {
                edges.remove(index);
                self.edge_count -= 1;
                Ok(true)
            },
            None => Ok(false),
        }
    }

    pub fn has_edge(&self, from: &Tofu, to: &Tofu) -> bool {
        match (self.position(from), self.position(to)) {
            (Some(source), Some(target)) => self.vertices[source].edges.contains(&target),
            _ => false,
        }
    }

    /// Removes the vertex equal to `value` along with every edge into or out of it.
    pub fn remove_vertex(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        self.kind.check(value)?;
        let removed = self.position(value).ok_or(NotFound)?;
        let vertex = self.vertices.remove(removed);
        self.edge_count -= vertex.edges.len();

        let mut incoming = 0;
        for other in self.vertices.iter_mut() {
            let before = other.edges.len();
            other.edges.retain(|edge| *edge != removed);
            incoming += before - other.edges.len();

            for edge in other.edges.iter_mut() {
                if *edge > removed {
                    *edge -= 1;
                }
            }
        }
        self.edge_count -= incoming;

        debug!(
            vertex = %vertex.value,
            outgoing = vertex.edges.len(),
            incoming,
            "removed graph vertex"
        );
        Ok(vertex.value)
    }

    /// Iterates over the targets of the edges leaving `value`, in the order they were added.
    pub fn neighbours(&self, value: &Tofu) -> Result<Neighbours<'_>, GraphError> {
        let index = self.vertex_index(value)?;
        Ok(Neighbours {
            graph: self,
            edges: self.vertices[index].edges.iter(),
        })
    }

    /// Visits every vertex reachable from `start`, nearest first.
    pub fn breadth_first(&self, start: &Tofu) -> Result<BreadthFirst<'_>, GraphError> {
        let start = self.vertex_index(start)?;
        let mut visited = vec![false; self.vertices.len()];
        visited[start] = true;

        Ok(BreadthFirst {
            graph: self,
            queue: VecDeque::from([start]),
            visited,
        })
    }

    /// Visits every vertex reachable from `start`, following each edge as deep as it goes before
    /// backtracking. Edges are followed in the order they were added.
    pub fn depth_first(&self, start: &Tofu) -> Result<DepthFirst<'_>, GraphError> {
        let start = self.vertex_index(start)?;

        Ok(DepthFirst {
            graph: self,
            stack: vec![start],
            visited: vec![false; self.vertices.len()],
        })
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edge_count = 0;
    }

    /// Iterates over the vertices in insertion order.
    pub fn iter(&self) -> Vertices<'_> {
        Vertices(self.vertices.iter())
    }

    pub(crate) fn position(&self, value: &Tofu) -> Option<usize> {
        self.vertices.iter().position(|vertex| vertex.value == *value)
    }

    pub(crate) fn vertex_index(&self, value: &Tofu) -> Result<usize, GraphError> {
        self.kind.check(value)?;
        Ok(self.position(value).ok_or(NodeNotFound)?)
    }
}

impl Container for Graph {
    type Iter<'a> = Vertices<'a>;

    fn kind(&self) -> TofuKind {
        self.kind
    }

    fn len(&self) -> usize {
        self.vertices.len()
    }

    fn iter(&self) -> Vertices<'_> {
        Graph::iter(self)
    }
}

impl Insert for Graph {
    type Error = KindMismatch;

    fn insert(&mut self, value: Tofu) -> Result<(), KindMismatch> {
        self.add_vertex(value).map(|_| ())
    }
}

impl Remove for Graph {
    fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        self.remove_vertex(value)
    }
}

impl Clone for Graph {
    fn clone(&self) -> Self {
        Graph {
            kind: self.kind,
            vertices: self.vertices.clone(),
            edge_count: self.edge_count,
        }
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.vertices == other.vertices
    }
}

impl Eq for Graph {}

impl Debug for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("kind", &self.kind)
            .field("vertices", &self.vertices)
            .field("edge_count", &self.edge_count)
            .finish()
    }
}

/// Writes one line per vertex as `a -> [b, c]`.
impl Display for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, vertex) in self.vertices.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{} -> [", vertex.value)?;
            for (position, edge) in vertex.edges.iter().enumerate() {
                if position > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.vertices[*edge].value)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Tofu;

    type IntoIter = Vertices<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone)]
pub struct Vertices<'a>(pub(crate) slice::Iter<'a, Vertex>);

impl<'a> Iterator for Vertices<'a> {
    type Item = &'a Tofu;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|vertex| &vertex.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Vertices<'_> {}

impl FusedIterator for Vertices<'_> {}

#[derive(Clone)]
pub struct Neighbours<'a> {
    pub(crate) graph: &'a Graph,
    pub(crate) edges: slice::Iter<'a, usize>,
}

impl<'a> Iterator for Neighbours<'a> {
    type Item = &'a Tofu;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let target = *self.edges.next()?;
        Some(&graph.vertices[target].value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl ExactSizeIterator for Neighbours<'_> {}

impl FusedIterator for Neighbours<'_> {}

pub struct BreadthFirst<'a> {
    pub(crate) graph: &'a Graph,
    pub(crate) queue: VecDeque<usize>,
    pub(crate) visited: Vec<bool>,
}

impl<'a> Iterator for BreadthFirst<'a> {
    type Item = &'a Tofu;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let index = self.queue.pop_front()?;
        let vertex = &graph.vertices[index];

        for &edge in &vertex.edges {
            if !self.visited[edge] {
                self.visited[edge] = true;
                self.queue.push_back(edge);
            }
        }
        Some(&vertex.value)
    }
}

impl FusedIterator for BreadthFirst<'_> {}

pub struct DepthFirst<'a> {
    pub(crate) graph: &'a Graph,
    pub(crate) stack: Vec<usize>,
    pub(crate) visited: Vec<bool>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a Tofu;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        loop {
            let index = self.stack.pop()?;
            if self.visited[index] {
                continue;
            }
            self.visited[index] = true;

            let vertex = &graph.vertices[index];
            // Reversed, so the first edge is on top of the stack.
            self.stack.extend(vertex.edges.iter().rev().filter(|edge| !self.visited[**edge]));
            return Some(&vertex.value);
        }
    }
}

impl FusedIterator for DepthFirst<'_> {}
