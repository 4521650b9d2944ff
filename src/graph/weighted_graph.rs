//! Core graph structure — an adjacency list of weighted, directed edges.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::engine::{self, Heuristic};
use crate::types::{PathError, PathResult, ShortestPath, Vertex, Weight};

/// Directed, weighted graph stored as `vertex -> [(weight, neighbor)]`.
///
/// Every vertex named as a neighbor should also have its own entry. This is
/// not enforced on construction; a query that walks into a missing entry fails
/// with [`PathError::UnknownVertex`].
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<V, W> {
    /// Outgoing edges per vertex, in insertion order.
    adjacency: BTreeMap<V, Vec<(W, V)>>,
}

impl<V: Vertex, W: Weight> Graph<V, W> {
    /// Wrap an adjacency mapping as-is.
    pub fn new(adjacency: BTreeMap<V, Vec<(W, V)>>) -> Self {
        Self { adjacency }
    }

    /// Create a graph with no vertices.
    pub fn empty() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges, counting multi-edges separately.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Whether `vertex` has an entry.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Outgoing `(weight, neighbor)` pairs of `vertex`, or `None` if it has no entry.
    pub fn neighbors(&self, vertex: &V) -> Option<&[(W, V)]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Iterate all vertices in order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Iterate all edges as `(from, weight, to)`.
    pub fn edges(&self) -> impl Iterator<Item = (&V, W, &V)> {
        self.adjacency
            .iter()
            .flat_map(|(from, out)| out.iter().map(move |(w, to)| (from, *w, to)))
    }

    /// The underlying adjacency mapping.
    pub fn adjacency(&self) -> &BTreeMap<V, Vec<(W, V)>> {
        &self.adjacency
    }

    /// Consume the graph, returning its adjacency mapping.
    pub fn into_adjacency(self) -> BTreeMap<V, Vec<(W, V)>> {
        self.adjacency
    }

    /// Add a vertex with no outgoing edges.
    ///
    /// Returns `false` and leaves the graph untouched if it already exists.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    /// Append a directed edge `from -> to`.
    ///
    /// Both endpoints must already exist, otherwise nothing changes and
    /// `false` is returned. Parallel edges are allowed.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> bool {
        if !self.adjacency.contains_key(&to) {
            return false;
        }
        match self.adjacency.get_mut(&from) {
            Some(out) => {
                out.push((weight, to));
                true
            }
            None => false,
        }
    }

    /// Check that every neighbor has its own entry.
    pub fn validate(&self) -> PathResult<()> {
        for (_, _, to) in self.edges() {
            if !self.adjacency.contains_key(to) {
                return Err(PathError::unknown(to));
            }
        }
        Ok(())
    }

    /// Shortest path by Dijkstra's algorithm. See [`engine::dijkstra`].
    pub fn dijkstra(&self, source: &V, dest: &V) -> PathResult<ShortestPath<V, W>> {
        engine::dijkstra(self, source, dest)
    }

    /// Shortest path by Bellman-Ford. See [`engine::bellman_ford`].
    pub fn bellman_ford(&self, source: &V, target: &V) -> PathResult<ShortestPath<V, W>> {
        engine::bellman_ford(self, source, target)
    }

    /// Shortest path by A* with the given heuristic. See [`engine::astar`].
    pub fn astar<H>(&self, source: &V, target: &V, heuristic: &H) -> PathResult<ShortestPath<V, W>>
    where
        H: Heuristic<V, W> + ?Sized,
    {
        engine::astar(self, source, target, heuristic)
    }
}

impl<V: Vertex, W: Weight> Default for Graph<V, W> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: Vertex, W: Weight> From<BTreeMap<V, Vec<(W, V)>>> for Graph<V, W> {
    fn from(adjacency: BTreeMap<V, Vec<(W, V)>>) -> Self {
        Self::new(adjacency)
    }
}

impl<V: Vertex, W: Weight> From<HashMap<V, Vec<(W, V)>>> for Graph<V, W> {
    fn from(adjacency: HashMap<V, Vec<(W, V)>>) -> Self {
        adjacency.into_iter().collect()
    }
}

impl<V: Vertex, W: Weight> FromIterator<(V, Vec<(W, V)>)> for Graph<V, W> {
    fn from_iter<I: IntoIterator<Item = (V, Vec<(W, V)>)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<V: Vertex, W: Weight> fmt::Display for Graph<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (vertex, out)) in self.adjacency.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: [", vertex)?;
            for (j, (weight, to)) in out.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "({}, {})", weight, to)?;
            }
            write!(f, "]")?;
        }
        write!(f, "}}")
    }
}
