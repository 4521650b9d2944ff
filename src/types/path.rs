//! Shortest-path query results.

use serde::Serialize;

/// The answer to a shortest-path query: total cost and the vertices walked,
/// source and destination inclusive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath<V, W> {
    /// Sum of the edge weights along `vertices`.
    pub cost: W,
    /// Vertices from source to destination.
    pub vertices: Vec<V>,
}

impl<V, W> ShortestPath<V, W> {
    /// Create a new path result.
    pub fn new(cost: W, vertices: Vec<V>) -> Self {
        Self { cost, vertices }
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// The first vertex of the path.
    pub fn source(&self) -> Option<&V> {
        self.vertices.first()
    }

    /// The last vertex of the path.
    pub fn target(&self) -> Option<&V> {
        self.vertices.last()
    }

    /// Split into `(cost, vertices)`.
    pub fn into_parts(self) -> (W, Vec<V>) {
        (self.cost, self.vertices)
    }
}
