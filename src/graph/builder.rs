//! Fluent API for building Graph instances.

use std::collections::BTreeMap;

use crate::types::{Vertex, Weight};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Unlike [`Graph::add_edge`], `edge` creates missing endpoints so a graph
/// can be described edge by edge.
pub struct GraphBuilder<V, W> {
    adjacency: BTreeMap<V, Vec<(W, V)>>,
}

impl<V: Vertex, W: Weight> GraphBuilder<V, W> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }

    /// Add a vertex with no edges (no-op if present).
    pub fn vertex(&mut self, vertex: impl Into<V>) -> &mut Self {
        self.adjacency.entry(vertex.into()).or_default();
        self
    }

    /// Add a directed edge, creating either endpoint as needed.
    pub fn edge(&mut self, from: impl Into<V>, to: impl Into<V>, weight: W) -> &mut Self {
        let to = to.into();
        self.adjacency.entry(to.clone()).or_default();
        self.adjacency
            .entry(from.into())
            .or_default()
            .push((weight, to));
        self
    }

    /// Add `from -> to` and `to -> from` with the same weight.
    pub fn undirected_edge(
        &mut self,
        a: impl Into<V>,
        b: impl Into<V>,
        weight: W,
    ) -> &mut Self {
        let a = a.into();
        let b = b.into();
        self.edge(a.clone(), b.clone(), weight);
        self.edge(b, a, weight)
    }

    /// Build the final Graph.
    pub fn build(&mut self) -> Graph<V, W> {
        Graph::new(std::mem::take(&mut self.adjacency))
    }
}

impl<V: Vertex, W: Weight> Default for GraphBuilder<V, W> {
    fn default() -> Self {
        Self::new()
    }
}
