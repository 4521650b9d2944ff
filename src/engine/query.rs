//! Query executor — dispatches a shortest-path query to one algorithm.

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{PathResult, ShortestPath, Vertex, Weight};

use super::{astar, bellman_ford, dijkstra, ZeroHeuristic};

/// Which shortest-path algorithm answers a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Priority-queue search; non-negative weights only.
    Dijkstra,
    /// Repeated edge relaxation; negative weights allowed, negative cycles reported.
    BellmanFord,
    /// Heuristic-guided search using [`ZeroHeuristic`].
    AStar,
}

impl Algorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [Algorithm; 3] = [Self::Dijkstra, Self::BellmanFord, Self::AStar];

    /// Return a human-readable name for this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::BellmanFord => "bellman-ford",
            Self::AStar => "astar",
        }
    }

    /// Parse an algorithm from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dijkstra" => Some(Self::Dijkstra),
            "bellman-ford" | "bellman_ford" | "bellmanford" => Some(Self::BellmanFord),
            "astar" | "a-star" | "a*" => Some(Self::AStar),
            _ => None,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters for a shortest-path query.
pub struct PathParams<V> {
    /// Vertex the path starts at.
    pub source: V,
    /// Vertex the path ends at.
    pub target: V,
    /// Algorithm to run.
    pub algorithm: Algorithm,
}

/// The query engine runs shortest-path queries against a graph.
pub struct QueryEngine;

impl QueryEngine {
    /// Create a new query engine.
    pub fn new() -> Self {
        Self
    }

    /// Run one shortest-path query.
    pub fn shortest_path<V: Vertex, W: Weight>(
        &self,
        graph: &Graph<V, W>,
        params: PathParams<V>,
    ) -> PathResult<ShortestPath<V, W>> {
        let PathParams {
            source,
            target,
            algorithm,
        } = params;

        log::debug!("{} query {} -> {}", algorithm, source, target);

        let result = match algorithm {
            Algorithm::Dijkstra => dijkstra(graph, &source, &target),
            Algorithm::BellmanFord => bellman_ford(graph, &source, &target),
            Algorithm::AStar => astar(graph, &source, &target, &ZeroHeuristic),
        };

        match &result {
            Ok(path) => log::debug!(
                "{} found cost {} over {} hops",
                algorithm,
                path.cost,
                path.hops()
            ),
            Err(e) => log::debug!("{} failed: {}", algorithm, e),
        }
        result
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}
