//! pathgraph — shortest paths over a directed, weighted adjacency-list graph.
//!
//! A [`Graph`] maps each vertex to its outgoing `(weight, neighbor)` pairs.
//! Three interchangeable algorithms answer shortest-path queries against it:
//! Dijkstra (non-negative weights), Bellman-Ford (negative weights, with
//! negative-cycle detection) and A* (pluggable heuristic). Every failure is a
//! typed [`PathError`], never a partial path.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    astar, bellman_ford, compare_algorithms, dijkstra, Algorithm, ComparisonReport, Heuristic,
    PathParams, QueryEngine, ZeroHeuristic,
};
pub use format::{adjacency_from_form, parse_form_body, AdjacencyReader, AdjacencyWriter};
pub use graph::{Graph, GraphBuilder};
pub use types::{
    PathError, PathResult, ShortestPath, Vertex, Weight, DEFAULT_COMPARE_ITERATIONS,
};
