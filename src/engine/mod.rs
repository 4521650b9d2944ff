//! Shortest-path algorithms and the query engine.

pub mod astar;
pub mod bellman_ford;
pub mod compare;
pub mod dijkstra;
mod frontier;
pub mod heuristic;
pub mod query;

pub use astar::astar;
pub use bellman_ford::bellman_ford;
pub use compare::{compare_algorithms, ComparisonReport};
pub use dijkstra::dijkstra;
pub use heuristic::{Heuristic, ZeroHeuristic};
pub use query::{Algorithm, PathParams, QueryEngine};

use crate::graph::Graph;
use crate::types::{PathError, PathResult, Vertex, Weight};

fn ensure_endpoints<V: Vertex, W: Weight>(
    graph: &Graph<V, W>,
    source: &V,
    target: &V,
) -> PathResult<()> {
    for vertex in [source, target] {
        if !graph.contains_vertex(vertex) {
            return Err(PathError::unknown(vertex));
        }
    }
    Ok(())
}

/// `cost + weight`, failing instead of wrapping when the sum leaves the weight type's range.
fn extend_cost<W: Weight>(cost: W, weight: W) -> PathResult<W> {
    cost.checked_add(weight).ok_or_else(|| {
        PathError::InvalidArgument(format!(
            "path cost {} + {} overflows the weight type",
            cost, weight
        ))
    })
}
