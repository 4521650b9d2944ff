//! Dijkstra's algorithm for graphs with non-negative weights.

use std::collections::{BinaryHeap, HashMap};

use crate::graph::Graph;
use crate::types::{PathError, PathResult, ShortestPath, Vertex, Weight};

use super::frontier::{reconstruct_path, FrontierEntry};
use super::{ensure_endpoints, extend_cost};

/// Find the cheapest path from `source` to `dest`.
///
/// Stops as soon as `dest` leaves the frontier, so vertices further away are
/// never expanded. Negative weights give undefined results.
///
/// # Errors
/// - [`PathError::UnknownVertex`] if an endpoint, or a neighbor reached on
///   the way, has no entry in the graph.
/// - [`PathError::NoPathFound`] if `dest` is unreachable.
/// - [`PathError::InvalidArgument`] if a path cost overflows the weight type.
pub fn dijkstra<V: Vertex, W: Weight>(
    graph: &Graph<V, W>,
    source: &V,
    dest: &V,
) -> PathResult<ShortestPath<V, W>> {
    ensure_endpoints(graph, source, dest)?;

    let mut frontier = BinaryHeap::new();
    let mut best_cost: HashMap<V, W> = HashMap::new();
    let mut predecessors: HashMap<V, V> = HashMap::new();

    best_cost.insert(source.clone(), W::zero());
    frontier.push(FrontierEntry::new(W::zero(), source.clone()));

    while let Some(FrontierEntry {
        score: cost,
        vertex: current,
    }) = frontier.pop()
    {
        if &current == dest {
            let vertices = reconstruct_path(&predecessors, source, dest)
                .ok_or_else(|| PathError::no_path(source, dest))?;
            return Ok(ShortestPath::new(cost, vertices));
        }

        // Superseded by a cheaper push of the same vertex.
        if best_cost.get(&current).is_some_and(|known| cost > *known) {
            continue;
        }

        let edges = graph
            .neighbors(&current)
            .ok_or_else(|| PathError::unknown(&current))?;

        for (weight, neighbor) in edges {
            let candidate = extend_cost(cost, *weight)?;
            let improves = match best_cost.get(neighbor) {
                Some(known) => candidate < *known,
                None => true,
            };
            if improves {
                best_cost.insert(neighbor.clone(), candidate);
                predecessors.insert(neighbor.clone(), current.clone());
                frontier.push(FrontierEntry::new(candidate, neighbor.clone()));
            }
        }
    }

    Err(PathError::no_path(source, dest))
}
