//! A* search.

use std::collections::{BinaryHeap, HashMap};

use crate::graph::Graph;
use crate::types::{PathError, PathResult, ShortestPath, Vertex, Weight};

use super::frontier::{reconstruct_path, FrontierEntry};
use super::heuristic::Heuristic;
use super::{ensure_endpoints, extend_cost};

/// Find a path from `source` to `target`, ranking the frontier by
/// `g + h` where `g` is the cost so far and `h` the heuristic estimate.
///
/// With [`ZeroHeuristic`](super::ZeroHeuristic) this is Dijkstra. The result
/// is optimal only for admissible heuristics and non-negative weights.
///
/// # Errors
/// - [`PathError::UnknownVertex`] if an endpoint, or a neighbor reached on
///   the way, has no entry in the graph.
/// - [`PathError::NoPathFound`] if the frontier empties before `target` is reached.
/// - [`PathError::InvalidArgument`] if `g` or `g + h` overflows the weight type.
pub fn astar<V, W, H>(
    graph: &Graph<V, W>,
    source: &V,
    target: &V,
    heuristic: &H,
) -> PathResult<ShortestPath<V, W>>
where
    V: Vertex,
    W: Weight,
    H: Heuristic<V, W> + ?Sized,
{
    ensure_endpoints(graph, source, target)?;

    // Absent = +infinity.
    let mut g_score: HashMap<V, W> = HashMap::new();
    let mut f_score: HashMap<V, W> = HashMap::new();
    let mut came_from: HashMap<V, V> = HashMap::new();
    let mut open_set = BinaryHeap::new();

    let source_f = heuristic.estimate(source, target);
    g_score.insert(source.clone(), W::zero());
    f_score.insert(source.clone(), source_f);
    open_set.push(FrontierEntry::new(source_f, source.clone()));

    while let Some(FrontierEntry {
        score,
        vertex: current,
    }) = open_set.pop()
    {
        let Some(&current_g) = g_score.get(&current) else {
            continue;
        };

        if &current == target {
            let vertices = reconstruct_path(&came_from, source, target)
                .ok_or_else(|| PathError::no_path(source, target))?;
            return Ok(ShortestPath::new(current_g, vertices));
        }

        if f_score.get(&current).is_some_and(|best| score > *best) {
            continue;
        }

        let edges = graph
            .neighbors(&current)
            .ok_or_else(|| PathError::unknown(&current))?;

        for (weight, neighbor) in edges {
            let tentative_g = extend_cost(current_g, *weight)?;
            if g_score.get(neighbor).map_or(true, |known| tentative_g < *known) {
                let f = extend_cost(tentative_g, heuristic.estimate(neighbor, target))?;
                came_from.insert(neighbor.clone(), current.clone());
                g_score.insert(neighbor.clone(), tentative_g);
                f_score.insert(neighbor.clone(), f);
                open_set.push(FrontierEntry::new(f, neighbor.clone()));
            }
        }
    }

    Err(PathError::no_path(source, target))
}
