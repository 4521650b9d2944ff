//! Bellman-Ford: negative weights allowed, negative cycles detected.

use std::collections::HashMap;

use crate::graph::Graph;
use crate::types::{PathError, PathResult, ShortestPath, Vertex, Weight};

use super::frontier::reconstruct_path;
use super::{ensure_endpoints, extend_cost};

/// Find the cheapest path from `source` to `target`, tolerating negative
/// edge weights.
///
/// Relaxes every edge `|V| - 1` times (fewer if a pass changes nothing), then
/// makes one more pass; any edge that still relaxes proves a negative cycle
/// reachable from `source`. Runs in O(V·E).
///
/// # Errors
/// - [`PathError::UnknownVertex`] if an endpoint is absent or any edge names
///   a neighbor with no entry.
/// - [`PathError::NegativeCycle`] if a negative cycle is reachable from `source`,
///   including when repeated descent around it underflows an integer weight type.
/// - [`PathError::InvalidArgument`] if a path cost overflows the weight type upward.
/// - [`PathError::NoPathFound`] if `target` is unreachable.
pub fn bellman_ford<V: Vertex, W: Weight>(
    graph: &Graph<V, W>,
    source: &V,
    target: &V,
) -> PathResult<ShortestPath<V, W>> {
    ensure_endpoints(graph, source, target)?;
    graph.validate()?;

    // Absent = +infinity.
    let mut distance: HashMap<V, W> = HashMap::new();
    let mut predecessors: HashMap<V, V> = HashMap::new();
    distance.insert(source.clone(), W::zero());

    let passes = graph.vertex_count().saturating_sub(1);
    for pass in 0..passes {
        let mut changed = false;
        for (from, weight, to) in graph.edges() {
            let Some(&from_distance) = distance.get(from) else {
                continue;
            };
            let candidate = relaxed_distance(from_distance, weight)?;
            if distance.get(to).map_or(true, |known| candidate < *known) {
                distance.insert(to.clone(), candidate);
                predecessors.insert(to.clone(), from.clone());
                changed = true;
            }
        }
        if !changed {
            log::trace!("bellman-ford converged after {} of {} passes", pass + 1, passes);
            break;
        }
    }

    for (from, weight, to) in graph.edges() {
        let Some(&from_distance) = distance.get(from) else {
            continue;
        };
        let candidate = relaxed_distance(from_distance, weight)?;
        if distance.get(to).map_or(true, |known| candidate < *known) {
            log::debug!("negative cycle detected through edge {} -> {}", from, to);
            return Err(PathError::NegativeCycle);
        }
    }

    let cost = *distance
        .get(target)
        .ok_or_else(|| PathError::no_path(source, target))?;
    let vertices = reconstruct_path(&predecessors, source, target)
        .ok_or_else(|| PathError::no_path(source, target))?;

    Ok(ShortestPath::new(cost, vertices))
}

/// Distance through one more edge. Falling below the weight type's minimum
/// only happens while descending around a negative cycle.
fn relaxed_distance<W: Weight>(from_distance: W, weight: W) -> PathResult<W> {
    if weight < W::zero() && from_distance.checked_add(weight).is_none() {
        log::debug!("distance underflow at {} + {}", from_distance, weight);
        return Err(PathError::NegativeCycle);
    }
    extend_cost(from_distance, weight)
}
