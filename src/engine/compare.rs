//! Timing comparison of Dijkstra against Bellman-Ford on one query.

use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{PathError, PathResult, Vertex, Weight};

use super::{bellman_ford, dijkstra};

/// Wall-clock totals from [`compare_algorithms`].
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport<W> {
    /// Runs per algorithm.
    pub iterations: usize,
    /// Total time spent in Dijkstra.
    pub dijkstra_time: Duration,
    /// Total time spent in Bellman-Ford.
    pub bellman_ford_time: Duration,
    /// Cost found by Dijkstra.
    pub dijkstra_cost: W,
    /// Cost found by Bellman-Ford.
    pub bellman_ford_cost: W,
}

impl<W> ComparisonReport<W> {
    /// Bellman-Ford time divided by Dijkstra time. Infinite if Dijkstra took no measurable time.
    pub fn ratio(&self) -> f64 {
        let dijkstra = self.dijkstra_time.as_secs_f64();
        if dijkstra == 0.0 {
            return f64::INFINITY;
        }
        self.bellman_ford_time.as_secs_f64() / dijkstra
    }
}

/// Run the same query `iterations` times with each algorithm and total the time spent.
///
/// Any query failure aborts the comparison.
pub fn compare_algorithms<V: Vertex, W: Weight>(
    graph: &Graph<V, W>,
    source: &V,
    target: &V,
    iterations: usize,
) -> PathResult<ComparisonReport<W>> {
    if iterations == 0 {
        return Err(PathError::InvalidArgument(
            "iterations must be at least 1".to_string(),
        ));
    }

    let dijkstra_cost = dijkstra(graph, source, target)?.cost;
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(dijkstra(graph, black_box(source), black_box(target))?);
    }
    let dijkstra_time = start.elapsed();

    let bellman_ford_cost = bellman_ford(graph, source, target)?.cost;
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(bellman_ford(graph, black_box(source), black_box(target))?);
    }
    let bellman_ford_time = start.elapsed();

    log::info!(
        "{} runs {} -> {}: dijkstra {:?}, bellman-ford {:?}",
        iterations,
        source,
        target,
        dijkstra_time,
        bellman_ford_time
    );

    Ok(ComparisonReport {
        iterations,
        dijkstra_time,
        bellman_ford_time,
        dijkstra_cost,
        bellman_ford_cost,
    })
}
