//! Priority-queue plumbing shared by Dijkstra and A*.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::types::{Vertex, Weight};

/// A frontier entry ordered so that `BinaryHeap` pops the lowest score first.
/// Equal scores pop the smaller vertex first.
#[derive(Debug, Clone)]
pub(crate) struct FrontierEntry<V, W> {
    pub score: W,
    pub vertex: V,
}

impl<V, W> FrontierEntry<V, W> {
    pub fn new(score: W, vertex: V) -> Self {
        Self { score, vertex }
    }
}

impl<V: Vertex, W: Weight> Ord for FrontierEntry<V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl<V: Vertex, W: Weight> PartialOrd for FrontierEntry<V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Vertex, W: Weight> PartialEq for FrontierEntry<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Vertex, W: Weight> Eq for FrontierEntry<V, W> {}

/// Walk `predecessors` back from `target` to `source` and return the path in
/// source-to-target order. `None` if the chain breaks before reaching `source`.
pub(crate) fn reconstruct_path<V: Vertex>(
    predecessors: &HashMap<V, V>,
    source: &V,
    target: &V,
) -> Option<Vec<V>> {
    let mut path = vec![target.clone()];
    let mut current = target;
    while current != source {
        // A chain longer than the map has looped.
        if path.len() > predecessors.len() + 1 {
            return None;
        }
        current = predecessors.get(current)?;
        path.push(current.clone());
    }
    path.reverse();
    Some(path)
}
