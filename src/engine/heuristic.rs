//! Heuristics for A* search.

use crate::types::Weight;

/// An estimate of the remaining cost from `vertex` to `target`.
///
/// A* returns optimal paths only when the estimate never exceeds the true
/// remaining cost (admissible). Any `Fn(&V, &V) -> W` closure is a heuristic.
pub trait Heuristic<V, W> {
    /// Estimated cost from `vertex` to `target`.
    fn estimate(&self, vertex: &V, target: &V) -> W;
}

/// Always estimates zero.
///
/// Trivially admissible, but gives A* no guidance: the search expands
/// vertices in the same order as Dijkstra. Adjacency lists carry no
/// coordinates, so there is nothing better to derive a default from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl<V, W: Weight> Heuristic<V, W> for ZeroHeuristic {
    fn estimate(&self, _vertex: &V, _target: &V) -> W {
        W::zero()
    }
}

impl<V, W, F> Heuristic<V, W> for F
where
    F: Fn(&V, &V) -> W,
{
    fn estimate(&self, vertex: &V, target: &V) -> W {
        self(vertex, target)
    }
}
