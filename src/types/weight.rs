//! Numeric edge weights and vertex identifiers.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::Add;

/// A signed numeric edge weight.
///
/// Bellman-Ford accepts negative weights. Dijkstra and A* assume every weight
/// is non-negative and return incorrect costs otherwise; this is not checked.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + Debug + Display {
    /// The additive identity, used as the cost of the source vertex.
    fn zero() -> Self;

    /// `self + rhs`, or `None` if the sum does not fit the type.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Total order used by the priority queues. Incomparable values (NaN) compare equal.
    fn total_cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

macro_rules! impl_weight_int {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

impl_weight_int!(i8, i16, i32, i64, i128, isize);

impl Weight for f32 {
    fn zero() -> Self {
        0.0
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }
}

impl Weight for f64 {
    fn zero() -> Self {
        0.0
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}

/// An opaque vertex identifier.
///
/// Ordering gives deterministic iteration and frontier tie-breaks. Display is
/// used when a vertex is named in an error.
pub trait Vertex: Clone + Eq + Hash + Ord + Debug + Display {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Ord + Debug + Display {}
