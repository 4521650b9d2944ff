//! All data types for the pathgraph library.

pub mod error;
pub mod path;
pub mod weight;

pub use error::{PathError, PathResult};
pub use path::ShortestPath;
pub use weight::{Vertex, Weight};

/// Default number of runs per algorithm in `engine::compare_algorithms`.
pub const DEFAULT_COMPARE_ITERATIONS: usize = 10_000;
