//! In-memory graph — the core data structure.

pub mod builder;
pub mod weighted_graph;

pub use builder::GraphBuilder;
pub use weighted_graph::Graph;
