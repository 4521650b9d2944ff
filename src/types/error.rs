//! Error types for the pathgraph library.

use thiserror::Error;

/// All errors that can occur in the pathgraph library.
#[derive(Error, Debug)]
pub enum PathError {
    /// A query endpoint, or a neighbor reached during a query, has no entry in the graph.
    #[error("Vertex {0} not found in graph")]
    UnknownVertex(String),

    /// The target cannot be reached from the source.
    #[error("No path found from {from} to {to}")]
    NoPathFound { from: String, to: String },

    /// A negative-weight cycle is reachable from the source.
    #[error("Graph contains a negative-weight cycle reachable from the source")]
    NegativeCycle,

    /// A weight value could not be parsed.
    #[error("Invalid weight: {0:?}")]
    InvalidWeight(String),

    /// A caller-supplied argument is out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON adjacency data.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PathError {
    pub(crate) fn unknown(vertex: &impl std::fmt::Display) -> Self {
        Self::UnknownVertex(vertex.to_string())
    }

    pub(crate) fn no_path(from: &impl std::fmt::Display, to: &impl std::fmt::Display) -> Self {
        Self::NoPathFound {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Convenience result type for pathgraph operations.
pub type PathResult<T> = Result<T, PathError>;
