//! JSON adjacency files: `{"A": [[weight, "B"], ...], "B": []}`.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::graph::Graph;
use crate::types::{PathResult, Weight};

/// The graph type stored in adjacency files.
pub type FileGraph = Graph<String, i64>;

/// Reader for JSON adjacency files.
pub struct AdjacencyReader;

impl AdjacencyReader {
    /// Read a JSON adjacency file into a Graph.
    pub fn read_from_file<W>(path: &Path) -> PathResult<Graph<String, W>>
    where
        W: Weight + DeserializeOwned,
    {
        let data = std::fs::read_to_string(path)?;
        let graph = Self::read_from_str(&data)?;
        log::debug!(
            "read {} vertices, {} edges from {}",
            graph.vertex_count(),
            graph.edge_count(),
            path.display()
        );
        Ok(graph)
    }

    /// Parse a JSON adjacency document.
    pub fn read_from_str<W>(data: &str) -> PathResult<Graph<String, W>>
    where
        W: Weight + DeserializeOwned,
    {
        let adjacency: BTreeMap<String, Vec<(W, String)>> = serde_json::from_str(data)?;
        Ok(Graph::new(adjacency))
    }

    /// Read from any reader into a Graph.
    pub fn read_from<W>(reader: &mut impl Read) -> PathResult<Graph<String, W>>
    where
        W: Weight + DeserializeOwned,
    {
        let adjacency: BTreeMap<String, Vec<(W, String)>> = serde_json::from_reader(reader)?;
        Ok(Graph::new(adjacency))
    }
}

/// Writer for JSON adjacency files.
pub struct AdjacencyWriter {
    pretty: bool,
}

impl AdjacencyWriter {
    /// Create a writer producing indented JSON.
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a writer producing single-line JSON.
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Serialize a graph to a JSON string.
    pub fn to_json_string<W>(&self, graph: &Graph<String, W>) -> PathResult<String>
    where
        W: Weight + Serialize,
    {
        let json = if self.pretty {
            serde_json::to_string_pretty(graph.adjacency())?
        } else {
            serde_json::to_string(graph.adjacency())?
        };
        Ok(json)
    }

    /// Write a graph to a file, replacing any existing content.
    pub fn write_to_file<W>(&self, graph: &Graph<String, W>, path: &Path) -> PathResult<()>
    where
        W: Weight + Serialize,
    {
        let json = self.to_json_string(graph)?;
        std::fs::write(path, json)?;
        log::debug!("wrote {} vertices to {}", graph.vertex_count(), path.display());
        Ok(())
    }
}

impl Default for AdjacencyWriter {
    fn default() -> Self {
        Self::new()
    }
}
