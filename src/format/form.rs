//! Builds adjacency lists from grouped form fields.
//!
//! A form describes vertex N with one `vertexN` field plus any number of
//! paired `edgeN` / `weightN` fields. Pairs are matched by position and a pair
//! whose weight is blank is dropped, so unused rows in a form cost nothing.

use std::collections::BTreeMap;

use crate::graph::Graph;
use crate::types::{PathError, PathResult};

#[derive(Default)]
struct FieldGroup {
    vertex: Option<String>,
    edges: Vec<String>,
    weights: Vec<String>,
}

enum FieldKind {
    Vertex,
    Edge,
    Weight,
}

fn classify(key: &str) -> Option<(FieldKind, usize)> {
    let (kind, index) = if let Some(rest) = key.strip_prefix("vertex") {
        (FieldKind::Vertex, rest)
    } else if let Some(rest) = key.strip_prefix("weight") {
        (FieldKind::Weight, rest)
    } else if let Some(rest) = key.strip_prefix("edge") {
        (FieldKind::Edge, rest)
    } else {
        return None;
    };
    index.parse().ok().map(|n| (kind, n))
}

/// Split a `key=value&key=value` body (or one pair per line) into fields.
///
/// Values are taken literally; no percent-decoding is done.
pub fn parse_form_body(body: &str) -> Vec<(String, String)> {
    body.split(['&', '\n'])
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.trim().to_string(), value.trim().to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

/// Build a graph from `vertexN` / `edgeN` / `weightN` fields.
///
/// Groups without a `vertexN` field are ignored. Field order within a group
/// is preserved. Neighbors are not checked to exist.
///
/// # Errors
/// [`PathError::InvalidWeight`] if a non-blank weight is not an integer.
pub fn adjacency_from_form(fields: &[(String, String)]) -> PathResult<Graph<String, i64>> {
    let mut groups: BTreeMap<usize, FieldGroup> = BTreeMap::new();

    for (key, value) in fields {
        let Some((kind, index)) = classify(key) else {
            log::trace!("ignoring form field {:?}", key);
            continue;
        };
        let group = groups.entry(index).or_default();
        match kind {
            FieldKind::Vertex => group.vertex = Some(value.clone()),
            FieldKind::Edge => group.edges.push(value.clone()),
            FieldKind::Weight => group.weights.push(value.clone()),
        }
    }

    let mut adjacency = BTreeMap::new();
    for (index, group) in groups {
        let Some(vertex) = group.vertex else {
            log::warn!("form group {} has edges but no vertex{} field", index, index);
            continue;
        };
        let mut out = Vec::new();
        for (weight, edge) in group.weights.iter().zip(group.edges) {
            let weight = weight.trim();
            if weight.is_empty() {
                continue;
            }
            let weight: i64 = weight
                .parse()
                .map_err(|_| PathError::InvalidWeight(weight.to_string()))?;
            out.push((weight, edge));
        }
        adjacency.insert(vertex, out);
    }

    Ok(Graph::new(adjacency))
}
