//! CLI command implementations.

use std::path::Path;

use crate::engine::{compare_algorithms, Algorithm, PathParams, QueryEngine};
use crate::format::{
    adjacency_from_form, parse_form_body, AdjacencyReader, AdjacencyWriter, FileGraph,
};
use crate::types::{PathError, PathResult};

fn read_graph(path: &Path) -> PathResult<FileGraph> {
    AdjacencyReader::read_from_file(path)
}

/// Display vertex and edge counts and check for dangling neighbors.
pub fn cmd_info(path: &Path, json: bool) -> PathResult<()> {
    let graph = read_graph(path)?;
    let dangling = graph.validate().err().map(|e| e.to_string());

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "valid": dangling.is_none(),
            "problem": dangling,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        match dangling {
            Some(problem) => println!("Problem: {}", problem),
            None => println!("All neighbors resolved"),
        }
    }
    Ok(())
}

/// Run a shortest-path query.
pub fn cmd_path(
    path: &Path,
    source: &str,
    target: &str,
    algorithm: Algorithm,
    json: bool,
) -> PathResult<()> {
    let graph = read_graph(path)?;
    let query_engine = QueryEngine::new();

    let result = query_engine.shortest_path(
        &graph,
        PathParams {
            source: source.to_string(),
            target: target.to_string(),
            algorithm,
        },
    )?;

    if json {
        let info = serde_json::json!({
            "algorithm": algorithm.name(),
            "cost": result.cost,
            "path": result.vertices,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Algorithm: {}", algorithm.name());
        println!("Cost: {}", result.cost);
        println!("Path: {}", result.vertices.join(" -> "));
    }
    Ok(())
}

/// Time Dijkstra against Bellman-Ford on one query.
pub fn cmd_compare(
    path: &Path,
    source: &str,
    target: &str,
    iterations: usize,
    json: bool,
) -> PathResult<()> {
    let graph = read_graph(path)?;
    let report = compare_algorithms(&graph, &source.to_string(), &target.to_string(), iterations)?;

    if json {
        let info = serde_json::json!({
            "iterations": report.iterations,
            "dijkstra_secs": report.dijkstra_time.as_secs_f64(),
            "bellman_ford_secs": report.bellman_ford_time.as_secs_f64(),
            "dijkstra_cost": report.dijkstra_cost,
            "bellman_ford_cost": report.bellman_ford_cost,
            "ratio": report.ratio(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Iterations: {}", report.iterations);
        println!(
            "Dijkstra: {:.6}s (cost {})",
            report.dijkstra_time.as_secs_f64(),
            report.dijkstra_cost
        );
        println!(
            "Bellman-Ford: {:.6}s (cost {})",
            report.bellman_ford_time.as_secs_f64(),
            report.bellman_ford_cost
        );
        println!("Bellman-Ford / Dijkstra: {:.2}x", report.ratio());
    }
    Ok(())
}

/// Add a vertex and rewrite the file.
pub fn cmd_add_vertex(path: &Path, vertex: &str, json: bool) -> PathResult<()> {
    let mut graph = read_graph(path)?;
    let added = graph.add_vertex(vertex.to_string());
    if added {
        AdjacencyWriter::new().write_to_file(&graph, path)?;
    }

    if json {
        println!("{}", serde_json::json!({"vertex": vertex, "added": added}));
    } else if added {
        println!("Added vertex {} to {}", vertex, path.display());
    } else {
        println!("Vertex {} already exists", vertex);
    }
    Ok(())
}

/// Add a directed edge between existing vertices and rewrite the file.
pub fn cmd_add_edge(path: &Path, from: &str, to: &str, weight: i64, json: bool) -> PathResult<()> {
    let mut graph = read_graph(path)?;
    if !graph.add_edge(from.to_string(), to.to_string(), weight) {
        let missing = if graph.contains_vertex(&from.to_string()) {
            to
        } else {
            from
        };
        return Err(PathError::UnknownVertex(missing.to_string()));
    }
    AdjacencyWriter::new().write_to_file(&graph, path)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"from": from, "to": to, "weight": weight})
        );
    } else {
        println!("Linked {} --{}--> {}", from, weight, to);
    }
    Ok(())
}

/// Convert a `vertexN` / `edgeN` / `weightN` form body into an adjacency file.
pub fn cmd_import_form(form_path: &Path, out_path: &Path, json: bool) -> PathResult<()> {
    let body = std::fs::read_to_string(form_path)?;
    let graph = adjacency_from_form(&parse_form_body(&body))?;
    AdjacencyWriter::new().write_to_file(&graph, out_path)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "file": out_path.display().to_string(),
                "vertices": graph.vertex_count(),
                "edges": graph.edge_count(),
            })
        );
    } else {
        println!(
            "Imported {} vertices, {} edges into {}",
            graph.vertex_count(),
            graph.edge_count(),
            out_path.display()
        );
    }
    Ok(())
}
