//! CLI entry point for the `pgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use pathgraph::cli::commands;
use pathgraph::engine::Algorithm;
use pathgraph::types::DEFAULT_COMPARE_ITERATIONS;
use pathgraph::PathError;

#[derive(Parser)]
#[command(
    name = "pgraph",
    about = "pgraph — shortest paths over weighted adjacency-list graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display vertex and edge counts of an adjacency file
    Info {
        /// Path to the JSON adjacency file
        file: PathBuf,
    },
    /// Find the shortest path between two vertices
    Path {
        /// Path to the JSON adjacency file
        file: PathBuf,
        /// Source vertex
        source: String,
        /// Target vertex
        target: String,
        /// Algorithm: dijkstra, bellman-ford, or astar
        #[arg(long, default_value = "dijkstra")]
        algorithm: String,
    },
    /// Time Dijkstra against Bellman-Ford on one query
    Compare {
        /// Path to the JSON adjacency file
        file: PathBuf,
        /// Source vertex
        source: String,
        /// Target vertex
        target: String,
        /// Runs per algorithm
        #[arg(long, default_value_t = DEFAULT_COMPARE_ITERATIONS)]
        iterations: usize,
    },
    /// Add a vertex with no outgoing edges
    AddVertex {
        /// Path to the JSON adjacency file
        file: PathBuf,
        /// Vertex name
        vertex: String,
    },
    /// Add a directed edge between two existing vertices
    AddEdge {
        /// Path to the JSON adjacency file
        file: PathBuf,
        /// Source vertex
        from: String,
        /// Target vertex
        to: String,
        /// Edge weight (may be negative)
        #[arg(allow_negative_numbers = true)]
        weight: i64,
    },
    /// Convert a vertexN/edgeN/weightN form body into an adjacency file
    ImportForm {
        /// Path to the form body (key=value pairs separated by & or newlines)
        form_file: PathBuf,
        /// Path of the JSON adjacency file to write
        out_file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Path {
            file,
            source,
            target,
            algorithm,
        } => {
            let algo = match Algorithm::from_name(&algorithm) {
                Some(algo) => algo,
                None => {
                    eprintln!("Invalid algorithm: {}", algorithm);
                    process::exit(2);
                }
            };
            commands::cmd_path(&file, &source, &target, algo, json)
        }
        Commands::Compare {
            file,
            source,
            target,
            iterations,
        } => commands::cmd_compare(&file, &source, &target, iterations, json),
        Commands::AddVertex { file, vertex } => commands::cmd_add_vertex(&file, &vertex, json),
        Commands::AddEdge {
            file,
            from,
            to,
            weight,
        } => commands::cmd_add_edge(&file, &from, &to, weight, json),
        Commands::ImportForm {
            form_file,
            out_file,
        } => commands::cmd_import_form(&form_file, &out_file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            PathError::Io(_) => 1,
            PathError::Json(_) | PathError::InvalidWeight(_) | PathError::InvalidArgument(_) => 2,
            PathError::UnknownVertex(_) => 4,
            PathError::NoPathFound { .. } => 5,
            PathError::NegativeCycle => 6,
        };
        process::exit(code);
    }
}
