//! Phase 2 tests: Dijkstra, Bellman-Ford, A* + query engine.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pathgraph::engine::{
    astar, bellman_ford, compare_algorithms, dijkstra, Algorithm, PathParams, QueryEngine,
    ZeroHeuristic,
};
use pathgraph::graph::{Graph, GraphBuilder};
use pathgraph::types::error::PathError;
use pathgraph::types::ShortestPath;

// ==================== Helper ====================

fn europe() -> Graph<String, i64> {
    GraphBuilder::<String, i64>::new()
        .edge("France", "Italy", 200)
        .edge("France", "Ireland", 400)
        .edge("Italy", "France", 200)
        .edge("Italy", "England", 400)
        .edge("Ireland", "France", 400)
        .edge("Ireland", "England", 100)
        .build()
}

fn s(v: &str) -> String {
    v.to_string()
}

fn path_of(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// Random graph over `0..n` with non-negative weights.
fn random_graph(rng: &mut StdRng, n: u32, edges: usize) -> Graph<u32, i64> {
    let mut builder = GraphBuilder::<u32, i64>::new();
    for v in 0..n {
        builder.vertex(v);
    }
    for _ in 0..edges {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        builder.edge(from, to, rng.gen_range(0..50));
    }
    builder.build()
}

fn path_cost(graph: &Graph<u32, i64>, path: &[u32]) -> i64 {
    path.windows(2)
        .map(|pair| {
            graph
                .neighbors(&pair[0])
                .unwrap()
                .iter()
                .filter(|(_, to)| *to == pair[1])
                .map(|(w, _)| *w)
                .min()
                .unwrap()
        })
        .sum()
}

// ==================== Dijkstra Tests ====================

#[test]
fn test_dijkstra_europe() {
    let graph = europe();
    let result = dijkstra(&graph, &s("France"), &s("England")).unwrap();
    assert_eq!(result.cost, 500);
    assert_eq!(result.vertices, path_of(&["France", "Ireland", "England"]));
    assert_eq!(result.hops(), 2);
}

#[test]
fn test_dijkstra_after_mutation() {
    let mut graph = europe();
    assert!(graph.add_vertex(s("Z")));
    assert!(graph.add_edge(s("Z"), s("Ireland"), 100));
    assert!(graph.add_edge(s("France"), s("Z"), 50));

    let result = graph.dijkstra(&s("France"), &s("England")).unwrap();
    assert_eq!(result.cost, 250);
    assert_eq!(result.vertices, path_of(&["France", "Z", "Ireland", "England"]));
}

#[test]
fn test_dijkstra_source_is_target() {
    let graph = europe();
    let result = dijkstra(&graph, &s("Italy"), &s("Italy")).unwrap();
    assert_eq!(result, ShortestPath::new(0, vec![s("Italy")]));
}

#[test]
fn test_dijkstra_unknown_endpoints() {
    let graph = europe();
    assert!(matches!(
        dijkstra(&graph, &s("Spain"), &s("England")),
        Err(PathError::UnknownVertex(v)) if v == "Spain"
    ));
    assert!(matches!(
        dijkstra(&graph, &s("France"), &s("Spain")),
        Err(PathError::UnknownVertex(v)) if v == "Spain"
    ));
}

#[test]
fn test_dijkstra_unreachable() {
    let graph = europe();
    match dijkstra(&graph, &s("England"), &s("France")) {
        Err(PathError::NoPathFound { from, to }) => {
            assert_eq!(from, "England");
            assert_eq!(to, "France");
        }
        other => panic!("expected NoPathFound, got {:?}", other),
    }
}

#[test]
fn test_dijkstra_dangling_neighbor() {
    let mut builder = GraphBuilder::<&str, i32>::new();
    builder.edge("A", "B", 1).edge("B", "C", 1);
    let mut adjacency = builder.build().into_adjacency();
    adjacency.get_mut("B").unwrap().push((1, "Ghost"));
    let graph = Graph::new(adjacency);

    // Ghost ties with C at cost 2 and C pops first, so Ghost is never expanded.
    assert_eq!(dijkstra(&graph, &"A", &"C").unwrap().cost, 2);

    // Ghost is strictly closer than D, so it gets expanded.
    let mut adjacency = graph.into_adjacency();
    adjacency.get_mut("C").unwrap().push((5, "D"));
    adjacency.insert("D", vec![]);
    let graph = Graph::new(adjacency);
    assert!(matches!(
        dijkstra(&graph, &"A", &"D"),
        Err(PathError::UnknownVertex(v)) if v == "Ghost"
    ));
}

#[test]
fn test_dijkstra_parallel_edges_take_cheapest() {
    let graph = GraphBuilder::<&str, i32>::new()
        .edge("A", "B", 10)
        .edge("A", "B", 3)
        .build();
    assert_eq!(dijkstra(&graph, &"A", &"B").unwrap().cost, 3);
}

#[test]
fn test_dijkstra_float_weights() {
    let graph = GraphBuilder::<&str, f64>::new()
        .edge("A", "B", 0.5)
        .edge("B", "C", 0.25)
        .edge("A", "C", 1.0)
        .build();
    let result = dijkstra(&graph, &"A", &"C").unwrap();
    assert!((result.cost - 0.75).abs() < 1e-12);
    assert_eq!(result.vertices, vec!["A", "B", "C"]);
}

#[test]
fn test_dijkstra_idempotent() {
    let graph = europe();
    let first = dijkstra(&graph, &s("France"), &s("England")).unwrap();
    let second = dijkstra(&graph, &s("France"), &s("England")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_dijkstra_cost_overflow_is_an_error() {
    let graph = GraphBuilder::<&str, i8>::new()
        .edge("A", "B", 100)
        .edge("B", "C", 100)
        .build();
    assert!(matches!(
        dijkstra(&graph, &"A", &"C"),
        Err(PathError::InvalidArgument(_))
    ));
    assert_eq!(dijkstra(&graph, &"A", &"B").unwrap().cost, 100);
}

// ==================== Bellman-Ford Tests ====================

#[test]
fn test_bellman_ford_europe() {
    let graph = europe();
    let result = bellman_ford(&graph, &s("France"), &s("England")).unwrap();
    assert_eq!(result.cost, 500);
    assert_eq!(result.vertices, path_of(&["France", "Ireland", "England"]));
    assert_eq!(result, dijkstra(&graph, &s("France"), &s("England")).unwrap());
}

#[test]
fn test_bellman_ford_negative_edge() {
    let graph = GraphBuilder::<&str, i32>::new()
        .edge("S", "A", 4)
        .edge("S", "B", 5)
        .edge("B", "A", -3)
        .edge("A", "T", 1)
        .build();
    let result = bellman_ford(&graph, &"S", &"T").unwrap();
    assert_eq!(result.cost, 3);
    assert_eq!(result.vertices, vec!["S", "B", "A", "T"]);
}

#[test]
fn test_bellman_ford_negative_cycle() {
    let graph = GraphBuilder::<&str, i32>::new()
        .edge("S", "A", 1)
        .edge("A", "B", -2)
        .edge("B", "A", 1)
        .edge("B", "T", 1)
        .build();
    assert!(matches!(
        bellman_ford(&graph, &"S", &"T"),
        Err(PathError::NegativeCycle)
    ));
}

#[test]
fn test_bellman_ford_negative_self_loop() {
    let graph = GraphBuilder::<&str, i32>::new().edge("S", "S", -1).build();
    assert!(matches!(
        bellman_ford(&graph, &"S", &"S"),
        Err(PathError::NegativeCycle)
    ));
}

#[test]
fn test_bellman_ford_negative_cycle_near_i32_limit() {
    let graph = GraphBuilder::<String, i32>::new()
        .edge("A", "B", -1_000_000_000)
        .edge("B", "A", -1_000_000_000)
        .vertex("C")
        .vertex("D")
        .build();
    assert!(matches!(
        bellman_ford(&graph, &s("A"), &s("B")),
        Err(PathError::NegativeCycle)
    ));
}

#[test]
fn test_bellman_ford_negative_cycle_near_i8_limit() {
    let graph = GraphBuilder::<String, i8>::new()
        .edge("A", "B", -50)
        .edge("B", "A", -50)
        .vertex("C")
        .vertex("D")
        .build();
    assert!(matches!(
        bellman_ford(&graph, &s("A"), &s("B")),
        Err(PathError::NegativeCycle)
    ));

    // One relaxation pass fits in i8; the detection pass underflows.
    let graph = GraphBuilder::<String, i8>::new()
        .edge("A", "B", -60)
        .edge("B", "A", -60)
        .build();
    assert!(matches!(
        bellman_ford(&graph, &s("A"), &s("B")),
        Err(PathError::NegativeCycle)
    ));
}

#[test]
fn test_bellman_ford_negative_path_at_i8_limit() {
    let graph = GraphBuilder::<&str, i8>::new()
        .edge("A", "B", -64)
        .edge("B", "C", -64)
        .build();
    let result = bellman_ford(&graph, &"A", &"C").unwrap();
    assert_eq!(result.cost, i8::MIN);
    assert_eq!(result.vertices, vec!["A", "B", "C"]);
}

#[test]
fn test_bellman_ford_idempotent() {
    let graph = europe();
    let first = bellman_ford(&graph, &s("France"), &s("England")).unwrap();
    let second = bellman_ford(&graph, &s("France"), &s("England")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_bellman_ford_ignores_unreachable_negative_cycle() {
    let graph = GraphBuilder::<&str, i32>::new()
        .edge("S", "T", 2)
        .edge("X", "Y", -5)
        .edge("Y", "X", 1)
        .build();
    let result = bellman_ford(&graph, &"S", &"T").unwrap();
    assert_eq!(result.cost, 2);
}

#[test]
fn test_bellman_ford_unreachable() {
    let graph = europe();
    assert!(matches!(
        bellman_ford(&graph, &s("England"), &s("Italy")),
        Err(PathError::NoPathFound { .. })
    ));
}

#[test]
fn test_bellman_ford_unknown_and_dangling() {
    let graph = europe();
    assert!(matches!(
        bellman_ford(&graph, &s("France"), &s("Spain")),
        Err(PathError::UnknownVertex(_))
    ));

    let mut adjacency = graph.into_adjacency();
    adjacency.get_mut("England").unwrap().push((1, s("Ghost")));
    let graph = Graph::new(adjacency);
    assert!(matches!(
        bellman_ford(&graph, &s("France"), &s("England")),
        Err(PathError::UnknownVertex(v)) if v == "Ghost"
    ));
}

// ==================== A* Tests ====================

#[test]
fn test_astar_zero_heuristic_matches_dijkstra() {
    let graph = europe();
    let result = astar(&graph, &s("France"), &s("England"), &ZeroHeuristic).unwrap();
    assert_eq!(result.cost, 500);
    assert_eq!(result.vertices, path_of(&["France", "Ireland", "England"]));
}

#[test]
fn test_astar_closure_heuristic() {
    // Vertices on a line; |target - v| never overestimates since every edge costs its span.
    let graph = GraphBuilder::<i32, i32>::new()
        .edge(0, 1, 1)
        .edge(1, 2, 1)
        .edge(2, 3, 1)
        .edge(0, 3, 5)
        .edge(0, -1, 1)
        .build();
    let heuristic = |v: &i32, t: &i32| (t - v).abs();
    let result = graph.astar(&0, &3, &heuristic).unwrap();
    assert_eq!(result.cost, 3);
    assert_eq!(result.vertices, vec![0, 1, 2, 3]);
}

#[test]
fn test_astar_unreachable() {
    let graph = europe();
    match astar(&graph, &s("England"), &s("France"), &ZeroHeuristic) {
        Err(PathError::NoPathFound { from, to }) => {
            assert_eq!(from, "England");
            assert_eq!(to, "France");
        }
        other => panic!("expected NoPathFound, got {:?}", other),
    }
}

#[test]
fn test_astar_idempotent() {
    let graph = europe();
    let first = astar(&graph, &s("France"), &s("England"), &ZeroHeuristic).unwrap();
    let second = astar(&graph, &s("France"), &s("England"), &ZeroHeuristic).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_astar_cost_overflow_is_an_error() {
    let graph = GraphBuilder::<&str, i8>::new()
        .edge("A", "B", 100)
        .edge("B", "C", 100)
        .build();
    assert!(matches!(
        astar(&graph, &"A", &"C", &ZeroHeuristic),
        Err(PathError::InvalidArgument(_))
    ));
}

#[test]
fn test_astar_unknown_vertex() {
    let graph = europe();
    assert!(matches!(
        astar(&graph, &s("Atlantis"), &s("France"), &ZeroHeuristic),
        Err(PathError::UnknownVertex(_))
    ));
}

// ==================== Cross-Algorithm Tests ====================

#[test]
fn test_algorithms_agree_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..30 {
        let graph = random_graph(&mut rng, 25, 80);
        for _ in 0..10 {
            let from = rng.gen_range(0..25);
            let to = rng.gen_range(0..25);
            let d = dijkstra(&graph, &from, &to);
            let b = bellman_ford(&graph, &from, &to);
            let a = astar(&graph, &from, &to, &ZeroHeuristic);
            match (d, b, a) {
                (Ok(d), Ok(b), Ok(a)) => {
                    assert_eq!(d.cost, b.cost);
                    assert_eq!(d.cost, a.cost);
                    assert_eq!(path_cost(&graph, &d.vertices), d.cost);
                    assert_eq!(path_cost(&graph, &b.vertices), b.cost);
                    assert_eq!(d.source(), Some(&from));
                    assert_eq!(b.target(), Some(&to));
                }
                (
                    Err(PathError::NoPathFound { .. }),
                    Err(PathError::NoPathFound { .. }),
                    Err(PathError::NoPathFound { .. }),
                ) => {}
                other => panic!("algorithms disagree: {:?}", other),
            }
        }
    }
}

#[test]
fn test_query_engine_dispatch() {
    let graph = europe();
    let engine = QueryEngine::new();
    for algorithm in Algorithm::ALL {
        let result = engine
            .shortest_path(
                &graph,
                PathParams {
                    source: s("France"),
                    target: s("England"),
                    algorithm,
                },
            )
            .unwrap();
        assert_eq!(result.into_parts(), (500, path_of(&["France", "Ireland", "England"])));
    }
}

#[test]
fn test_algorithm_names() {
    for algorithm in Algorithm::ALL {
        assert_eq!(Algorithm::from_name(algorithm.name()), Some(algorithm));
    }
    assert_eq!(Algorithm::from_name("Bellman_Ford"), Some(Algorithm::BellmanFord));
    assert_eq!(Algorithm::from_name("A*"), Some(Algorithm::AStar));
    assert_eq!(Algorithm::from_name("floyd"), None);
}

// ==================== Comparison Tests ====================

#[test]
fn test_compare_algorithms() {
    let graph = europe();
    let report = compare_algorithms(&graph, &s("France"), &s("England"), 50).unwrap();
    assert_eq!(report.iterations, 50);
    assert_eq!(report.dijkstra_cost, 500);
    assert_eq!(report.bellman_ford_cost, 500);
    assert!(!report.ratio().is_nan());
}

#[test]
fn test_compare_algorithms_rejects_zero_iterations() {
    let graph = europe();
    assert!(matches!(
        compare_algorithms(&graph, &s("France"), &s("England"), 0),
        Err(PathError::InvalidArgument(_))
    ));
}

#[test]
fn test_compare_algorithms_propagates_errors() {
    let graph = europe();
    assert!(matches!(
        compare_algorithms(&graph, &s("England"), &s("France"), 5),
        Err(PathError::NoPathFound { .. })
    ));
}
