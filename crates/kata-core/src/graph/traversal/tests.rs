use super::*;

/// The six-vertex undirected example graph, stored as symmetric edges
fn hexagon() -> Graph<&'static str> {
    [
        ("A", vec!["B", "C"]),
        ("B", vec!["A", "D", "E"]),
        ("C", vec!["A", "F"]),
        ("D", vec!["B"]),
        ("E", vec!["B", "F"]),
        ("F", vec!["C", "E"]),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_bfs_traverse_layer_order() {
    let order = bfs_traverse(&hexagon(), &"A");
    assert_eq!(order, ["A", "B", "C", "D", "E", "F"]);
}

#[test]
fn test_bfs_visits_each_vertex_once() {
    let order = bfs_traverse(&hexagon(), &"B");
    let unique: HashSet<_> = order.iter().collect();
    assert_eq!(unique.len(), order.len());
    assert_eq!(order.len(), 6);
    assert_eq!(order[0], "B");
}

#[test]
fn test_bfs_distance_is_non_decreasing() {
    // Edge-count distances from A in the hexagon graph
    let distance = |v: &str| match v {
        "A" => 0,
        "B" | "C" => 1,
        _ => 2,
    };
    let order = bfs_traverse(&hexagon(), &"A");
    for pair in order.windows(2) {
        assert!(distance(pair[0]) <= distance(pair[1]));
    }
}

#[test]
fn test_bfs_omits_unreachable_vertices() {
    let mut graph = Graph::new();
    graph.add_edge("a", "b");
    graph.add_edge("x", "y");
    assert_eq!(bfs_traverse(&graph, &"a"), ["a", "b"]);
}

#[test]
fn test_bfs_absent_start_is_isolated() {
    let graph: Graph<&str> = Graph::new();
    assert_eq!(bfs_traverse(&graph, &"lonely"), ["lonely"]);
}

#[test]
fn test_dfs_recursive_pre_order() {
    let order = dfs_traverse(&hexagon(), &"A");
    assert_eq!(order, ["A", "B", "D", "E", "F", "C"]);
}

#[test]
fn test_dfs_iterative_matches_recursive() {
    let graph = hexagon();
    for start in ["A", "B", "C", "D", "E", "F"] {
        assert_eq!(
            dfs_traverse_iterative(&graph, &start),
            dfs_traverse(&graph, &start),
            "divergence from {start}"
        );
    }
}

#[test]
fn test_dfs_iterative_skips_duplicate_pushes() {
    // b is pushed twice (via a's list and as c's neighbor) but emitted once
    let mut graph = Graph::new();
    graph.add_edge('a', 'b');
    graph.add_edge('a', 'c');
    graph.add_edge('c', 'b');
    assert_eq!(dfs_traverse_iterative(&graph, &'a'), ['a', 'b', 'c']);
}

#[test]
fn test_dfs_absent_start_is_isolated() {
    let graph: Graph<u32> = Graph::new();
    assert_eq!(dfs_traverse(&graph, &7), [7]);
    assert_eq!(dfs_traverse_iterative(&graph, &7), [7]);
}

#[test]
fn test_has_cycle_three_cycle() {
    let graph: Graph<&str> = [("A", vec!["B"]), ("B", vec!["C"]), ("C", vec!["A"])]
        .into_iter()
        .collect();
    assert!(has_cycle(&graph));
}

#[test]
fn test_has_cycle_acyclic_chain() {
    let graph: Graph<&str> = [("A", vec!["B"]), ("B", vec!["C"]), ("C", vec![])]
        .into_iter()
        .collect();
    assert!(!has_cycle(&graph));
}

#[test]
fn test_has_cycle_self_loop() {
    let mut graph = Graph::new();
    graph.add_edge("a", "a");
    assert!(has_cycle(&graph));
}

#[test]
fn test_has_cycle_cross_edges_are_not_cycles() {
    // Diamond DAG: two paths into d, no cycle
    let graph: Graph<&str> = [
        ("a", vec!["b", "c"]),
        ("b", vec!["d"]),
        ("c", vec!["d"]),
        ("d", vec![]),
    ]
    .into_iter()
    .collect();
    assert!(!has_cycle(&graph));
}

#[test]
fn test_has_cycle_in_disconnected_component() {
    let graph: Graph<&str> = [
        ("a", vec!["b"]),
        ("b", vec![]),
        ("x", vec!["y"]),
        ("y", vec!["x"]),
    ]
    .into_iter()
    .collect();
    assert!(has_cycle(&graph));
}

#[test]
fn test_traversal_does_not_mutate_graph() {
    let graph = hexagon();
    let first = bfs_traverse(&graph, &"A");
    let second = bfs_traverse(&graph, &"A");
    assert_eq!(first, second);
    assert_eq!(graph.vertex_count(), 6);
}
