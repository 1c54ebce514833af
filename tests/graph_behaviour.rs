use std::collections::HashSet;

use inferdag::errors::InferdagError;
use inferdag::graph::{DependencyGraph, schedule_metrics};
use inferdag_test_utils::builders::GraphBuilder;

#[test]
fn add_edge_rejects_unknown_nodes() {
    let mut graph = DependencyGraph::new(0..3);

    assert!(matches!(
        graph.add_edge(0, 99),
        Err(InferdagError::UnknownNode { node: 99 })
    ));
    assert!(matches!(
        graph.add_edge(99, 0),
        Err(InferdagError::UnknownNode { node: 99 })
    ));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn add_edge_is_idempotent() {
    let mut graph = DependencyGraph::new(0..2);
    graph.add_edge(1, 0).unwrap();
    graph.add_edge(1, 0).unwrap();

    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_edge(1, 0));
    assert!(!graph.has_edge(0, 1));
}

#[test]
fn dependencies_are_transitive() {
    // 3 -> 2 -> 1 -> 0
    let graph = GraphBuilder::with_nodes(4)
        .edge(3, 2)
        .edge(2, 1)
        .edge(1, 0)
        .build();

    assert_eq!(graph.dependencies_of(3), HashSet::from([0, 1, 2]));
    assert_eq!(graph.dependencies_of(1), HashSet::from([0]));
    assert!(graph.dependencies_of(0).is_empty());
}

#[test]
fn dependencies_terminate_on_cycles() {
    let mut graph = DependencyGraph::new(0..3);
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(1, 2).unwrap();
    graph.add_edge(2, 0).unwrap();

    let deps = graph.dependencies_of(0);
    assert!(deps.contains(&1));
    assert!(deps.contains(&2));
    // A node on a cycle through itself reports itself as a dependency.
    assert!(deps.contains(&0));
    assert!(graph.is_cyclic());
}

#[test]
fn in_degree_counts_incoming_edges() {
    // 1 -> 0, 2 -> 0, 2 -> 1
    let graph = GraphBuilder::with_nodes(3)
        .edge(1, 0)
        .edge(2, 0)
        .edge(2, 1)
        .build();

    assert_eq!(graph.in_degree(0), 2);
    assert_eq!(graph.in_degree(1), 1);
    assert_eq!(graph.in_degree(2), 0);
}

#[test]
fn invert_edge_flips_direction() {
    let mut graph = GraphBuilder::with_nodes(2).edge(1, 0).build();
    graph.invert_edge(1, 0).unwrap();

    assert!(graph.has_edge(0, 1));
    assert!(!graph.has_edge(1, 0));
}

#[test]
fn transitive_reduce_drops_shortcut_edges() {
    // Diamond plus a shortcut: 3 -> {1, 2} -> 0, and redundant 3 -> 0.
    let mut graph = GraphBuilder::with_nodes(4)
        .edge(3, 1)
        .edge(3, 2)
        .edge(1, 0)
        .edge(2, 0)
        .edge(3, 0)
        .build();

    graph.transitive_reduce();

    assert!(graph.has_edge(3, 1));
    assert!(graph.has_edge(3, 2));
    assert!(graph.has_edge(1, 0));
    assert!(graph.has_edge(2, 0));
    assert!(!graph.has_edge(3, 0));
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn transitive_reduce_keeps_reachability() {
    let mut graph = GraphBuilder::with_nodes(3)
        .edge(2, 1)
        .edge(1, 0)
        .edge(2, 0)
        .build();
    let before: Vec<_> = graph.nodes().map(|n| graph.dependencies_of(n)).collect();

    graph.transitive_reduce();

    let after: Vec<_> = graph.nodes().map(|n| graph.dependencies_of(n)).collect();
    assert_eq!(before, after);
    assert!(!graph.has_edge(2, 0));
}

#[test]
fn render_lists_nodes_and_edges() {
    let graph = GraphBuilder::with_nodes(3).edge(2, 1).build();
    let text = graph.render();

    assert!(text.starts_with("digraph {\n"));
    assert!(text.ends_with("}\n"));
    assert!(text.contains("    0;\n"));
    assert!(text.contains("    2 -> 1;\n"));
    assert!(!text.contains("1 -> 2"));
}

#[test]
fn schedules_group_sinks_with_their_dependencies() {
    // Chain 3 -> 2 -> 1 plus an isolated node 0.
    let graph = GraphBuilder::with_nodes(4).edge(3, 2).edge(2, 1).build();

    let schedules = graph.schedules();
    assert_eq!(schedules, vec![vec![1, 2, 3], vec![0]]);

    let shape = schedule_metrics(&graph);
    assert_eq!(shape.longest_schedule, 3);
    assert_eq!(shape.total_cost, 4);
}
