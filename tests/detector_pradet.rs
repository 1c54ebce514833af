use inferdag::detect::{Detector, PraDet, TrialMetrics};
use inferdag::suite::{SimulatedSuite, TestSuite};
use inferdag_test_utils::builders::GraphBuilder;

#[test]
fn refutes_every_spurious_edge() {
    // Truth: test 2 depends on test 1, nothing else. The initial complete
    // graph has three candidate edges; two must be refuted.
    let truth = GraphBuilder::with_nodes(3).edge(2, 1).build();
    let mut suite = SimulatedSuite::from_graph(truth);
    let tests = suite.generate_ids();

    let mut metrics = TrialMetrics::default();
    let inferred = PraDet.run(&tests, &mut suite, &mut metrics).unwrap();

    assert!(inferred.has_edge(2, 1));
    assert_eq!(inferred.edge_count(), 1);
    assert_eq!(metrics.oracle_calls, 3);
    assert_eq!(metrics.edges_discovered, 1);
}

#[test]
fn keeps_true_edges_in_the_documented_direction() {
    let truth = GraphBuilder::with_nodes(2).edge(1, 0).build();
    let mut suite = SimulatedSuite::from_graph(truth);
    let tests = suite.generate_ids();

    let inferred = PraDet
        .run(&tests, &mut suite, &mut TrialMetrics::default())
        .unwrap();

    assert!(inferred.has_edge(1, 0));
    assert!(!inferred.has_edge(0, 1));
}

#[test]
fn chain_truth_survives_with_skipped_candidates_reduced_away() {
    // Truth chain 2 -> 1 -> 0. Inverting 2 -> 0 closes a cycle both times
    // it is tried, so the candidate is abandoned unrefuted; transitive
    // reduction strips it afterwards.
    let truth = GraphBuilder::with_nodes(3).edge(2, 1).edge(1, 0).build();
    let mut suite = SimulatedSuite::from_graph(truth);
    let tests = suite.generate_ids();

    let inferred = PraDet
        .run(&tests, &mut suite, &mut TrialMetrics::default())
        .unwrap();

    assert!(inferred.has_edge(2, 1));
    assert!(inferred.has_edge(1, 0));
    assert!(!inferred.has_edge(2, 0));
    assert_eq!(inferred.edge_count(), 2);
}

#[test]
fn independent_tests_leave_an_empty_graph() {
    let truth = GraphBuilder::with_nodes(4).build();
    let mut suite = SimulatedSuite::from_graph(truth);
    let tests = suite.generate_ids();

    let mut metrics = TrialMetrics::default();
    let inferred = PraDet.run(&tests, &mut suite, &mut metrics).unwrap();

    assert_eq!(inferred.edge_count(), 0);
    // Every candidate edge of the complete graph gets exactly one run.
    assert_eq!(metrics.oracle_calls, 6);
}

#[test]
fn empty_suite_yields_empty_graph() {
    let truth = GraphBuilder::with_nodes(0).build();
    let mut suite = SimulatedSuite::from_graph(truth);

    let inferred = PraDet
        .run(&[], &mut suite, &mut TrialMetrics::default())
        .unwrap();

    assert!(inferred.is_empty());
}
