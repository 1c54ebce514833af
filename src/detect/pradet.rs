// src/detect/pradet.rs

//! Edge-refutation detector.
//!
//! Starts from the fully connected DAG (every test depends on every earlier
//! one) and tries to refute one candidate edge at a time. A candidate
//! `u -> v` is tested by inverting it and running v after exactly its
//! remaining prerequisites: if everything still passes, the dependency was
//! spurious and the edge is dropped; if anything fails, the original edge is
//! kept. Inversions that would close a cycle are skipped until some other
//! edge has been refuted; when every remaining candidate closes a cycle the
//! worklist is abandoned as-is.

use tracing::{debug, trace};

use crate::detect::{Detector, TrialMetrics, finish};
use crate::errors::Result;
use crate::graph::DependencyGraph;
use crate::suite::{TestId, TestSuite};

#[derive(Debug, Default)]
pub struct PraDet;

impl Detector for PraDet {
    fn run(
        &self,
        tests: &[TestId],
        suite: &mut dyn TestSuite,
        metrics: &mut TrialMetrics,
    ) -> Result<DependencyGraph> {
        let mut graph = DependencyGraph::new(tests.iter().copied());
        if tests.is_empty() {
            return Ok(graph);
        }

        // Candidate edges in ascending (dependent, prerequisite) order.
        let mut ordered: Vec<TestId> = tests.to_vec();
        ordered.sort_unstable();

        let mut worklist: Vec<(TestId, TestId)> = Vec::new();
        for (j, &b) in ordered.iter().enumerate() {
            for &a in &ordered[..j] {
                worklist.push((b, a));
                graph.add_edge(b, a)?;
            }
        }

        let mut cursor = 0usize;
        let mut tried = 0usize;

        while !worklist.is_empty() {
            let (mut u, mut v) = worklist[cursor];
            graph.invert_edge(u, v)?;
            tried += 1;
            let mut deps = graph.dependencies_of(v);

            // Inversion closed a cycle: revert and cycle through the
            // worklist until some candidate inverts cleanly.
            let mut exhausted = false;
            while deps.contains(&v) {
                trace!(u, v, "inversion closes a cycle; skipping candidate");
                graph.invert_edge(v, u)?;
                if tried == worklist.len() {
                    exhausted = true;
                    break;
                }
                cursor = (cursor + 1) % worklist.len();
                (u, v) = worklist[cursor];
                graph.invert_edge(u, v)?;
                tried += 1;
                deps = graph.dependencies_of(v);
            }
            if exhausted {
                debug!(
                    remaining = worklist.len(),
                    "every remaining candidate closes a cycle; giving up on them"
                );
                break;
            }

            // Run v after exactly its current prerequisites, in test order.
            let schedule: Vec<TestId> = tests
                .iter()
                .copied()
                .filter(|t| deps.contains(t))
                .chain(std::iter::once(v))
                .collect();
            let verdicts = suite.run(&schedule)?;
            metrics.oracle_calls += 1;

            graph.remove_edge(v, u);
            if verdicts.iter().any(|&passed| !passed) {
                debug!(u, v, "failure without the candidate edge; keeping it");
                graph.add_edge(u, v)?;
                metrics.edges_discovered += 1;
            }

            worklist.remove(cursor);
            tried = 0;
            if cursor >= worklist.len() {
                cursor = 0;
            }
        }

        finish(graph)
    }
}
