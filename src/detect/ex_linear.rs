// src/detect/ex_linear.rs

//! Single-exclusion linear detector.
//!
//! For each test in turn, run the whole suite with just that test removed
//! and watch which remaining tests fail. The first failure is attributed to
//! the removed test; the failing test is then dropped from the schedule so
//! cascading failures downstream of it cannot implicate unrelated tests, and
//! the shrunken schedule is re-run until everything passes. The inner loop
//! strictly shrinks the schedule, so it terminates for any deterministic
//! oracle. O(n²) oracle calls worst case.

use tracing::debug;

use crate::detect::{Detector, TrialMetrics, finish};
use crate::errors::Result;
use crate::graph::DependencyGraph;
use crate::suite::{TestId, TestSuite};

#[derive(Debug, Default)]
pub struct ExLinear;

impl Detector for ExLinear {
    fn run(
        &self,
        tests: &[TestId],
        suite: &mut dyn TestSuite,
        metrics: &mut TrialMetrics,
    ) -> Result<DependencyGraph> {
        let mut graph = DependencyGraph::new(tests.iter().copied());

        for (i, &excluded) in tests.iter().enumerate() {
            let mut schedule: Vec<TestId> = tests.to_vec();
            schedule.remove(i);

            let mut verdicts = suite.run(&schedule)?;
            metrics.oracle_calls += 1;

            while let Some(k) = verdicts.iter().position(|&passed| !passed) {
                debug!(
                    failed = schedule[k],
                    excluded, "first failure attributed to excluded test"
                );
                graph.add_edge(schedule[k], excluded)?;
                metrics.edges_discovered += 1;

                schedule.remove(k);
                verdicts = suite.run(&schedule)?;
                metrics.oracle_calls += 1;
            }
        }

        finish(graph)
    }
}
