// src/suite/simulated.rs

//! Closed-world oracle backed by a generated ground-truth graph.

use std::collections::HashSet;

use rand::Rng;
use tracing::trace;

use crate::errors::Result;
use crate::graph::{DependencyGraph, GraphModel, generate};
use crate::suite::{TestId, TestSuite};

/// Simulates an order-dependent test suite.
///
/// A test passes iff all of its transitive ground-truth prerequisites occupy
/// strictly earlier positions in the submitted schedule. Verdicts are a pure
/// function of (ground truth, schedule): positions are judged independently
/// and calls carry no hidden state, so the same schedule always yields the
/// same verdicts.
#[derive(Debug, Clone)]
pub struct SimulatedSuite {
    truth: DependencyGraph,
    ids: Vec<TestId>,
}

impl SimulatedSuite {
    /// Generate a fresh ground truth from `model` and wrap it.
    pub fn new(model: GraphModel, n: u32, rng: &mut impl Rng) -> Result<Self> {
        let truth = generate(model, n, rng)?;
        Ok(Self::from_graph(truth))
    }

    /// Wrap an existing ground-truth graph (tests use this directly).
    pub fn from_graph(truth: DependencyGraph) -> Self {
        let ids = truth.nodes().collect();
        Self { truth, ids }
    }

    /// The backing ground-truth graph, exposed for report writing only.
    /// Detectors must never look at this.
    pub fn truth(&self) -> &DependencyGraph {
        &self.truth
    }
}

impl TestSuite for SimulatedSuite {
    fn generate_ids(&self) -> Vec<TestId> {
        self.ids.clone()
    }

    fn run(&mut self, schedule: &[TestId]) -> Result<Vec<bool>> {
        let mut ran: HashSet<TestId> = HashSet::with_capacity(schedule.len());
        let mut verdicts = Vec::with_capacity(schedule.len());

        for &test in schedule {
            let deps = self.truth.dependencies_of(test);
            verdicts.push(deps.iter().all(|d| ran.contains(d)));
            ran.insert(test);
        }

        trace!(?schedule, ?verdicts, "simulated schedule run");
        Ok(verdicts)
    }
}
