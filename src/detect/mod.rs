// src/detect/mod.rs

//! Dependency detectors: black-box algorithms that reconstruct a dependency
//! graph from oracle verdicts alone.
//!
//! Every detector finishes the same way: the assembled graph is checked for
//! cycles (a cycle means the oracle contradicted itself) and transitively
//! reduced before being returned.

pub mod ex_linear;
pub mod pradet;

pub use ex_linear::ExLinear;
pub use pradet::PraDet;

use crate::errors::{InferdagError, Result};
use crate::graph::DependencyGraph;
use crate::suite::{TestId, TestSuite};

/// Plain per-trial counters, exposed for external aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrialMetrics {
    /// Number of schedules submitted to the oracle.
    pub oracle_calls: u64,
    /// Edges recorded before transitive reduction.
    pub edges_discovered: u64,
}

pub trait Detector {
    /// Reconstruct a dependency graph over `tests` from verdicts of `suite`
    /// alone.
    ///
    /// Precondition: the suite is deterministic for a fixed schedule. The
    /// result is undefined otherwise, except that a contradiction visible as
    /// a cycle in the assembled graph is reported as
    /// [`InferdagError::InconsistentOracle`].
    fn run(
        &self,
        tests: &[TestId],
        suite: &mut dyn TestSuite,
        metrics: &mut TrialMetrics,
    ) -> Result<DependencyGraph>;
}

/// Detection algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    ExLinear,
    PraDet,
}

pub fn detector_for(kind: AlgorithmKind) -> Box<dyn Detector> {
    match kind {
        AlgorithmKind::ExLinear => Box::new(ExLinear),
        AlgorithmKind::PraDet => Box::new(PraDet),
    }
}

/// Shared tail of every detector: flag contradictions, then minimise.
fn finish(mut graph: DependencyGraph) -> Result<DependencyGraph> {
    if graph.is_cyclic() {
        return Err(InferdagError::InconsistentOracle(
            "inferred graph contains a cycle".to_string(),
        ));
    }
    graph.transitive_reduce();
    Ok(graph)
}
