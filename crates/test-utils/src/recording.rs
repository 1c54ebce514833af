use inferdag::errors::Result;
use inferdag::graph::DependencyGraph;
use inferdag::suite::{SimulatedSuite, TestId, TestSuite};

/// A suite wrapper that:
/// - answers from a fixed ground-truth graph (via `SimulatedSuite`)
/// - records every schedule it was asked to run, in call order.
pub struct RecordingSuite {
    inner: SimulatedSuite,
    pub schedules: Vec<Vec<TestId>>,
}

impl RecordingSuite {
    pub fn from_graph(truth: DependencyGraph) -> Self {
        Self {
            inner: SimulatedSuite::from_graph(truth),
            schedules: Vec::new(),
        }
    }

    pub fn truth(&self) -> &DependencyGraph {
        self.inner.truth()
    }
}

impl TestSuite for RecordingSuite {
    fn generate_ids(&self) -> Vec<TestId> {
        self.inner.generate_ids()
    }

    fn run(&mut self, schedule: &[TestId]) -> Result<Vec<bool>> {
        self.schedules.push(schedule.to_vec());
        self.inner.run(schedule)
    }
}
