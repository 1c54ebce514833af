// src/graph/metrics.rs

//! Schedule-shape metrics for a dependency graph.

use crate::graph::DependencyGraph;

/// Aggregate shape of the per-sink schedules of a graph.
///
/// These are plain numbers a caller may forward to external aggregation;
/// nothing in the core consumes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleMetrics {
    /// Length of the longest schedule.
    pub longest_schedule: usize,
    /// Sum of all schedule lengths, i.e. the number of test executions
    /// needed if each schedule ran independently.
    pub total_cost: usize,
}

pub fn schedule_metrics(graph: &DependencyGraph) -> ScheduleMetrics {
    let mut res = ScheduleMetrics::default();

    for schedule in graph.schedules() {
        res.longest_schedule = res.longest_schedule.max(schedule.len());
        res.total_cost += schedule.len();
    }

    res
}
