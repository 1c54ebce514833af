// src/graph/mod.rs

//! Dependency-graph model and ground-truth generation.
//!
//! - [`digraph`] holds the directed dependency graph the whole crate is
//!   built around.
//! - [`generate`] produces synthetic ground-truth graphs from random-graph
//!   models.
//! - [`metrics`] derives schedule-shape numbers from a graph.

pub mod digraph;
pub mod generate;
pub mod metrics;

pub use digraph::DependencyGraph;
pub use generate::{GraphModel, generate};
pub use metrics::{ScheduleMetrics, schedule_metrics};
