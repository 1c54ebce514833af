// src/suite/mod.rs

//! Test-suite abstraction: an ordered list of test ids plus a black-box
//! schedule runner returning per-test verdicts.
//!
//! One interface, two envisioned backends: the closed-world simulation in
//! [`simulated`] and, eventually, a live test executor. Detectors only ever
//! talk to the trait.

pub mod simulated;

pub use simulated::SimulatedSuite;

use crate::errors::Result;

/// Identifier of a single test in the suite. Identity and ordering only; no
/// further semantics.
pub type TestId = u32;

/// An ordered sequence of test ids proposed for execution.
pub type Schedule = Vec<TestId>;

pub trait TestSuite {
    /// Full ordered list of test ids in the suite.
    fn generate_ids(&self) -> Vec<TestId>;

    /// Execute `schedule` and return one pass/fail verdict per position, in
    /// schedule order.
    ///
    /// Detectors require determinism: for a fixed backing state and a fixed
    /// schedule, repeated calls must return identical verdicts.
    fn run(&mut self, schedule: &[TestId]) -> Result<Vec<bool>>;
}
