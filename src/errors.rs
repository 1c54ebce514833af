// src/errors.rs

//! Crate-wide error types.

use thiserror::Error;

use crate::suite::TestId;

#[derive(Error, Debug)]
pub enum InferdagError {
    #[error("unknown node {node} referenced by graph operation")]
    UnknownNode { node: TestId },

    #[error("generator requires at least {required} nodes (got {actual})")]
    InsufficientNodes { required: usize, actual: usize },

    #[error("invalid generator parameters: {0}")]
    InvalidParameters(String),

    #[error("oracle verdicts are inconsistent: {0}")]
    InconsistentOracle(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, InferdagError>;
