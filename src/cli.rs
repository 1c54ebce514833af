// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `inferdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "inferdag",
    version,
    about = "Infer hidden test-order dependencies from schedule pass/fail verdicts.",
    long_about = None
)]
pub struct CliArgs {
    /// Number of tests in the synthetic suite.
    #[arg(short = 't', long, value_name = "N")]
    pub tests: u32,

    /// Detection algorithm.
    #[arg(short = 'a', long, value_enum, default_value_t = Algorithm::ExLinear)]
    pub algorithm: Algorithm,

    /// Random-graph model used to build the ground-truth dependency graph.
    #[arg(short = 'g', long, value_enum, default_value_t = Generator::ErdosRenyi)]
    pub graph_generator: Generator,

    /// Erdős–Rényi edge probability.
    #[arg(short = 'p', long, default_value_t = 0.5)]
    pub probability: f64,

    /// Minimum out-degree for the out-degree generator.
    #[arg(long, default_value_t = 3)]
    pub min_out: u32,

    /// Maximum out-degree for the out-degree generator.
    #[arg(long, default_value_t = 3)]
    pub max_out: u32,

    /// RNG seed for reproducible trials; omit to seed from entropy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of independent trials to run.
    #[arg(long, default_value_t = 1)]
    pub trials: u32,

    /// Directory for the graph reports.
    #[arg(short = 'o', long, value_name = "DIR", default_value = "results")]
    pub output: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `INFERDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Detection algorithm as exposed on the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Single-exclusion linear detection.
    ExLinear,
    /// Edge refutation from the fully connected DAG.
    Pradet,
}

/// Ground-truth graph model as exposed on the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Generator {
    ErdosRenyi,
    BarabasiAlbert,
    OutDegree,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
