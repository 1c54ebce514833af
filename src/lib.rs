// src/lib.rs

pub mod cli;
pub mod detect;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod report;
pub mod suite;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::cli::{Algorithm, CliArgs, Generator};
use crate::detect::{AlgorithmKind, TrialMetrics, detector_for};
use crate::errors::Result;
use crate::graph::{GraphModel, schedule_metrics};
use crate::report::{DirSink, ReportSink};
use crate::suite::{SimulatedSuite, TestSuite};

/// High-level entry point used by `main.rs`.
///
/// Runs `--trials` independent trials: each generates a fresh ground truth,
/// wraps it in the simulated oracle, runs the selected detector against it,
/// and writes both graph reports. One plain numeric row per trial goes to
/// stdout for external aggregation.
pub fn run(args: CliArgs) -> Result<()> {
    let model = graph_model(&args);
    let kind = algorithm_kind(args.algorithm);
    let mut sink = DirSink::new(&args.output)?;

    for trial in 0..args.trials {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(u64::from(trial))),
            None => StdRng::from_entropy(),
        };

        let metrics = run_trial(trial, args.tests, model, kind, &mut rng, &mut sink)?;
        println!(
            "{trial} {} {}",
            metrics.oracle_calls, metrics.edges_discovered
        );
    }

    Ok(())
}

/// Run one trial end to end: generate truth, infer, report.
pub fn run_trial(
    trial: u32,
    n: u32,
    model: GraphModel,
    kind: AlgorithmKind,
    rng: &mut impl rand::Rng,
    sink: &mut dyn ReportSink,
) -> Result<TrialMetrics> {
    let mut suite = SimulatedSuite::new(model, n, rng)?;
    sink.write_report(&format!("truth-{trial}"), &suite.truth().render())?;

    let truth_shape = schedule_metrics(suite.truth());
    info!(
        trial,
        longest_schedule = truth_shape.longest_schedule,
        total_cost = truth_shape.total_cost,
        "ground truth generated"
    );

    let tests = suite.generate_ids();
    let detector = detector_for(kind);
    let mut metrics = TrialMetrics::default();
    let inferred = detector.run(&tests, &mut suite, &mut metrics)?;

    sink.write_report(&format!("inferred-{trial}"), &inferred.render())?;
    info!(
        trial,
        oracle_calls = metrics.oracle_calls,
        edges_discovered = metrics.edges_discovered,
        inferred_edges = inferred.edge_count(),
        "inference finished"
    );

    Ok(metrics)
}

fn graph_model(args: &CliArgs) -> GraphModel {
    match args.graph_generator {
        Generator::ErdosRenyi => GraphModel::ErdosRenyi {
            probability: args.probability,
        },
        Generator::BarabasiAlbert => GraphModel::BarabasiAlbert,
        Generator::OutDegree => GraphModel::OutDegree {
            min: args.min_out,
            max: args.max_out,
        },
    }
}

fn algorithm_kind(algorithm: Algorithm) -> AlgorithmKind {
    match algorithm {
        Algorithm::ExLinear => AlgorithmKind::ExLinear,
        Algorithm::Pradet => AlgorithmKind::PraDet,
    }
}
