// src/graph/generate.rs

//! Random ground-truth graph generators.
//!
//! All models take an injected [`rand::Rng`] so trials are reproducible from
//! a seed, and all produce DAGs by construction: edges only ever point from
//! a higher-numbered node to a lower-numbered one. Generated graphs are
//! transitively reduced before being handed to the oracle; the reachability
//! relation the oracle consults is unchanged by that.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::errors::{InferdagError, Result};
use crate::graph::DependencyGraph;
use crate::suite::TestId;

/// Which random-graph model builds the ground truth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GraphModel {
    /// Independent edge `j -> i` for every i < j with fixed probability.
    ErdosRenyi { probability: f64 },
    /// Preferential attachment: new nodes depend on already-popular
    /// prerequisites.
    BarabasiAlbert,
    /// Every node draws a uniform out-degree in `[min, max]` and picks that
    /// many earlier nodes at random.
    OutDegree { min: u32, max: u32 },
}

/// Generate a ground-truth dependency graph over nodes `0..n`.
pub fn generate(model: GraphModel, n: u32, rng: &mut impl Rng) -> Result<DependencyGraph> {
    let mut graph = match model {
        GraphModel::ErdosRenyi { probability } => erdos_renyi(n, probability, rng)?,
        GraphModel::BarabasiAlbert => barabasi_albert(n, rng)?,
        GraphModel::OutDegree { min, max } => out_degree(n, min, max, rng)?,
    };

    graph.transitive_reduce();
    debug!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        ?model,
        "ground-truth graph generated"
    );

    Ok(graph)
}

fn erdos_renyi(n: u32, p: f64, rng: &mut impl Rng) -> Result<DependencyGraph> {
    if !(0.0..=1.0).contains(&p) {
        return Err(InferdagError::InvalidParameters(format!(
            "Erdős–Rényi probability must lie in [0, 1] (got {p})"
        )));
    }

    let mut graph = DependencyGraph::new(0..n);
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.r#gen::<f64>() < p {
                graph.add_edge(j, i)?;
            }
        }
    }
    Ok(graph)
}

fn barabasi_albert(n: u32, rng: &mut impl Rng) -> Result<DependencyGraph> {
    // The seed edge references nodes 1 and 2, so three nodes is the floor.
    if n < 3 {
        return Err(InferdagError::InsufficientNodes {
            required: 3,
            actual: n as usize,
        });
    }

    let mut graph = DependencyGraph::new(0..n);
    graph.add_edge(2, 1)?;

    for v in 3..n {
        // s >= 1: node 1 keeps its seed in-edge.
        let s: usize = (0..v).map(|i| graph.in_degree(i)).sum();
        for i in 0..v {
            if rng.r#gen::<f64>() < graph.in_degree(i) as f64 / s as f64 {
                graph.add_edge(v, i)?;
            }
        }
    }

    Ok(graph)
}

fn out_degree(n: u32, min: u32, max: u32, rng: &mut impl Rng) -> Result<DependencyGraph> {
    if min > max {
        return Err(InferdagError::InvalidParameters(format!(
            "out-degree range is inverted (min {min} > max {max})"
        )));
    }

    let mut graph = DependencyGraph::new(0..n);
    // The first v entries are always a permutation of 0..v: shuffling a
    // prefix keeps its element set intact.
    let mut earlier: Vec<TestId> = (0..n).collect();

    for v in 1..n {
        let degree = rng.gen_range(min..=max) as usize;
        let prefix = &mut earlier[..v as usize];
        prefix.shuffle(rng);
        for &u in prefix.iter().take(degree) {
            graph.add_edge(v, u)?;
        }
    }

    Ok(graph)
}
