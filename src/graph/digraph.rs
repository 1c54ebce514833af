// src/graph/digraph.rs

//! Directed dependency graph over test identifiers.
//!
//! Edge direction convention, held throughout the crate: `u -> v` means
//! *u depends on v*, i.e. v must have run (and passed) before u.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt::Write as _;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::errors::{InferdagError, Result};
use crate::suite::TestId;

/// Adjacency-set representation of a directed dependency graph.
///
/// Nodes are fixed at construction; edges are inserted afterwards and
/// insertion is idempotent. The structure itself does not forbid cycles
/// (traversals are cycle-safe), but generators and detectors are expected to
/// produce DAGs; callers that require acyclicity check with
/// [`DependencyGraph::is_cyclic`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGraph {
    nodes: BTreeMap<TestId, BTreeSet<TestId>>,
}

impl DependencyGraph {
    /// Build a graph with the given node set and no edges.
    pub fn new(nodes: impl IntoIterator<Item = TestId>) -> Self {
        Self {
            nodes: nodes.into_iter().map(|n| (n, BTreeSet::new())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, u: TestId) -> bool {
        self.nodes.contains_key(&u)
    }

    /// Node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = TestId> + '_ {
        self.nodes.keys().copied()
    }

    pub fn has_edge(&self, u: TestId, v: TestId) -> bool {
        self.nodes.get(&u).is_some_and(|succ| succ.contains(&v))
    }

    /// Direct successors of `u` (its immediate prerequisites), ascending.
    pub fn direct_dependencies_of(&self, u: TestId) -> impl Iterator<Item = TestId> + '_ {
        self.nodes.get(&u).into_iter().flatten().copied()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|succ| succ.len()).sum()
    }

    /// Insert edge `u -> v`.
    ///
    /// Both endpoints must already be nodes; a duplicate insert is a no-op.
    pub fn add_edge(&mut self, u: TestId, v: TestId) -> Result<()> {
        if !self.nodes.contains_key(&v) {
            return Err(InferdagError::UnknownNode { node: v });
        }
        match self.nodes.get_mut(&u) {
            Some(succ) => {
                succ.insert(v);
                Ok(())
            }
            None => Err(InferdagError::UnknownNode { node: u }),
        }
    }

    /// Remove edge `u -> v`; removing a missing edge is a no-op.
    pub fn remove_edge(&mut self, u: TestId, v: TestId) {
        if let Some(succ) = self.nodes.get_mut(&u) {
            succ.remove(&v);
        }
    }

    /// Replace edge `u -> v` with `v -> u`.
    pub fn invert_edge(&mut self, u: TestId, v: TestId) -> Result<()> {
        self.remove_edge(u, v);
        self.add_edge(v, u)
    }

    /// All nodes reachable from `u` over outgoing edges: the transitive
    /// prerequisites of `u`.
    ///
    /// `u` itself is included only when it lies on a cycle through itself.
    /// Terminates on cyclic input.
    pub fn dependencies_of(&self, u: TestId) -> HashSet<TestId> {
        let mut deps = HashSet::new();
        let mut visited: HashSet<TestId> = HashSet::new();
        let mut stack = vec![u];

        while let Some(v) = stack.pop() {
            if let Some(succ) = self.nodes.get(&v) {
                for &w in succ {
                    if !visited.contains(&w) {
                        stack.push(w);
                        deps.insert(w);
                    } else if w == u {
                        deps.insert(w);
                    }
                }
            }
            visited.insert(v);
        }

        deps
    }

    /// Number of distinct nodes with an edge into `u` (nodes that depend on
    /// `u` directly).
    pub fn in_degree(&self, u: TestId) -> usize {
        self.nodes.values().filter(|succ| succ.contains(&u)).count()
    }

    /// Reduce the edge set in place to the minimal one with the same
    /// reachability relation.
    ///
    /// A direct edge `u -> v` is redundant iff some other direct successor
    /// `w` of `u` also reaches `v`. All reachability sets are snapshotted
    /// before any edge is dropped, so the result does not depend on node
    /// iteration order. Unique minimal result on DAGs; behaviour on cyclic
    /// input is unspecified.
    pub fn transitive_reduce(&mut self) {
        let reach: BTreeMap<TestId, HashSet<TestId>> = self
            .nodes
            .keys()
            .map(|&n| (n, self.dependencies_of(n)))
            .collect();

        let reduced: BTreeMap<TestId, BTreeSet<TestId>> = self
            .nodes
            .iter()
            .map(|(&u, succ)| {
                let mut keep = succ.clone();
                for &v in succ {
                    let redundant = succ
                        .iter()
                        .any(|&w| w != v && reach[&w].contains(&v));
                    if redundant {
                        keep.remove(&v);
                    }
                }
                (u, keep)
            })
            .collect();

        self.nodes = reduced;
    }

    /// Whether the edge set contains a directed cycle.
    pub fn is_cyclic(&self) -> bool {
        let mut g: DiGraphMap<TestId, ()> = DiGraphMap::new();
        for &n in self.nodes.keys() {
            g.add_node(n);
        }
        for (&u, succ) in &self.nodes {
            for &v in succ {
                g.add_edge(u, v, ());
            }
        }
        toposort(&g, None).is_err()
    }

    /// Group the nodes into per-sink schedules: highest-numbered unvisited
    /// node first, together with its whole dependency set, sorted ascending.
    ///
    /// Used by [`crate::graph::metrics`] to size the ground truth.
    pub fn schedules(&self) -> Vec<Vec<TestId>> {
        let mut visited: HashSet<TestId> = HashSet::new();
        let mut out = Vec::new();

        for &n in self.nodes.keys().rev() {
            if visited.contains(&n) {
                continue;
            }

            let deps = self.dependencies_of(n);
            let mut schedule: Vec<TestId> = Vec::with_capacity(deps.len() + 1);
            schedule.push(n);
            for &d in &deps {
                visited.insert(d);
                schedule.push(d);
            }
            schedule.sort_unstable();

            out.push(schedule);
        }

        out
    }

    /// Serialise to Graphviz-style text: a node line per node, then one
    /// `u -> v;` line per edge. Line order is stable per node but not a
    /// contract across the file.
    pub fn render(&self) -> String {
        let mut out = String::from("digraph {\n");

        for &u in self.nodes.keys() {
            let _ = writeln!(out, "    {u};");
        }
        for (&u, succ) in &self.nodes {
            for &v in succ {
                let _ = writeln!(out, "    {u} -> {v};");
            }
        }

        out.push_str("}\n");
        out
    }
}
