#![allow(dead_code)]

use inferdag::graph::DependencyGraph;
use inferdag::suite::TestId;

/// Builder for `DependencyGraph` to simplify test setup.
///
/// Edge direction follows the crate convention: `edge(u, v)` records
/// "u depends on v".
pub struct GraphBuilder {
    nodes: Vec<TestId>,
    edges: Vec<(TestId, TestId)>,
}

impl GraphBuilder {
    /// Nodes `0..n`.
    pub fn with_nodes(n: u32) -> Self {
        Self {
            nodes: (0..n).collect(),
            edges: Vec::new(),
        }
    }

    pub fn node(mut self, id: TestId) -> Self {
        self.nodes.push(id);
        self
    }

    pub fn edge(mut self, u: TestId, v: TestId) -> Self {
        self.edges.push((u, v));
        self
    }

    pub fn build(self) -> DependencyGraph {
        let mut graph = DependencyGraph::new(self.nodes);
        for (u, v) in self.edges {
            graph
                .add_edge(u, v)
                .expect("builder edges must reference declared nodes");
        }
        graph
    }
}
