use crate::model::Module;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Resolves one raw import specifier to the index of a target module, or
/// `None` for external imports. Kept as a single pluggable function so the
/// matching policy can be swapped without touching graph or traversal code.
pub type DependencyMatcher = fn(&str, &[Module]) -> Option<usize>;

/// The first module (in scan order) whose lower-cased name appears as a
/// substring of the raw specifier. Deliberately heuristic: short names can
/// match inside longer ones ("core" inside "core-utils"), and ambiguity is
/// settled by scan order.
pub fn substring_matcher(dependency: &str, modules: &[Module]) -> Option<usize> {
    modules
        .iter()
        .position(|m| dependency.contains(&m.name.to_lowercase()))
}

/// Directed inter-module graph. Parallel edges are kept: two import
/// statements for the same target are two edges.
pub struct DependencyGraph {
    graph: DiGraph<String, ()>,
    node_indices: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    pub fn build(modules: &[Module]) -> Self {
        Self::build_with_matcher(modules, substring_matcher)
    }

    pub fn build_with_matcher(modules: &[Module], matcher: DependencyMatcher) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();

        for module in modules {
            let idx = graph.add_node(module.name.clone());
            node_indices.insert(module.name.clone(), idx);
        }

        for module in modules {
            let from_idx = match node_indices.get(&module.name) {
                Some(idx) => *idx,
                None => continue,
            };

            for dependency in &module.dependencies {
                if let Some(target) = matcher(dependency, modules) {
                    if let Some(to_idx) = node_indices.get(&modules[target].name) {
                        graph.add_edge(from_idx, *to_idx, ());
                    }
                }
            }
        }

        Self {
            graph,
            node_indices,
        }
    }

    pub fn graph(&self) -> &DiGraph<String, ()> {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Node names in insertion (scan) order.
    pub fn nodes(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].as_str())
            .collect()
    }

    /// (source, target) name pairs in edge insertion order.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_indices()
            .filter_map(|e| {
                let (a, b) = self.graph.edge_endpoints(e)?;
                Some((self.graph[a].as_str(), self.graph[b].as_str()))
            })
            .collect()
    }

    /// Outgoing edge targets per node, in edge insertion order. Used by the
    /// cycle detector, which needs deterministic descent order.
    pub fn adjacency(&self) -> Vec<Vec<NodeIndex>> {
        let mut out: Vec<Vec<NodeIndex>> = vec![Vec::new(); self.graph.node_count()];
        for e in self.graph.edge_indices() {
            if let Some((a, b)) = self.graph.edge_endpoints(e) {
                out[a.index()].push(b);
            }
        }
        out
    }

    pub fn name_of(&self, idx: NodeIndex) -> &str {
        self.graph[idx].as_str()
    }

    pub fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.node_indices.get(name).copied()
    }
}
