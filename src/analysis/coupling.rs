use crate::analysis::DependencyGraph;
use crate::model::Module;
use std::collections::HashMap;

/// Afferent/efferent coupling and instability per module.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct CouplingMetrics {
    /// Incoming edge count per node.
    pub afferent: HashMap<String, usize>,
    /// Outgoing edge count per node.
    pub efferent: HashMap<String, usize>,
    /// efferent / (afferent + efferent), 0 when both are 0.
    pub instability: HashMap<String, f64>,
}

/// Count edges by linear scan of the edge list. A self-loop contributes to
/// both counts of its node. Instability for an isolated node is exactly 0.
pub fn coupling_metrics(graph: &DependencyGraph) -> CouplingMetrics {
    let edges = graph.edges();
    let mut metrics = CouplingMetrics::default();

    for node in graph.nodes() {
        let afferent = edges.iter().filter(|(_, target)| *target == node).count();
        let efferent = edges.iter().filter(|(source, _)| *source == node).count();

        let total = afferent + efferent;
        let instability = if total == 0 {
            0.0
        } else {
            efferent as f64 / total as f64
        };

        metrics.afferent.insert(node.to_string(), afferent);
        metrics.efferent.insert(node.to_string(), efferent);
        metrics.instability.insert(node.to_string(), instability);
    }

    metrics
}

/// Per-module sizes plus project totals.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct SizeSummary {
    pub module_sizes: HashMap<String, u64>,
    pub total_size: u64,
    pub average_size: f64,
}

pub fn size_summary(modules: &[Module]) -> SizeSummary {
    let mut module_sizes = HashMap::new();
    let mut total_size = 0;

    for module in modules {
        module_sizes.insert(module.name.clone(), module.size);
        total_size += module.size;
    }

    let average_size = if modules.is_empty() {
        0.0
    } else {
        total_size as f64 / modules.len() as f64
    };

    SizeSummary {
        module_sizes,
        total_size,
        average_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn module(name: &str, deps: &[&str]) -> Module {
        let mut m = Module::new(PathBuf::from(format!("/app/{name}/{name}.module.ts")));
        m.dependencies = deps.iter().map(|s| s.to_string()).collect();
        m
    }

    #[test]
    fn counts_balance_against_the_edge_list() {
        let modules = vec![
            module("shared", &[]),
            module("auth", &["../shared/shared.module"]),
            module("billing", &["../shared/shared.module", "../auth/auth.module"]),
        ];
        let graph = DependencyGraph::build(&modules);
        let metrics = coupling_metrics(&graph);

        let afferent_sum: usize = metrics.afferent.values().sum();
        let efferent_sum: usize = metrics.efferent.values().sum();
        assert_eq!(afferent_sum, graph.edge_count());
        assert_eq!(efferent_sum, graph.edge_count());
    }

    #[test]
    fn isolated_node_has_zero_instability() {
        let graph = DependencyGraph::build(&[module("lonely", &[])]);
        let metrics = coupling_metrics(&graph);
        assert_eq!(metrics.instability["lonely"], 0.0);
    }

    #[test]
    fn instability_stays_within_unit_interval() {
        let modules = vec![
            module("shared", &[]),
            module("auth", &["../shared/shared.module", "../shared/shared.module"]),
        ];
        let graph = DependencyGraph::build(&modules);
        let metrics = coupling_metrics(&graph);
        for value in metrics.instability.values() {
            assert!((0.0..=1.0).contains(value));
        }
        assert_eq!(metrics.instability["auth"], 1.0);
        assert_eq!(metrics.instability["shared"], 0.0);
    }

    #[test]
    fn self_loop_counts_on_both_sides() {
        let graph = DependencyGraph::build(&[module("auth", &["./auth.module"])]);
        let metrics = coupling_metrics(&graph);
        assert_eq!(metrics.afferent["auth"], 1);
        assert_eq!(metrics.efferent["auth"], 1);
        assert_eq!(metrics.instability["auth"], 0.5);
    }

    #[test]
    fn size_summary_averages_over_modules() {
        let mut a = module("a", &[]);
        a.size = 100;
        let mut b = module("b", &[]);
        b.size = 50;

        let summary = size_summary(&[a, b]);
        assert_eq!(summary.total_size, 150);
        assert_eq!(summary.average_size, 75.0);
        assert_eq!(summary.module_sizes["a"], 100);
    }
}
