mod module;

pub use module::{Module, module_name};

use crate::analysis::{CouplingMetrics, DependencyGraph, SizeSummary};

/// Everything the analysis pipeline produces for one project scan.
pub struct AnalysisReport {
    pub project_name: String,
    pub modules: Vec<Module>,
    pub graph: DependencyGraph,
    pub cycles: Vec<Vec<String>>,
    pub coupling: CouplingMetrics,
    pub sizes: SizeSummary,
}
