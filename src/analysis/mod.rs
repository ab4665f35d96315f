mod circular;
mod coupling;
mod graph;
mod scanner;

pub use circular::find_cycles;
pub use coupling::{CouplingMetrics, SizeSummary, coupling_metrics, size_summary};
pub use graph::{DependencyGraph, DependencyMatcher, substring_matcher};
pub use scanner::{ScanError, is_module_file, scan_modules, walk_module_files};

use crate::model::AnalysisReport;
use std::path::Path;

/// Run the full analysis pipeline: scan modules, build the dependency graph,
/// enumerate cycles, and compute coupling and size metrics.
pub fn analyze(path: &Path, source_root: &str) -> Result<AnalysisReport, ScanError> {
    let project_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("project")
        .to_string();

    let modules = scan_modules(path, source_root)?;
    let graph = DependencyGraph::build(&modules);
    let cycles = find_cycles(&graph);
    let coupling = coupling_metrics(&graph);
    let sizes = size_summary(&modules);

    Ok(AnalysisReport {
        project_name,
        modules,
        graph,
        cycles,
        coupling,
        sizes,
    })
}
