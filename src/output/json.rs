use crate::model::AnalysisReport;
use crate::output::{OutputFormatter, relative_path};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

pub struct JsonOutput {
    pub project_root: Option<PathBuf>,
}

impl JsonOutput {
    pub fn new(project_root: Option<PathBuf>) -> Self {
        Self { project_root }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    project_name: &'a str,
    modules: Vec<JsonModule<'a>>,
    graph: JsonGraph<'a>,
    circular_dependencies: &'a [Vec<String>],
    coupling: &'a crate::analysis::CouplingMetrics,
    sizes: &'a crate::analysis::SizeSummary,
}

#[derive(Serialize)]
struct JsonModule<'a> {
    name: &'a str,
    path: String,
    size: u64,
    dependencies: &'a [String],
    exports: &'a [String],
}

#[derive(Serialize)]
struct JsonGraph<'a> {
    nodes: Vec<&'a str>,
    edges: Vec<JsonEdge<'a>>,
}

#[derive(Serialize)]
struct JsonEdge<'a> {
    source: &'a str,
    target: &'a str,
}

impl OutputFormatter for JsonOutput {
    fn format<W: Write>(&self, report: &AnalysisReport, writer: &mut W) -> std::io::Result<()> {
        let json_report = JsonReport {
            project_name: &report.project_name,
            modules: report
                .modules
                .iter()
                .map(|m| JsonModule {
                    name: &m.name,
                    path: relative_path(&m.path, self.project_root.as_ref()),
                    size: m.size,
                    dependencies: &m.dependencies,
                    exports: &m.exports,
                })
                .collect(),
            graph: JsonGraph {
                nodes: report.graph.nodes(),
                edges: report
                    .graph
                    .edges()
                    .into_iter()
                    .map(|(source, target)| JsonEdge { source, target })
                    .collect(),
            },
            circular_dependencies: &report.cycles,
            coupling: &report.coupling,
            sizes: &report.sizes,
        };

        let json = serde_json::to_string_pretty(&json_report).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)
    }
}
