use crate::model::AnalysisReport;
use crate::output::{OutputFormatter, relative_path};
use std::io::Write;
use std::path::PathBuf;

pub struct MarkdownOutput {
    pub project_root: Option<PathBuf>,
}

impl MarkdownOutput {
    pub fn new(project_root: Option<PathBuf>) -> Self {
        Self { project_root }
    }
}

impl OutputFormatter for MarkdownOutput {
    fn format<W: Write>(&self, report: &AnalysisReport, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "# Module Analysis: {}\n", report.project_name)?;

        writeln!(writer, "## Modules\n")?;
        for module in &report.modules {
            let rel_path = relative_path(&module.path, self.project_root.as_ref());
            writeln!(
                writer,
                "- `{}` ({} bytes, {} imports) — `{}`",
                module.name,
                module.size,
                module.dependencies.len(),
                rel_path
            )?;
        }
        writeln!(
            writer,
            "\n{} modules, total {} bytes, average {:.0} bytes",
            report.modules.len(),
            report.sizes.total_size,
            report.sizes.average_size
        )?;

        writeln!(writer, "\n## Dependency Graph\n")?;
        let edges = report.graph.edges();
        if edges.is_empty() {
            writeln!(writer, "No internal dependencies resolved.")?;
        } else {
            for (source, target) in &edges {
                writeln!(writer, "- `{}` → `{}`", source, target)?;
            }
        }

        writeln!(writer, "\n## Circular Dependencies\n")?;
        if report.cycles.is_empty() {
            writeln!(writer, "None detected.")?;
        } else {
            for cycle in &report.cycles {
                writeln!(writer, "- 🔴 {}", cycle.join(" → "))?;
            }
        }

        writeln!(writer, "\n## Coupling\n")?;
        writeln!(writer, "| Module | Afferent | Efferent | Instability |")?;
        writeln!(writer, "|--------|----------|----------|-------------|")?;
        for node in report.graph.nodes() {
            writeln!(
                writer,
                "| `{}` | {} | {} | {:.2} |",
                node,
                report.coupling.afferent.get(node).copied().unwrap_or(0),
                report.coupling.efferent.get(node).copied().unwrap_or(0),
                report.coupling.instability.get(node).copied().unwrap_or(0.0),
            )?;
        }

        Ok(())
    }
}
