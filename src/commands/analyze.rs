use crate::cli::{AnalyzeArgs, OutputFormat};
use crate::output::{JsonOutput, MarkdownOutput, OutputFormatter};
use crate::style;
use std::io::{self, Write};

use super::CommandContext;

pub fn cmd_analyze(args: AnalyzeArgs) -> i32 {
    let ctx = match CommandContext::new(&args.path) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    let source_root = args
        .source_root
        .as_deref()
        .unwrap_or(&ctx.config.source_root);

    let report = match crate::analysis::analyze(&ctx.path, source_root) {
        Ok(report) => report,
        Err(e) => {
            style::error(&format!("Analysis failed: {}", e));
            return 1;
        }
    };

    let mut buffer = Vec::new();
    let format_result = match args.format {
        OutputFormat::Markdown => {
            MarkdownOutput::new(Some(ctx.path.clone())).format(&report, &mut buffer)
        }
        OutputFormat::Json => JsonOutput::new(Some(ctx.path.clone())).format(&report, &mut buffer),
    };

    if let Err(e) = format_result {
        style::error(&format!("Failed to format output: {}", e));
        return 1;
    }

    let output_str = String::from_utf8_lossy(&buffer);

    let write_result = match &args.output {
        Some(output_path) => std::fs::write(output_path, output_str.as_bytes()),
        None if args.format == OutputFormat::Markdown => {
            style::render_markdown(&output_str, &mut io::stdout())
        }
        None => write!(io::stdout(), "{}", output_str),
    };

    if let Err(e) = write_result {
        style::error(&format!("Failed to write output: {}", e));
        return 1;
    }

    // Exit code 1 when cycles exist, so CI can gate on circular dependencies.
    if report.cycles.is_empty() { 0 } else { 1 }
}
