use crate::cli::ConvertArgs;
use crate::convert::{
    self, ConversionPlan, ProgressSink, categorize_folders, module_folders,
};
use crate::style;

use super::CommandContext;

/// Prints each phase as a status line.
struct TerminalProgress;

impl ProgressSink for TerminalProgress {
    fn report(&mut self, status: &str, percent: u8) {
        style::status(&format!("[{:>3}%] {}", percent, status));
    }
}

pub fn cmd_convert(args: ConvertArgs) -> i32 {
    let ctx = match CommandContext::new(&args.path) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    if let Err(e) = convert::validate_project(&ctx.path, &ctx.config) {
        style::error(&e.to_string());
        return 1;
    }

    if args.dry_run {
        return print_plan(&ctx, &args);
    }

    if let Err(e) = convert::check_cli() {
        style::error(&e.to_string());
        return 1;
    }

    if ctx.config.backup && !args.no_backup {
        match convert::create_backup(&ctx.path) {
            Ok(backup_path) => {
                style::success(&format!("Backup created at {}", style::path(&backup_path)));
            }
            Err(e) => {
                style::error(&format!("Backup failed: {}", e));
                return 1;
            }
        }
    }

    let mut progress = TerminalProgress;
    match convert::convert_to_libraries(&ctx.path, &args.destination, &ctx.config, &mut progress) {
        Ok(()) => {
            style::success("Successfully converted to libraries!");
            0
        }
        Err(e) => {
            style::error(&format!("Error during conversion: {}", e));
            1
        }
    }
}

fn print_plan(ctx: &CommandContext, args: &ConvertArgs) -> i32 {
    let scan_root = ctx.path.join(&ctx.config.source_root);
    let module_files = crate::analysis::walk_module_files(&scan_root);
    let folders = module_folders(&module_files);
    let assignments = categorize_folders(&folders, &ctx.config.libraries);
    let plan = ConversionPlan::build(&assignments, &ctx.config, &args.destination);

    if plan.is_empty() {
        println!("Nothing to move.");
        return 0;
    }

    println!("Planned moves ({}):", plan.len());
    for op in &plan.moves {
        println!(
            "  [{}] {} -> {}",
            op.library,
            op.from.display(),
            op.to.display()
        );
    }
    0
}
