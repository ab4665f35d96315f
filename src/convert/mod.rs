mod backup;
mod classify;
mod manifest;
mod plan;
mod progress;
mod rewrite;
mod scaffold;
mod validate;

pub use backup::create_backup;
pub use classify::{categorize_folders, module_folders, pattern_matches, pattern_prefix};
pub use manifest::{regenerate_public_api, render_public_api};
pub use plan::{ConversionPlan, MoveOp, move_dir};
pub use progress::{NoopProgress, ProgressSink};
pub use rewrite::{Edit, apply_edits, rewrite_import_path, rewrite_source, rewrite_tree};
pub use scaffold::{check_cli, generate_library};
pub use validate::validate_project;

use crate::analysis::walk_module_files;
use crate::config::Config;
use crate::fs::{FileSystem, default_fs};
use crate::parser::ParseError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// Structural prerequisites not met; nothing has been mutated.
    #[error("{0}")]
    Validation(String),

    /// The scaffolding tool is missing; nothing has been mutated.
    #[error("{0}")]
    ToolUnavailable(String),

    /// The scaffolding tool exited non-zero; its error text is kept verbatim.
    #[error("Failed to generate library '{library}': {stderr}")]
    Scaffold { library: String, stderr: String },

    /// A destination folder already exists and overwriting was not allowed.
    #[error("Destination already exists: {destination}")]
    MoveConflict { destination: PathBuf },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl From<std::io::Error> for ConvertError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            path: PathBuf::new(),
            source,
        }
    }
}

/// Convert a monolithic Angular app into libraries: scaffold each configured
/// library in the destination, classify module folders, move them, rewrite
/// imports project-wide, and regenerate each library's public API.
///
/// Phases run strictly in sequence and assume exclusive access to both
/// trees; a failure mid-move leaves earlier moves applied (no rollback).
pub fn convert_to_libraries(
    source: &Path,
    destination: &Path,
    config: &Config,
    progress: &mut dyn ProgressSink,
) -> Result<(), ConvertError> {
    convert_with_fs(source, destination, config, progress, default_fs())
}

pub fn convert_with_fs(
    source: &Path,
    destination: &Path,
    config: &Config,
    progress: &mut dyn ProgressSink,
    fs: &dyn FileSystem,
) -> Result<(), ConvertError> {
    progress.report("Analyzing project structure...", 10);
    let module_files = walk_module_files(&source.join(&config.source_root));
    let folders = module_folders(&module_files);

    progress.report("Creating library projects...", 20);
    for library in &config.libraries {
        generate_library(destination, &library.name)?;
    }

    progress.report("Categorizing modules...", 30);
    let assignments = categorize_folders(&folders, &config.libraries);

    progress.report("Moving modules to libraries...", 50);
    let plan = ConversionPlan::build(&assignments, config, destination);
    let total = plan.len();
    for (moved, op) in plan.moves.iter().enumerate() {
        move_dir(&op.from, &op.to, true)?;
        let percent = 50 + ((moved + 1) * 20 / total.max(1)) as u8;
        progress.report(
            &format!("Moving modules ({}/{})...", moved + 1, total),
            percent,
        );
    }

    progress.report("Updating import paths...", 70);
    rewrite_tree(destination, config, fs)?;

    progress.report("Updating library public APIs...", 90);
    for library in &config.libraries {
        regenerate_public_api(destination, &library.name, fs)?;
    }

    progress.report("Finalizing...", 100);
    Ok(())
}
