use crate::model::Module;
use crate::parser::{self, ParseError};
use ignore::WalkBuilder;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Discover every `*.module.ts` file under `root/source_root` and build one
/// `Module` record per file. Discovery order is the sorted recursive walk,
/// so a fixed tree always yields the same module ordering.
pub fn scan_modules(root: &Path, source_root: &str) -> Result<Vec<Module>, ScanError> {
    let scan_root = root.join(source_root);
    let mut modules = Vec::new();

    for path in walk_module_files(&scan_root) {
        let source = std::fs::read_to_string(&path).map_err(|source| ScanError::Io {
            path: path.clone(),
            source,
        })?;

        let decls = parser::scan_declarations(&source)?;

        let mut module = Module::new(path);
        module.size = module_size(&module)?;
        module.dependencies = decls.imports.into_iter().map(|i| i.specifier).collect();
        module.exports = decls.reexports;
        modules.push(module);
    }

    Ok(modules)
}

/// Sorted recursive enumeration of module declaration files.
pub fn walk_module_files(root: &Path) -> Vec<std::path::PathBuf> {
    let mut files = Vec::new();

    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for entry in walker.flatten() {
        let path = entry.path();
        if path.is_file() && is_module_file(path) {
            files.push(path.to_path_buf());
        }
    }

    files
}

pub fn is_module_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .is_some_and(|name| name.ends_with(".module.ts"))
}

/// Sum the byte sizes of every sibling file sharing the module's base name
/// (`auth.module.ts`, `auth.component.ts`, `auth.component.html`, ...).
/// A directory that cannot be listed is an error, never a zero size.
fn module_size(module: &Module) -> Result<u64, ScanError> {
    let dir = module.folder();
    let prefix = format!("{}.", module.name);
    let mut total = 0;

    let entries = std::fs::read_dir(&dir).map_err(|source| ScanError::Io {
        path: dir.clone(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| ScanError::Io {
            path: dir.clone(),
            source,
        })?;
        let name = entry.file_name();
        if name.to_str().is_some_and(|n| n.starts_with(&prefix)) {
            let meta = entry.metadata().map_err(|source| ScanError::Io {
                path: entry.path(),
                source,
            })?;
            if meta.is_file() {
                total += meta.len();
            }
        }
    }

    Ok(total)
}
