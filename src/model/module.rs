use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One Angular NgModule, keyed by its `*.module.ts` declaration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// Module name: the declaration file's base name with `.module.ts` stripped.
    pub name: String,
    /// Absolute path of the declaration file.
    pub path: PathBuf,
    /// Aggregate byte size of all sibling files sharing the module's base name
    /// (component, service, template, ...).
    pub size: u64,
    /// Raw import specifiers as written in source, in order, duplicates kept.
    pub dependencies: Vec<String>,
    /// Specifiers of `export ... from` re-export declarations.
    pub exports: Vec<String>,
}

impl Module {
    pub fn new(path: PathBuf) -> Self {
        let name = module_name(&path);

        Self {
            name,
            path,
            size: 0,
            dependencies: Vec::new(),
            exports: Vec::new(),
        }
    }

    /// Directory containing the module's declaration file.
    pub fn folder(&self) -> PathBuf {
        self.path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| self.path.clone())
    }
}

/// Derive a module name from its declaration file path
/// (`foo.module.ts` -> `foo`).
pub fn module_name(path: &std::path::Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|s| s.trim_end_matches(".module.ts"))
        .unwrap_or("unknown")
        .to_string()
}
