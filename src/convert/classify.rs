use crate::config::LibraryConfig;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Unique parent directories of the given module declaration files, in
/// first-seen order.
pub fn module_folders(module_files: &[PathBuf]) -> Vec<PathBuf> {
    let mut folders: Vec<PathBuf> = Vec::new();

    for file in module_files {
        if let Some(folder) = file.parent() {
            if !folders.iter().any(|f| f == folder) {
                folders.push(folder.to_path_buf());
            }
        }
    }

    folders
}

/// A pattern matches when its literal prefix (trailing `/**` removed) appears
/// as a substring of the folder path. Single seam for the matching policy.
pub fn pattern_matches(pattern: &str, folder: &Path) -> bool {
    let prefix = pattern_prefix(pattern);
    folder.to_string_lossy().contains(prefix)
}

/// The pattern's match key: everything before a trailing `/**`.
pub fn pattern_prefix(pattern: &str) -> &str {
    pattern.strip_suffix("/**").unwrap_or(pattern)
}

/// Assign every module folder to exactly one library. Libraries are
/// evaluated in configured order, each library's patterns in order, first
/// match wins. Folders matching nothing land in the first configured library.
pub fn categorize_folders(
    folders: &[PathBuf],
    libraries: &[LibraryConfig],
) -> HashMap<String, Vec<PathBuf>> {
    let mut assignments: HashMap<String, Vec<PathBuf>> = libraries
        .iter()
        .map(|lib| (lib.name.clone(), Vec::new()))
        .collect();

    for folder in folders {
        let assigned = libraries.iter().find(|lib| {
            lib.patterns
                .iter()
                .any(|pattern| pattern_matches(pattern, folder))
        });

        match assigned {
            Some(lib) => assignments
                .get_mut(&lib.name)
                .expect("assignment buckets cover every library")
                .push(folder.clone()),
            None => {
                if let Some(first) = libraries.first() {
                    assignments
                        .get_mut(&first.name)
                        .expect("assignment buckets cover every library")
                        .push(folder.clone());
                }
            }
        }
    }

    assignments
}
