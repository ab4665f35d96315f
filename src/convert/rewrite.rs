use crate::config::Config;
use crate::convert::classify::pattern_prefix;
use crate::convert::ConvertError;
use crate::fs::FileSystem;
use crate::parser;
use ignore::WalkBuilder;
use std::path::Path;

/// A single splice: replace `start..end` with `replacement`.
#[derive(Debug, Clone, PartialEq)]
pub struct Edit {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

/// Compute the library-scoped alias for one raw import path, or `None` when
/// the import is left untouched. An import under the source root whose
/// remainder starts with a library pattern prefix becomes
/// `@<library>/<remainder-after-prefix>`.
pub fn rewrite_import_path(import_path: &str, config: &Config) -> Option<String> {
    // Relative imports still reach into the source root ("../../src/app/..."),
    // so the root is located at any path-segment boundary, not only offset 0.
    let source_prefix = format!("{}/", config.source_root);
    let pos = import_path.find(&source_prefix)?;
    if pos > 0 && !import_path[..pos].ends_with('/') {
        return None;
    }
    let remainder = &import_path[pos + source_prefix.len()..];

    for library in &config.libraries {
        for pattern in &library.patterns {
            let prefix = pattern_prefix(pattern);
            if remainder.starts_with(prefix) {
                let rest = remainder
                    .strip_prefix(prefix)
                    .and_then(|r| r.strip_prefix('/'))
                    .unwrap_or(remainder);
                return Some(format!("@{}/{}", library.name, rest));
            }
        }
    }

    None
}

/// Rewrite every import declaration in one source file. Returns the new
/// content, or `None` when nothing changed.
pub fn rewrite_source(source: &str, config: &Config) -> Result<Option<String>, ConvertError> {
    let decls = parser::scan_declarations(source)?;

    let mut edits: Vec<Edit> = Vec::new();
    for import in &decls.imports {
        if let Some(replacement) = rewrite_import_path(&import.specifier, config) {
            if replacement != import.specifier {
                edits.push(Edit {
                    start: import.start,
                    end: import.end,
                    replacement,
                });
            }
        }
    }

    if edits.is_empty() {
        return Ok(None);
    }

    Ok(Some(apply_edits(source, edits)))
}

/// Apply edits in descending start order so earlier splices never shift the
/// offsets of the ones still pending. This ordering is load-bearing.
pub fn apply_edits(source: &str, mut edits: Vec<Edit>) -> String {
    edits.sort_by(|a, b| b.start.cmp(&a.start));

    let mut result = source.to_string();
    for edit in edits {
        result.replace_range(edit.start..edit.end, &edit.replacement);
    }
    result
}

/// Rewrite imports across every `.ts` file under `root`, skipping dependency
/// and build-output trees. Only files whose content actually changes are
/// written back.
pub fn rewrite_tree(root: &Path, config: &Config, fs: &dyn FileSystem) -> Result<usize, ConvertError> {
    let mut rewritten = 0;

    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| {
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| name != "node_modules" && name != "dist")
        })
        .build();

    for entry in walker.flatten() {
        let path = entry.path();
        let is_ts = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == "ts");
        if !path.is_file() || !is_ts {
            continue;
        }

        let source = fs.read_to_string(path).map_err(|source| ConvertError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(updated) = rewrite_source(&source, config)? {
            fs.write(path, &updated).map_err(|source| ConvertError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            rewritten += 1;
        }
    }

    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LibraryConfig};

    fn config() -> Config {
        Config {
            source_root: "src/app".to_string(),
            libraries: vec![
                LibraryConfig::new("shared", &["shared/**"]),
                LibraryConfig::new("core", &["core/**"]),
            ],
            backup: false,
        }
    }

    #[test]
    fn source_root_import_becomes_library_alias() {
        assert_eq!(
            rewrite_import_path("src/app/shared/x", &config()).as_deref(),
            Some("@shared/x")
        );
    }

    #[test]
    fn relative_import_through_source_root_is_rewritten() {
        assert_eq!(
            rewrite_import_path("../../src/app/shared/x", &config()).as_deref(),
            Some("@shared/x")
        );
    }

    #[test]
    fn import_outside_source_root_is_untouched() {
        assert_eq!(rewrite_import_path("@angular/core", &config()), None);
        assert_eq!(rewrite_import_path("rxjs/operators", &config()), None);
    }

    #[test]
    fn import_with_no_matching_pattern_is_untouched() {
        assert_eq!(rewrite_import_path("src/app/legacy/x", &config()), None);
    }

    #[test]
    fn rewrite_leaves_unmatched_file_byte_identical() {
        let source = "import { A } from 'rxjs';\nimport { B } from './local';\n";
        assert!(rewrite_source(source, &config()).unwrap().is_none());
    }

    #[test]
    fn rewrites_multiple_imports_in_one_pass() {
        let source = "import { A } from 'src/app/shared/deep/a';\n\
                      import { B } from 'src/app/core/b';\n";
        let updated = rewrite_source(source, &config()).unwrap().unwrap();
        assert_eq!(
            updated,
            "import { A } from '@shared/deep/a';\nimport { B } from '@core/b';\n"
        );
    }

    #[test]
    fn descending_offset_application_keeps_earlier_spans_intact() {
        // The first statement's replacement is longer than the original;
        // applying edits front-to-back would corrupt the second span.
        let source = "import { A } from 'src/app/shared/abcdefghijklmnop';\n\
                      import { B } from 'src/app/core/b';\n";
        let updated = rewrite_source(source, &config()).unwrap().unwrap();
        assert_eq!(
            updated,
            "import { A } from '@shared/abcdefghijklmnop';\nimport { B } from '@core/b';\n"
        );
    }

    #[test]
    fn apply_edits_is_order_independent() {
        let source = "0123456789";
        let edits = vec![
            Edit {
                start: 1,
                end: 3,
                replacement: "XXXX".to_string(),
            },
            Edit {
                start: 7,
                end: 8,
                replacement: "Y".to_string(),
            },
        ];
        assert_eq!(apply_edits(source, edits), "0XXXX3456Y89");
    }

    #[test]
    fn rewrite_tree_only_writes_changed_files() {
        use crate::fs::mock::MockFs;

        let tmp = tempfile::tempdir().unwrap();
        let changed = tmp.path().join("uses-shared.ts");
        let untouched = tmp.path().join("plain.ts");
        std::fs::write(&changed, "import { A } from 'src/app/shared/a';\n").unwrap();
        std::fs::write(&untouched, "import { B } from 'rxjs';\n").unwrap();

        // Read from disk, record writes in the mock overlay.
        struct Overlay<'a> {
            writes: &'a MockFs,
        }
        impl crate::fs::FileSystem for Overlay<'_> {
            fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
                std::fs::read_to_string(path)
            }
            fn write(&self, path: &Path, content: &str) -> std::io::Result<()> {
                self.writes.write(path, content)
            }
            fn exists(&self, path: &Path) -> bool {
                path.exists()
            }
        }

        let writes = MockFs::new();
        let fs = Overlay { writes: &writes };
        let count = rewrite_tree(tmp.path(), &config(), &fs).unwrap();

        assert_eq!(count, 1);
        assert!(writes.exists(&changed));
        assert!(!writes.exists(&untouched));
    }
}
