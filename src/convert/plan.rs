use crate::config::Config;
use crate::convert::ConvertError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One folder relocation, resolved before any mutation happens.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOp {
    pub library: String,
    pub from: PathBuf,
    pub to: PathBuf,
}

/// The staged set of moves for one conversion run. Computing the plan is
/// pure, so it can back a dry run; `apply` performs the relocations in plan
/// order.
#[derive(Debug, Clone, Default)]
pub struct ConversionPlan {
    pub moves: Vec<MoveOp>,
}

impl ConversionPlan {
    /// Resolve assignments into concrete destinations, iterating libraries in
    /// configured order. Destination: `projects/<lib>/src/lib/<basename>`.
    pub fn build(
        assignments: &HashMap<String, Vec<PathBuf>>,
        config: &Config,
        destination: &Path,
    ) -> Self {
        let mut moves = Vec::new();

        for library in &config.libraries {
            let Some(folders) = assignments.get(&library.name) else {
                continue;
            };
            for folder in folders {
                let base = folder.file_name().unwrap_or(folder.as_os_str());
                let to = destination
                    .join("projects")
                    .join(&library.name)
                    .join("src")
                    .join("lib")
                    .join(base);

                moves.push(MoveOp {
                    library: library.name.clone(),
                    from: folder.clone(),
                    to,
                });
            }
        }

        Self { moves }
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Execute the plan. With `overwrite` a colliding destination folder is
    /// replaced (last-moved wins); without it the collision is an error.
    /// There is no rollback: a failure mid-plan leaves earlier moves applied.
    pub fn apply(&self, overwrite: bool) -> Result<(), ConvertError> {
        for op in &self.moves {
            move_dir(&op.from, &op.to, overwrite)?;
        }
        Ok(())
    }
}

/// Relocate a directory, creating parent directories as needed. Falls back
/// to copy-and-remove when a plain rename fails (e.g. across filesystems).
pub fn move_dir(from: &Path, to: &Path, overwrite: bool) -> Result<(), ConvertError> {
    if to.exists() {
        if !overwrite {
            return Err(ConvertError::MoveConflict {
                destination: to.to_path_buf(),
            });
        }
        std::fs::remove_dir_all(to)?;
    }

    if let Some(parent) = to.parent() {
        std::fs::create_dir_all(parent)?;
    }

    match std::fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(_) => {
            copy_dir_recursive(from, to)?;
            std::fs::remove_dir_all(from)?;
            Ok(())
        }
    }
}

pub fn copy_dir_recursive(from: &Path, to: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(to)?;
    for entry in std::fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LibraryConfig};
    use std::fs;

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
    fn plan_targets_projects_layout() {
        let mut assignments = HashMap::new();
        assignments.insert(
            "shared".to_string(),
            vec![PathBuf::from("/proj/src/app/shared/widgets")],
        );
        assignments.insert("core".to_string(), Vec::new());

        let plan = ConversionPlan::build(&assignments, &config(), Path::new("/out"));
        assert_eq!(plan.len(), 1);
        assert_eq!(
            plan.moves[0].to,
            PathBuf::from("/out/projects/shared/src/lib/widgets")
        );
    }

    #[test]
    fn plan_follows_library_config_order() {
        let mut assignments = HashMap::new();
        assignments.insert("core".to_string(), vec![PathBuf::from("/p/core/auth")]);
        assignments.insert("shared".to_string(), vec![PathBuf::from("/p/shared/ui")]);

        let plan = ConversionPlan::build(&assignments, &config(), Path::new("/out"));
        let libs: Vec<_> = plan.moves.iter().map(|m| m.library.as_str()).collect();
        assert_eq!(libs, vec!["shared", "core"]);
    }

    #[test]
    fn move_dir_relocates_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let from = tmp.path().join("widgets");
        fs::create_dir_all(from.join("nested")).unwrap();
        fs::write(from.join("nested/widget.ts"), "export {};").unwrap();

        let to = tmp.path().join("out/lib/widgets");
        move_dir(&from, &to, true).unwrap();

        assert!(!from.exists());
        assert!(to.join("nested/widget.ts").exists());
    }

    #[test]
    fn collision_without_overwrite_is_a_conflict() {
        let tmp = tempfile::tempdir().unwrap();
        let from = tmp.path().join("a");
        let to = tmp.path().join("b");
        fs::create_dir_all(&from).unwrap();
        fs::create_dir_all(&to).unwrap();

        let err = move_dir(&from, &to, false).unwrap_err();
        assert!(matches!(err, ConvertError::MoveConflict { .. }));
    }

    #[test]
    fn collision_with_overwrite_replaces_destination() {
        let tmp = tempfile::tempdir().unwrap();
        let from = tmp.path().join("a");
        let to = tmp.path().join("b");
        fs::create_dir_all(&from).unwrap();
        fs::write(from.join("new.ts"), "new").unwrap();
        fs::create_dir_all(&to).unwrap();
        fs::write(to.join("old.ts"), "old").unwrap();

        move_dir(&from, &to, true).unwrap();
        assert!(to.join("new.ts").exists());
        assert!(!to.join("old.ts").exists());
    }
}
