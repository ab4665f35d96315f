use crate::convert::ConvertError;
use std::path::{Path, PathBuf};

/// Copy the project tree to `<project>-backup-<timestamp>` before any
/// mutation, skipping `node_modules`. Returns the backup location.
pub fn create_backup(project: &Path) -> Result<PathBuf, ConvertError> {
    let timestamp = chrono::Local::now().format("%Y-%m-%dT%H-%M-%S");
    let backup_path = PathBuf::from(format!("{}-backup-{}", project.display(), timestamp));

    copy_tree_excluding(project, &backup_path, "node_modules").map_err(|source| {
        ConvertError::Io {
            path: backup_path.clone(),
            source,
        }
    })?;

    Ok(backup_path)
}

fn copy_tree_excluding(from: &Path, to: &Path, excluded: &str) -> std::io::Result<()> {
    std::fs::create_dir_all(to)?;
    for entry in std::fs::read_dir(from)? {
        let entry = entry?;
        if entry.file_name().to_str() == Some(excluded) {
            continue;
        }
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree_excluding(&entry.path(), &target, excluded)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
