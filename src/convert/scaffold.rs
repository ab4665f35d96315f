use crate::convert::ConvertError;
use std::path::Path;
use std::process::Command;

/// Probe for the Angular CLI. Missing or broken `ng` aborts before any
/// mutation.
pub fn check_cli() -> Result<(), ConvertError> {
    let status = Command::new("ng")
        .arg("version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status();

    match status {
        Ok(status) if status.success() => Ok(()),
        _ => Err(ConvertError::ToolUnavailable(
            "Angular CLI is not installed. Install it with: npm install -g @angular/cli"
                .to_string(),
        )),
    }
}

/// Scaffold one library package at `projects/<name>` via
/// `ng generate library <name> --skip-install`, run in the destination
/// directory. A non-zero exit aborts the run with the tool's stderr verbatim.
pub fn generate_library(destination: &Path, name: &str) -> Result<(), ConvertError> {
    let output = Command::new("ng")
        .args(["generate", "library", name, "--skip-install"])
        .current_dir(destination)
        .output()
        .map_err(|source| ConvertError::Io {
            path: destination.to_path_buf(),
            source,
        })?;

    if !output.status.success() {
        return Err(ConvertError::Scaffold {
            library: name.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(())
}
