use crate::analysis::walk_module_files;
use crate::config::Config;
use crate::convert::ConvertError;
use std::path::Path;

/// Check structural prerequisites before the pipeline mutates anything:
/// `angular.json`, Angular dependencies in `package.json`, the configured
/// source root, and at least one module declaration file.
pub fn validate_project(project: &Path, config: &Config) -> Result<(), ConvertError> {
    if !project.join("angular.json").exists() {
        return Err(ConvertError::Validation(
            "Not a valid Angular project: angular.json not found".to_string(),
        ));
    }

    let package_json = project.join("package.json");
    if !package_json.exists() {
        return Err(ConvertError::Validation(
            "package.json not found".to_string(),
        ));
    }

    let content = std::fs::read_to_string(&package_json).map_err(|source| ConvertError::Io {
        path: package_json.clone(),
        source,
    })?;
    let package: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| ConvertError::Validation(format!("package.json is not valid JSON: {e}")))?;

    let has_angular_deps = package
        .get("dependencies")
        .and_then(|deps| deps.as_object())
        .is_some_and(|deps| {
            deps.contains_key("@angular/core") || deps.contains_key("@angular/common")
        });
    if !has_angular_deps {
        return Err(ConvertError::Validation(
            "No Angular dependencies found in package.json".to_string(),
        ));
    }

    let source_root = project.join(&config.source_root);
    if !source_root.is_dir() {
        return Err(ConvertError::Validation(format!(
            "{} directory not found",
            config.source_root
        )));
    }

    if walk_module_files(&source_root).is_empty() {
        return Err(ConvertError::Validation(
            "No Angular modules found in the project".to_string(),
        ));
    }

    Ok(())
}
