use crate::analysis::walk_module_files;
use crate::convert::ConvertError;
use crate::fs::FileSystem;
use std::path::Path;

/// Regenerate `projects/<library>/src/public-api.ts`: one re-export line per
/// module declaration file found under the library's `lib` folder, in walk
/// order. A library with zero modules gets an empty manifest.
pub fn regenerate_public_api(
    destination: &Path,
    library: &str,
    fs: &dyn FileSystem,
) -> Result<(), ConvertError> {
    let lib_src = destination.join("projects").join(library).join("src");
    let manifest_path = lib_src.join("public-api.ts");

    let content = render_public_api(&lib_src);

    fs.write(&manifest_path, &content)
        .map_err(|source| ConvertError::Io {
            path: manifest_path,
            source,
        })
}

/// Manifest body: paths are relative to the library's `src` folder with the
/// `.ts` extension stripped.
pub fn render_public_api(lib_src: &Path) -> String {
    let modules = walk_module_files(&lib_src.join("lib"));

    let exports: Vec<String> = modules
        .iter()
        .filter_map(|module| {
            let relative = module.strip_prefix(lib_src).ok()?;
            let spec = relative.to_string_lossy();
            let spec = spec.strip_suffix(".ts").unwrap_or(&spec);
            Some(format!("export * from './{}';", spec))
        })
        .collect();

    exports.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFs;
    use std::fs;

    #[test]
    fn one_export_line_per_module() {
        let tmp = tempfile::tempdir().unwrap();
        let lib_src = tmp.path().join("projects/shared/src");
        fs::create_dir_all(lib_src.join("lib/auth")).unwrap();
        fs::create_dir_all(lib_src.join("lib/ui")).unwrap();
        fs::write(lib_src.join("lib/auth/auth.module.ts"), "").unwrap();
        fs::write(lib_src.join("lib/ui/ui.module.ts"), "").unwrap();

        let body = render_public_api(&lib_src);
        assert_eq!(
            body,
            "export * from './lib/auth/auth.module';\nexport * from './lib/ui/ui.module';"
        );
    }

    #[test]
    fn empty_library_produces_empty_manifest() {
        let tmp = tempfile::tempdir().unwrap();
        let lib_src = tmp.path().join("projects/core/src");
        fs::create_dir_all(lib_src.join("lib")).unwrap();

        assert_eq!(render_public_api(&lib_src), "");

        let writes = MockFs::new();
        regenerate_public_api(tmp.path(), "core", &writes).unwrap();
        let manifest = tmp.path().join("projects/core/src/public-api.ts");
        assert_eq!(writes.read_to_string(&manifest).unwrap(), "");
    }

    #[test]
    fn non_module_files_are_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        let lib_src = tmp.path().join("projects/shared/src");
        fs::create_dir_all(lib_src.join("lib/auth")).unwrap();
        fs::write(lib_src.join("lib/auth/auth.module.ts"), "").unwrap();
        fs::write(lib_src.join("lib/auth/auth.service.ts"), "").unwrap();

        let body = render_public_api(&lib_src);
        assert_eq!(body, "export * from './lib/auth/auth.module';");
    }
}
