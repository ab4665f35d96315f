use crate::cli::InitArgs;
use crate::config::{CONFIG_FILE, generate_config_template};
use crate::fs::{FileSystem, default_fs};
use crate::style;

pub fn cmd_init(args: InitArgs) -> i32 {
    cmd_init_with_fs(args, default_fs())
}

pub fn cmd_init_with_fs(args: InitArgs, fs: &dyn FileSystem) -> i32 {
    let config_path = args.path.join(CONFIG_FILE);
    if fs.exists(&config_path) {
        style::error(&format!(
            "{} already exists at {}",
            CONFIG_FILE,
            style::path(&config_path)
        ));
        return 1;
    }

    let template = generate_config_template();
    if let Err(e) = fs.write(&config_path, &template) {
        style::error(&format!("Failed to write config file: {}", e));
        return 1;
    }

    style::success(&format!(
        "Created {} at {}",
        CONFIG_FILE,
        style::path(&config_path)
    ));
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFs;
    use std::path::PathBuf;

    #[test]
    fn writes_template_once() {
        let fs = MockFs::new();
        let args = InitArgs {
            path: PathBuf::from("/proj"),
        };

        assert_eq!(cmd_init_with_fs(args.clone(), &fs), 0);
        assert!(fs.exists(&PathBuf::from("/proj/.ngsplit.toml")));

        // Second run refuses to clobber.
        assert_eq!(cmd_init_with_fs(args, &fs), 1);
    }
}
