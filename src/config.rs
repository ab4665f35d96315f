use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = ".ngsplit.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One target library: a name plus ordered path patterns. A pattern's
/// literal prefix (the text before a trailing `/**`) is the match key, and
/// evaluation order is significant: first match wins.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryConfig {
    pub name: String,
    pub patterns: Vec<String>,
}

impl LibraryConfig {
    pub fn new(name: impl Into<String>, patterns: &[&str]) -> Self {
        Self {
            name: name.into(),
            patterns: patterns.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Source root relative to the project, e.g. `src/app`.
    pub source_root: String,
    /// Ordered target libraries; the first doubles as the fallback bucket
    /// for folders no pattern matches.
    pub libraries: Vec<LibraryConfig>,
    /// Copy the project aside before converting.
    pub backup: bool,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    source_root: Option<String>,
    backup: Option<bool>,
    libraries: Option<Vec<RawLibrary>>,
}

#[derive(Debug, Deserialize)]
struct RawLibrary {
    name: String,
    patterns: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: "src/app".to_string(),
            libraries: vec![
                LibraryConfig::new("shared", &["shared/**"]),
                LibraryConfig::new("core", &["core/**"]),
                LibraryConfig::new("feature", &["feature/**"]),
            ],
            backup: true,
        }
    }
}

impl Config {
    /// Load `.ngsplit.toml` from the project root; a missing file yields the
    /// defaults, any other failure propagates.
    pub fn load(project_path: &Path) -> Result<Self, ConfigError> {
        let config_path = project_path.join(CONFIG_FILE);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let raw: RawConfig = toml::from_str(&content)?;
        let defaults = Self::default();

        let libraries = match raw.libraries {
            Some(libs) if !libs.is_empty() => libs
                .into_iter()
                .map(|l| LibraryConfig {
                    name: l.name,
                    patterns: l.patterns,
                })
                .collect(),
            _ => defaults.libraries,
        };

        Ok(Self {
            source_root: raw.source_root.unwrap_or(defaults.source_root),
            libraries,
            backup: raw.backup.unwrap_or(defaults.backup),
        })
    }
}

pub fn generate_config_template() -> String {
    r#"# ngsplit configuration

# Source root of the Angular app, relative to the project.
source_root = "src/app"

# Copy the project aside before converting.
backup = true

# Target libraries in evaluation order. A module folder goes to the first
# library with a matching pattern; folders matching nothing fall back to the
# first library listed here.
[[libraries]]
name = "shared"
patterns = ["shared/**"]

[[libraries]]
name = "core"
patterns = ["core/**"]

[[libraries]]
name = "feature"
patterns = ["feature/**"]
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.source_root, "src/app");
        assert_eq!(config.libraries.len(), 3);
        assert!(config.backup);
    }

    #[test]
    fn template_round_trips_through_load() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), generate_config_template()).unwrap();

        let config = Config::load(tmp.path()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.source_root, defaults.source_root);
        assert_eq!(config.libraries, defaults.libraries);
        assert_eq!(config.backup, defaults.backup);
    }

    #[test]
    fn partial_config_keeps_defaults_for_the_rest() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "backup = false\n").unwrap();

        let config = Config::load(tmp.path()).unwrap();
        assert!(!config.backup);
        assert_eq!(config.source_root, "src/app");
    }

    #[test]
    fn malformed_config_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "libraries = 3\n").unwrap();

        assert!(matches!(
            Config::load(tmp.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
