//! File-based settings discovery for CLI use
//!
//! Layers project settings from defaults, a `kiln.toml` (or a `kiln` field in
//! `package.json`) and `KILN_*` environment variables, later layers winning.

use std::fs;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Serialized};
use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::settings::ProjectSettings;

pub const SETTINGS_FILE: &str = "kiln.toml";
pub const PACKAGE_JSON_FIELD: &str = "kiln";
pub const ENV_PREFIX: &str = "KILN_";

/// File-based settings discovery
///
/// # Example
///
/// ```no_run
/// use kiln_config::ConfigDiscovery;
///
/// let settings = ConfigDiscovery::new(".").load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a settings file in the root directory
    ///
    /// Searches in this order:
    /// 1. kiln.toml
    /// 2. package.json (kiln field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(SETTINGS_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed = serde_json::from_str::<Value>(&content).ok()?;
        parsed
            .get(PACKAGE_JSON_FIELD)
            .is_some_and(|field| !field.is_null())
            .then_some(pkg_path)
    }

    /// Load settings, falling back to defaults when no file is present.
    pub fn load(&self) -> Result<ProjectSettings> {
        let file = self.find();
        self.extract(file.as_deref())
    }

    /// Load settings, failing with `ConfigError::NotFound` when no file is present.
    pub fn load_required(&self) -> Result<ProjectSettings> {
        let file = self.find().ok_or(ConfigError::NotFound)?;
        self.extract(Some(&file))
    }

    /// Load settings from an explicit file instead of searching the root.
    pub fn load_from(&self, path: &Path) -> Result<ProjectSettings> {
        if !path.exists() {
            return Err(ConfigError::NotFound);
        }
        self.extract(Some(path))
    }

    fn extract(&self, file: Option<&Path>) -> Result<ProjectSettings> {
        let mut figment = Figment::new().merge(Serialized::defaults(ProjectSettings::default()));

        if let Some(path) = file {
            debug!(path = %path.display(), "loading project settings");
            let layer = if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
                package_json_field(path)?
            } else {
                toml_table(path)?
            };
            figment = figment.merge(Serialized::defaults(layer));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        let mut settings: ProjectSettings =
            figment.extract().map_err(|e| ConfigError::InvalidValue {
                field: "settings".to_string(),
                hint: Some(e.to_string()),
            })?;
        settings.root = self.root.clone();
        Ok(settings)
    }
}

fn toml_table(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;

    let table: toml::Table = toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
        field: "toml".to_string(),
        hint: Some(format!("Invalid TOML syntax in {}: {e}", path.display())),
    })?;

    serde_json::to_value(table).map_err(|e| ConfigError::InvalidValue {
        field: "toml".to_string(),
        hint: Some(format!("TOML to JSON conversion failed: {e}")),
    })
}

fn package_json_field(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;

    let parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
        field: "package.json".to_string(),
        hint: Some(format!("Invalid JSON: {e}")),
    })?;

    match parsed.get(PACKAGE_JSON_FIELD) {
        Some(value) if !value.is_null() => Ok(value.clone()),
        _ => Err(ConfigError::InvalidValue {
            field: PACKAGE_JSON_FIELD.to_string(),
            hint: Some("Add a 'kiln' field to your package.json".to_string()),
        }),
    }
}

/// Discover and load settings from the current directory
pub fn discover() -> Result<ProjectSettings> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_settings() {
        let dir = TempDir::new().unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn find_prefers_toml_over_package_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"kiln": {"port": 1}}"#).unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "port = 2\n").unwrap();
        assert_eq!(
            ConfigDiscovery::new(dir.path()).find().unwrap(),
            dir.path().join(SETTINGS_FILE)
        );
    }

    #[test]
    fn package_json_without_field_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"name": "app"}"#).unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn malformed_toml_names_the_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "port = [3000\n").unwrap();
        match ConfigDiscovery::new(dir.path()).load() {
            Err(ConfigError::InvalidValue { field, hint }) => {
                assert_eq!(field, "toml");
                assert!(hint.unwrap().contains(SETTINGS_FILE));
            }
            other => panic!("expected a TOML syntax error, got {other:?}"),
        }
    }

    #[test]
    fn load_required_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = ConfigDiscovery::new(dir.path()).load_required();
        assert!(matches!(result, Err(ConfigError::NotFound)));
    }
}
