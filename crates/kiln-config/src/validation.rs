//! Pluggable config validation strategies
//!
//! Separates structural checks of a derived configuration from checks of the
//! inputs it points at on disk.

use std::path::{Path, PathBuf};

use crate::config::BuildConfig;
use crate::error::{ConfigError, Result};
use crate::plugin::PluginDescriptor;
use crate::settings::is_relative_specifier;

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Structural validation (no filesystem checks)
///
/// Catches hand-edited or deserialized configurations that break the ordering
/// and mode invariants the derivation guarantees.
///
/// # Example
///
/// ```
/// use kiln_config::{BuildConfig, ConfigValidator, Mode, SchemaValidator};
///
/// let config = BuildConfig::for_mode(Mode::Development);
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        if config.entry.is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "no entries specified".to_string(),
                hint: Some("Add at least one module to 'entry'".to_string()),
            });
        }

        for ext in &config.resolve.extensions {
            if ext.len() < 2 || !ext.starts_with('.') {
                return Err(ConfigError::SchemaValidation {
                    message: format!("resolve extension '{ext}' is not of the form '.ext'"),
                    hint: None,
                });
            }
        }

        for (index, plugin) in config.plugins.iter().enumerate() {
            if config.plugins[..index].iter().any(|p| p.name() == plugin.name()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("plugin '{}' appears more than once", plugin.name()),
                    hint: None,
                });
            }
        }

        let position = |name: &str| config.plugins.iter().position(|p| p.name() == name);

        if position("clean").is_none() {
            return Err(ConfigError::SchemaValidation {
                message: "output cleaner is missing from the plugin set".to_string(),
                hint: Some(
                    "Stale hashed files accumulate in the output directory without it".to_string(),
                ),
            });
        }

        if let Some(analyzer) = position("bundle-analyzer") {
            if analyzer != config.plugins.len() - 1 {
                return Err(ConfigError::SchemaValidation {
                    message: "bundle analyzer must be the last plugin".to_string(),
                    hint: Some("Move it after every emitting plugin".to_string()),
                });
            }
        }

        let has_analyzer = config.plugins.iter().any(PluginDescriptor::is_analyzer);
        if has_analyzer != config.mode.is_prod() {
            return Err(ConfigError::SchemaValidation {
                message: format!(
                    "bundle analyzer {} in {} mode",
                    if has_analyzer { "present" } else { "missing" },
                    config.mode
                ),
                hint: Some("The analyzer runs in production builds only".to_string()),
            });
        }

        if config.output.filename.has_hash_pattern() != config.mode.is_prod() {
            return Err(ConfigError::SchemaValidation {
                message: format!(
                    "output filename '{}' does not match {} naming",
                    config.output.filename, config.mode
                ),
                hint: Some("Production names embed [contenthash]; development names do not".to_string()),
            });
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Checks that the source root, local entry scripts and the HTML template
/// exist.
///
/// # Example
///
/// ```no_run
/// use kiln_config::{BuildConfig, ConfigValidator, FsValidator, Mode};
///
/// let config = BuildConfig::for_mode(Mode::Production);
/// FsValidator::new(".").validate(&config).unwrap();
/// ```
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        let context = self.root.join(&config.context);
        if !context.is_dir() {
            return Err(ConfigError::ContextNotFound { path: context });
        }

        for entry in config.entry.iter().filter(|e| is_relative_specifier(e)) {
            let path = context.join(entry);
            if !path.is_file() {
                return Err(ConfigError::EntryNotFound { path });
            }
        }

        for plugin in &config.plugins {
            if let PluginDescriptor::Html(html) = plugin {
                let path = context.join(&html.template);
                if !path.is_file() {
                    return Err(ConfigError::TemplateNotFound { path });
                }
            }
        }

        Ok(())
    }
}

pub fn validate_schema(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

pub fn validate_fs(config: &BuildConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Mode;
    use crate::naming::FilenameTemplate;

    #[test]
    fn derived_configs_are_valid() {
        for mode in [Mode::Development, Mode::Production] {
            assert!(validate_schema(&BuildConfig::for_mode(mode)).is_ok());
        }
    }

    #[test]
    fn rejects_analyzer_not_last() {
        let mut config = BuildConfig::for_mode(Mode::Production);
        config.plugins.rotate_right(1);
        let err = validate_schema(&config).unwrap_err();
        assert!(err.to_string().contains("must be the last plugin"));
    }

    #[test]
    fn rejects_analyzer_in_development() {
        let mut config = BuildConfig::for_mode(Mode::Development);
        config.plugins = BuildConfig::for_mode(Mode::Production).plugins;
        assert!(matches!(
            validate_schema(&config),
            Err(ConfigError::SchemaValidation { .. })
        ));
    }

    #[test]
    fn rejects_missing_cleaner() {
        let mut config = BuildConfig::for_mode(Mode::Development);
        config.plugins.retain(|p| p.name() != "clean");
        assert!(validate_schema(&config).is_err());
    }

    #[test]
    fn rejects_duplicate_plugins() {
        let mut config = BuildConfig::for_mode(Mode::Development);
        let clean = config.plugins[2].clone();
        config.plugins.push(clean);
        let err = validate_schema(&config).unwrap_err();
        assert!(err.to_string().contains("'clean' appears more than once"));
    }

    #[test]
    fn rejects_unhashed_production_output() {
        let mut config = BuildConfig::for_mode(Mode::Production);
        config.output.filename = FilenameTemplate::new("[name].js");
        assert!(validate_schema(&config).is_err());
    }

    #[test]
    fn rejects_malformed_extension() {
        let mut config = BuildConfig::for_mode(Mode::Production);
        config.resolve.extensions.push("js".to_string());
        assert!(validate_schema(&config).is_err());
    }

    #[test]
    fn rejects_empty_entry() {
        let mut config = BuildConfig::for_mode(Mode::Production);
        config.entry.clear();
        assert!(validate_schema(&config).is_err());
    }
}
