//! The derived build configuration handed to the bundler.
//!
//! Every field of [`BuildConfig`] is a pure function of the [`Mode`] and the
//! [`ProjectSettings`]; nothing is mutated after [`derive_config`] returns.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::dev::DevServerOptions;
use crate::error::{ConfigError, Result as ConfigResult};
use crate::mode::Mode;
use crate::naming::FilenameTemplate;
use crate::optimization::{OptimizationPolicy, optimization};
use crate::plugin::{PluginDescriptor, plugins};
use crate::rules::{RuleSet, module_rules};
use crate::settings::ProjectSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    pub mode: Mode,

    /// Source root that entries and the template resolve against
    pub context: PathBuf,

    pub entry: Vec<String>,

    pub output: OutputOptions,

    pub resolve: ResolveOptions,

    pub optimization: OptimizationPolicy,

    pub module: ModuleOptions,

    pub plugins: Vec<PluginDescriptor>,

    /// Source map style; `None` disables source maps
    pub devtool: Option<Devtool>,

    pub dev_server: DevServerOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    pub path: PathBuf,
    pub filename: FilenameTemplate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    pub extensions: Vec<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            extensions: vec![".js".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleOptions {
    pub rules: RuleSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Devtool {
    /// Separate `.map` files with full original sources
    SourceMap,
}

/// Derive the complete configuration for one build invocation.
pub fn derive_config(mode: Mode, settings: &ProjectSettings) -> BuildConfig {
    debug!(%mode, root = %settings.root.display(), "deriving build configuration");

    let config = BuildConfig {
        mode,
        context: settings.context_dir(),
        entry: settings.entry.clone(),
        output: OutputOptions {
            path: settings.output_path(),
            filename: mode.filename("js"),
        },
        resolve: ResolveOptions::default(),
        optimization: optimization(mode),
        module: ModuleOptions {
            rules: module_rules(mode),
        },
        plugins: plugins(mode, settings),
        devtool: mode.is_dev().then_some(Devtool::SourceMap),
        dev_server: DevServerOptions::for_mode(mode, settings),
    };

    debug!(
        plugins = config.plugins.len(),
        rules = config.module.rules.len(),
        minimizers = config.optimization.minimizers().len(),
        "build configuration derived"
    );
    config
}

impl BuildConfig {
    /// Configuration for `mode` over the conventional project layout.
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::{BuildConfig, Mode};
    ///
    /// let config = BuildConfig::for_mode(Mode::Production);
    /// assert_eq!(config.output.filename.template(), "[name].[contenthash].js");
    /// assert!(config.plugins.last().unwrap().is_analyzer());
    /// ```
    pub fn for_mode(mode: Mode) -> Self {
        derive_config(mode, &ProjectSettings::default())
    }

    /// Configuration for the mode named by the process environment.
    pub fn from_env(settings: &ProjectSettings) -> Self {
        derive_config(Mode::from_env(), settings)
    }

    /// Create from serde_json::Value (e.g. a configuration emitted earlier)
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }
}
