//! Miette diagnostic conversion for CLI errors.

use crate::error::{CliError, ConfigError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report, attaching a help line where one helps
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::ContextNotFound { path } => miette::miette!(
            help = "Create the source directory or set `context` in kiln.toml",
            "Source root not found: {}",
            path.display()
        ),
        ConfigError::EntryNotFound { path } => miette::miette!(
            help = "Check the `entry` list in kiln.toml",
            "Entry script not found: {}",
            path.display()
        ),
        ConfigError::TemplateNotFound { path } => miette::miette!(
            help = "Set `template` relative to the source root",
            "HTML template not found: {}",
            path.display()
        ),
        ConfigError::NotFound => miette::miette!(
            help = "Pass --config <FILE> or add kiln.toml to the project root",
            "Settings file not found"
        ),
        other => miette::miette!("Configuration error: {}", other),
    }
}
