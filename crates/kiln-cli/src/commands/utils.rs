//! Shared helpers for command implementations.

use kiln_config::{BuildConfig, ConfigDiscovery, Mode, ProjectSettings, derive_config};
use tracing::debug;

use crate::cli::{ModeArg, ProjectArgs};
use crate::error::{Result, ResultExt};

/// Mode from the command line, falling back to `NODE_ENV`.
pub fn resolve_mode(arg: Option<ModeArg>) -> Mode {
    match arg {
        Some(arg) => {
            let mode = Mode::from(arg);
            debug!(%mode, "mode set on the command line");
            mode
        }
        None => Mode::from_env(),
    }
}

/// Project settings from `--config`, or discovered under `--root`.
pub fn load_settings(project: &ProjectArgs) -> Result<ProjectSettings> {
    let discovery = ConfigDiscovery::new(&project.root);
    match &project.config {
        Some(path) => discovery
            .load_from(path)
            .with_hint(format!("No settings file at {}", path.display())),
        None => Ok(discovery.load()?),
    }
}

/// `log_level` from the project settings, if they load.
///
/// Runs before logging is set up; load errors surface later from the command.
pub fn configured_log_level(project: &ProjectArgs) -> Option<String> {
    load_settings(project).ok()?.log_level
}

pub fn derive(project: &ProjectArgs) -> Result<BuildConfig> {
    let settings = load_settings(project)?;
    Ok(derive_config(resolve_mode(project.mode), &settings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_mode_wins() {
        assert_eq!(resolve_mode(Some(ModeArg::Development)), Mode::Development);
        assert_eq!(resolve_mode(Some(ModeArg::Production)), Mode::Production);
    }
}
