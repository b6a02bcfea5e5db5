//! Build mode resolution.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable that selects the build mode.
pub const MODE_ENV_VAR: &str = "NODE_ENV";

/// The only value of [`MODE_ENV_VAR`] that selects development mode.
pub const DEVELOPMENT_SENTINEL: &str = "development";

/// Build context driving every derived policy fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    /// Fallback for an unset or unrecognised mode signal.
    #[default]
    Production,
}

impl Mode {
    /// Resolve the mode from the raw value of the mode variable.
    ///
    /// Total: only the exact development sentinel selects development,
    /// anything else (including `None`) resolves to production.
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::Mode;
    ///
    /// assert_eq!(Mode::from_env_value(Some("development")), Mode::Development);
    /// assert_eq!(Mode::from_env_value(Some("Development")), Mode::Production);
    /// assert_eq!(Mode::from_env_value(None), Mode::Production);
    /// ```
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(DEVELOPMENT_SENTINEL) => Mode::Development,
            _ => Mode::Production,
        }
    }

    /// Resolve the mode from the process environment.
    pub fn from_env() -> Self {
        let raw = std::env::var(MODE_ENV_VAR).ok();
        let mode = Self::from_env_value(raw.as_deref());
        debug!(value = ?raw, %mode, "resolved build mode");
        mode
    }

    pub fn is_dev(self) -> bool {
        matches!(self, Mode::Development)
    }

    pub fn is_prod(self) -> bool {
        !self.is_dev()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
