//! Development server surface.
//!
//! The server itself is an external process; this is the contract it is
//! started with.

use serde::{Deserialize, Serialize};

use crate::mode::Mode;
use crate::settings::ProjectSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerOptions {
    pub port: u16,

    /// Unmatched routes are answered with the root document
    pub history_api_fallback: bool,

    /// Hot module replacement
    pub hot: bool,

    /// Document served for `/` and, with the fallback on, for unknown routes
    pub index: String,
}

impl DevServerOptions {
    pub fn for_mode(mode: Mode, settings: &ProjectSettings) -> Self {
        Self {
            port: settings.port,
            history_api_fallback: true,
            hot: mode.is_dev(),
            index: settings.html_filename.clone(),
        }
    }

    /// Output file a request path is served from.
    ///
    /// `exists` reports whether a path (relative to the output directory) was
    /// emitted. Query strings and fragments are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::{DevServerOptions, Mode, ProjectSettings};
    ///
    /// let server = DevServerOptions::for_mode(Mode::Development, &ProjectSettings::default());
    /// let emitted = |p: &str| p == "main.js";
    /// assert_eq!(server.resolve_request("/main.js?v=1", emitted).as_deref(), Some("main.js"));
    /// assert_eq!(server.resolve_request("/users/42", emitted).as_deref(), Some("index.html"));
    /// ```
    pub fn resolve_request(&self, path: &str, exists: impl Fn(&str) -> bool) -> Option<String> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let relative = path.trim_start_matches('/');

        if relative.is_empty() {
            return Some(self.index.clone());
        }
        if exists(relative) {
            return Some(relative.to_string());
        }
        self.history_api_fallback.then(|| self.index.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(mode: Mode) -> DevServerOptions {
        DevServerOptions::for_mode(mode, &ProjectSettings::default())
    }

    #[test]
    fn defaults_follow_mode() {
        let dev = server(Mode::Development);
        assert_eq!(dev.port, 3000);
        assert!(dev.history_api_fallback);
        assert!(dev.hot);
        assert!(!server(Mode::Production).hot);
    }

    #[test]
    fn root_serves_index() {
        assert_eq!(
            server(Mode::Development).resolve_request("/", |_| false),
            Some("index.html".to_string())
        );
    }

    #[test]
    fn unknown_route_without_fallback_is_unresolved() {
        let mut options = server(Mode::Development);
        options.history_api_fallback = false;
        assert_eq!(options.resolve_request("/settings", |_| false), None);
        assert_eq!(
            options.resolve_request("/app.css#x", |p| p == "app.css"),
            Some("app.css".to_string())
        );
    }
}
