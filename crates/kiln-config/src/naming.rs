//! Output file naming.
//!
//! Development names are stable per chunk (`[name].js`); production names embed a
//! content fingerprint (`[name].[contenthash].js`) so caches are invalidated exactly
//! when the emitted bytes change.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::mode::Mode;

pub const NAME_PLACEHOLDER: &str = "[name]";
pub const CONTENT_HASH_PLACEHOLDER: &str = "[contenthash]";

/// Number of hex digits of the digest kept in rendered names.
pub const CONTENT_HASH_LENGTH: usize = 20;

/// Filename template for one asset kind, e.g. `[name].[contenthash].css`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilenameTemplate(String);

impl FilenameTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn template(&self) -> &str {
        &self.0
    }

    pub fn has_hash_pattern(&self) -> bool {
        self.0.contains(CONTENT_HASH_PLACEHOLDER)
    }

    /// Render the template for a chunk with the given emitted content.
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::Mode;
    ///
    /// let dev = Mode::Development.filename("js");
    /// assert_eq!(dev.render("main", b"console.log(1)"), "main.js");
    ///
    /// let prod = Mode::Production.filename("js");
    /// let name = prod.render("main", b"console.log(1)");
    /// assert!(name.starts_with("main.") && name.ends_with(".js"));
    /// ```
    pub fn render(&self, chunk_name: &str, content: &[u8]) -> String {
        // Hash first so placeholders inside the chunk name stay literal.
        let hashed = if self.has_hash_pattern() {
            self.0.replace(CONTENT_HASH_PLACEHOLDER, &content_hash(content))
        } else {
            self.0.clone()
        };
        hashed.replace(NAME_PLACEHOLDER, chunk_name)
    }
}

impl fmt::Display for FilenameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hex fingerprint of `content`, truncated to [`CONTENT_HASH_LENGTH`].
pub fn content_hash(content: &[u8]) -> String {
    let digest = blake3::hash(content).to_hex();
    digest[..CONTENT_HASH_LENGTH].to_string()
}

impl Mode {
    /// Naming template for an asset kind identified by its extension.
    pub fn filename(self, ext: &str) -> FilenameTemplate {
        if self.is_dev() {
            FilenameTemplate(format!("{NAME_PLACEHOLDER}.{ext}"))
        } else {
            FilenameTemplate(format!(
                "{NAME_PLACEHOLDER}.{CONTENT_HASH_PLACEHOLDER}.{ext}"
            ))
        }
    }

    /// Like [`Mode::filename`], rejecting an empty or dotted extension.
    pub fn try_filename(self, ext: &str) -> Result<FilenameTemplate> {
        if ext.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "ext".to_string(),
                hint: Some("asset extension must not be empty".to_string()),
            });
        }
        if ext.starts_with('.') {
            return Err(ConfigError::InvalidValue {
                field: "ext".to_string(),
                hint: Some(format!("use '{}' without the leading dot", &ext[1..])),
            });
        }
        Ok(self.filename(ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_names_have_no_hash() {
        let template = Mode::Development.filename("css");
        assert_eq!(template.template(), "[name].css");
        assert!(!template.has_hash_pattern());
        assert_eq!(template.render("app", b"body{}"), "app.css");
        assert_eq!(template.render("app", b"main{}"), "app.css");
    }

    #[test]
    fn production_hash_tracks_content() {
        let template = Mode::Production.filename("js");
        assert_eq!(template.template(), "[name].[contenthash].js");

        let first = template.render("main", b"export default 1");
        let again = template.render("main", b"export default 1");
        let changed = template.render("main", b"export default 2");

        assert_eq!(first, again);
        assert_ne!(first, changed);

        let hash = first
            .strip_prefix("main.")
            .and_then(|rest| rest.strip_suffix(".js"))
            .unwrap();
        assert_eq!(hash.len(), CONTENT_HASH_LENGTH);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn chunk_name_placeholders_stay_literal() {
        let name = Mode::Production.filename("js").render("[contenthash]", b"x");
        let hash = content_hash(b"x");
        assert_eq!(name, format!("[contenthash].{hash}.js"));

        let dev = Mode::Development.filename("js").render("[contenthash]", b"x");
        assert_eq!(dev, "[contenthash].js");
    }

    #[test]
    fn try_filename_rejects_empty_extension() {
        assert!(matches!(
            Mode::Production.try_filename(""),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(Mode::Production.try_filename(".js").is_err());
        assert_eq!(
            Mode::Development.try_filename("woff2").unwrap().template(),
            "[name].woff2"
        );
    }
}
