//! Project-level inputs that the build policy is parameterised over.
//!
//! These are the file-system inputs of a build (source root, entry, template,
//! output directory) plus the dev server port. They default to the conventional
//! layout and can be overridden from `kiln.toml` or `KILN_*` variables; the mode
//! never comes from here.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Project root; set by discovery, never read from the settings file.
    #[serde(skip)]
    pub root: PathBuf,

    /// Source root, relative to the project root.
    #[serde(default = "default_context")]
    pub context: PathBuf,

    /// Entry modules in load order, resolved against the source root.
    #[serde(default = "default_entry")]
    pub entry: Vec<String>,

    /// HTML template, relative to the source root.
    #[serde(default = "default_template")]
    pub template: PathBuf,

    /// Generated HTML document name inside the output directory.
    #[serde(default = "default_html_filename")]
    pub html_filename: String,

    /// Output directory, relative to the project root.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub log_level: Option<String>,
}

impl ProjectSettings {
    /// Absolute (root-joined) source directory.
    pub fn context_dir(&self) -> PathBuf {
        self.root.join(&self.context)
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_dir)
    }

    pub fn template_path(&self) -> PathBuf {
        self.context_dir().join(&self.template)
    }

    /// Entries that name files inside the source root.
    ///
    /// Bare package specifiers such as `@babel/polyfill` are resolved by the
    /// bundler from the dependency directory and are skipped here.
    pub fn local_entries(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.entry
            .iter()
            .filter(|entry| is_relative_specifier(entry))
            .map(|entry| self.context_dir().join(entry))
    }
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            context: default_context(),
            entry: default_entry(),
            template: default_template(),
            html_filename: default_html_filename(),
            output_dir: default_output_dir(),
            port: default_port(),
            log_level: None,
        }
    }
}

pub(crate) fn is_relative_specifier(specifier: &str) -> bool {
    specifier.starts_with("./") || specifier.starts_with("../") || specifier.starts_with('/')
}

fn default_context() -> PathBuf {
    PathBuf::from("src")
}

fn default_entry() -> Vec<String> {
    vec!["@babel/polyfill".to_string(), "./index.js".to_string()]
}

fn default_template() -> PathBuf {
    PathBuf::from("./index.html")
}

fn default_html_filename() -> String {
    "index.html".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_port() -> u16 {
    3000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_entries_skip_package_specifiers() {
        let settings = ProjectSettings {
            root: PathBuf::from("/app"),
            ..ProjectSettings::default()
        };
        let entries: Vec<_> = settings.local_entries().collect();
        assert_eq!(entries, vec![PathBuf::from("/app/src/./index.js")]);
    }

    #[test]
    fn paths_are_joined_onto_root() {
        let settings = ProjectSettings {
            root: PathBuf::from("/app"),
            ..ProjectSettings::default()
        };
        assert_eq!(settings.output_path(), PathBuf::from("/app/dist"));
        assert_eq!(
            settings.template_path(),
            PathBuf::from("/app/src/./index.html")
        );
    }
}
