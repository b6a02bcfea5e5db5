//! Module transformation rules: which handler chain applies to which path.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ConfigError, Result};
use crate::mode::Mode;

/// Class-properties support for the syntax transform.
pub const CLASS_PROPERTIES_PLUGIN: &str = "@babel/plugin-proposal-class-properties";

/// Compiled path pattern. Serializes as its regex source.
#[derive(Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(source: &str) -> Result<Self> {
        Regex::new(source)
            .map(Pattern)
            .map_err(|source_err| ConfigError::InvalidPattern {
                pattern: source.to_string(),
                source: source_err,
            })
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.0.is_match(path)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Pattern::new(&source).map_err(serde::de::Error::custom)
    }
}

/// One transformation step in a rule's handler chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "loader", rename_all = "kebab-case")]
pub enum Handler {
    /// Syntax transform down to broadly runnable JS
    Babel { plugins: Vec<String> },
    /// Imports HTML fragments as modules
    Html,
    /// Emits the file as a standalone asset and rewrites references to it
    File,
    /// Extracts parsed CSS into stylesheet bundles
    CssExtract { hmr: bool, reload_all: bool },
    /// Parses CSS imports and `url()` references
    Css,
}

impl Handler {
    pub fn name(&self) -> &'static str {
        match self {
            Handler::Babel { .. } => "babel",
            Handler::Html => "html",
            Handler::File => "file",
            Handler::CssExtract { .. } => "css-extract",
            Handler::Css => "css",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRule {
    pub test: Pattern,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Pattern>,

    /// Applied in order; the first handler wraps the ones after it
    #[serde(rename = "use")]
    pub handlers: Vec<Handler>,
}

impl ModuleRule {
    pub fn matches(&self, path: &str) -> bool {
        self.test.is_match(path) && !self.exclude.as_ref().is_some_and(|ex| ex.is_match(path))
    }
}

/// Ordered rule table evaluated against module paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet(Vec<ModuleRule>);

impl RuleSet {
    pub fn new(rules: Vec<ModuleRule>) -> Self {
        Self(rules)
    }

    pub fn rules(&self) -> &[ModuleRule] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every rule applying to `path`, in table order.
    pub fn matching<'a>(&'a self, path: &str) -> impl Iterator<Item = &'a ModuleRule> {
        self.0.iter().filter(move |rule| rule.matches(path))
    }

    /// Handler chain of the first rule applying to `path`.
    ///
    /// `None` means the bundler's default handling applies.
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::{module_rules, Mode};
    ///
    /// let rules = module_rules(Mode::Production);
    /// let chain = rules.handlers_for("src/styles/main.CSS").unwrap();
    /// assert_eq!(chain.len(), 2);
    /// assert!(rules.handlers_for("node_modules/lib/index.js").is_none());
    /// ```
    pub fn handlers_for(&self, path: &str) -> Option<&[Handler]> {
        self.matching(path).next().map(|rule| rule.handlers.as_slice())
    }
}

struct BuiltinPatterns {
    script: Pattern,
    dependency_dir: Pattern,
    html: Pattern,
    image: Pattern,
    stylesheet: Pattern,
    font: Pattern,
}

static BUILTIN: LazyLock<BuiltinPatterns> = LazyLock::new(|| {
    let compile = |source: &str| Pattern::new(source).expect("built-in rule pattern compiles");
    BuiltinPatterns {
        script: compile(r"\.(js|jsx)$"),
        dependency_dir: compile("node_modules"),
        html: compile(r"/html$"),
        image: compile(r"(?i)\.(png|jpe?g|gif|svg)$"),
        stylesheet: compile(r"(?i)\.css$"),
        font: compile(r"\.(ttf|woff|woff2|eot)$"),
    }
});

/// The rule table for a mode.
///
/// Only the stylesheet extraction `hmr` flag differs between modes.
pub fn module_rules(mode: Mode) -> RuleSet {
    let p = &*BUILTIN;
    RuleSet(vec![
        ModuleRule {
            test: p.script.clone(),
            exclude: Some(p.dependency_dir.clone()),
            handlers: vec![Handler::Babel {
                plugins: vec![CLASS_PROPERTIES_PLUGIN.to_string()],
            }],
        },
        ModuleRule {
            test: p.html.clone(),
            exclude: None,
            handlers: vec![Handler::Html],
        },
        ModuleRule {
            test: p.image.clone(),
            exclude: None,
            handlers: vec![Handler::File],
        },
        ModuleRule {
            test: p.stylesheet.clone(),
            exclude: None,
            handlers: vec![
                Handler::CssExtract {
                    hmr: mode.is_dev(),
                    reload_all: true,
                },
                Handler::Css,
            ],
        },
        ModuleRule {
            test: p.font.clone(),
            exclude: None,
            handlers: vec![Handler::File],
        },
    ])
}
