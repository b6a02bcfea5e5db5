//! Build-time plugin descriptors and the ordered plugin set.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::mode::Mode;
use crate::naming::FilenameTemplate;
use crate::settings::ProjectSettings;

/// One build-time extension, described by its options only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginDescriptor {
    /// Generates the HTML document that references emitted bundles.
    Html(HtmlOptions),
    /// Pulls stylesheets out of script bundles into their own files.
    CssExtract(CssExtractOptions),
    /// Removes stale artifacts from the output directory before emission.
    Clean(CleanOptions),
    /// Writes a visualization of final bundle composition.
    BundleAnalyzer(AnalyzerOptions),
}

impl PluginDescriptor {
    pub fn name(&self) -> &'static str {
        match self {
            PluginDescriptor::Html(_) => "html",
            PluginDescriptor::CssExtract(_) => "css-extract",
            PluginDescriptor::Clean(_) => "clean",
            PluginDescriptor::BundleAnalyzer(_) => "bundle-analyzer",
        }
    }

    pub fn is_analyzer(&self) -> bool {
        matches!(self, PluginDescriptor::BundleAnalyzer(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlOptions {
    /// Output filename for the generated document
    pub filename: String,

    /// Template path, relative to the source root
    pub template: PathBuf,

    pub minify: HtmlMinify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlMinify {
    pub collapse_whitespace: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssExtractOptions {
    pub filename: FilenameTemplate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanOptions {
    /// Globs (relative to the output directory) removed once before the first build
    pub patterns: Vec<String>,

    /// Also remove assets that a rebuild in watch mode no longer emits
    pub clean_stale_assets: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            patterns: vec!["**/*".to_string()],
            clean_stale_assets: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerMode {
    /// Single HTML report written next to the bundles
    #[default]
    Static,
    /// Raw stats JSON only
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerOptions {
    pub analyzer_mode: AnalyzerMode,
    pub report_filename: String,
    pub open_analyzer: bool,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            analyzer_mode: AnalyzerMode::Static,
            report_filename: "report.html".to_string(),
            open_analyzer: false,
        }
    }
}

/// Ordered plugin set for a mode.
///
/// The cleaner precedes emission and the analyzer, present only in
/// production, is always last so it observes the final bundle graph.
pub fn plugins(mode: Mode, settings: &ProjectSettings) -> Vec<PluginDescriptor> {
    let mut base = vec![
        PluginDescriptor::Html(HtmlOptions {
            filename: settings.html_filename.clone(),
            template: settings.template.clone(),
            minify: HtmlMinify {
                collapse_whitespace: mode.is_prod(),
            },
        }),
        PluginDescriptor::CssExtract(CssExtractOptions {
            filename: mode.filename("css"),
        }),
        PluginDescriptor::Clean(CleanOptions::default()),
    ];

    if mode.is_prod() {
        base.push(PluginDescriptor::BundleAnalyzer(AnalyzerOptions::default()));
    }

    base
}
