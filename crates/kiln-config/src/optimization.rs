//! Chunk splitting and minimizer policy.

use serde::{Deserialize, Serialize};

use crate::mode::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSelection {
    /// Only dynamically imported chunks
    Async,
    /// Only entry chunks
    Initial,
    /// Shared modules are split out across every entry point
    #[default]
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SplitChunks {
    pub chunks: ChunkSelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Minimizer {
    Script,
    Stylesheet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationPolicy {
    pub split_chunks: SplitChunks,

    /// When present, replaces the bundler's default minimizer list entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimizer: Option<Vec<Minimizer>>,
}

impl OptimizationPolicy {
    pub fn minimizers(&self) -> &[Minimizer] {
        self.minimizer.as_deref().unwrap_or_default()
    }
}

/// Development keeps bundles unminified; production minifies scripts and
/// stylesheets.
pub fn optimization(mode: Mode) -> OptimizationPolicy {
    OptimizationPolicy {
        split_chunks: SplitChunks {
            chunks: ChunkSelection::All,
        },
        minimizer: mode
            .is_prod()
            .then(|| vec![Minimizer::Script, Minimizer::Stylesheet]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splitting_is_always_all() {
        for mode in [Mode::Development, Mode::Production] {
            assert_eq!(optimization(mode).split_chunks.chunks, ChunkSelection::All);
        }
    }

    #[test]
    fn development_omits_minimizer() {
        let policy = optimization(Mode::Development);
        assert!(policy.minimizer.is_none());
        assert!(policy.minimizers().is_empty());
        let value = serde_json::to_value(&policy).unwrap();
        assert!(value.get("minimizer").is_none());
    }

    #[test]
    fn production_minifies_scripts_and_stylesheets() {
        let policy = optimization(Mode::Production);
        assert_eq!(
            policy.minimizers(),
            [Minimizer::Script, Minimizer::Stylesheet]
        );
    }
}
