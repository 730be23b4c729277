use crate::detector::AnalysisOptions;
use crate::io::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for edgelint
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EdgelintConfig {
    /// Replacement knowledge base tables
    #[serde(default)]
    pub knowledge_base: KnowledgeBaseConfig,

    #[serde(default)]
    pub analysis: AnalysisSettings,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct KnowledgeBaseConfig {
    /// Patterns table; builtin when absent
    pub patterns: Option<PathBuf>,
    /// Components table; builtin when absent
    pub components: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisSettings {
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Unset means nesting depth is not limited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tree_depth: Option<usize>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
            max_tree_depth: None,
        }
    }
}

impl From<&AnalysisSettings> for AnalysisOptions {
    fn from(settings: &AnalysisSettings) -> Self {
        AnalysisOptions {
            parallel: settings.parallel,
            max_tree_depth: settings.max_tree_depth,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
}

impl EdgelintConfig {
    /// Make relative knowledge base paths relative to the directory holding the config file
    pub fn resolve_paths(mut self, base_dir: &Path) -> Self {
        let resolve = |path: Option<PathBuf>| {
            path.map(|p| if p.is_relative() { base_dir.join(p) } else { p })
        };
        self.knowledge_base.patterns = resolve(self.knowledge_base.patterns.take());
        self.knowledge_base.components = resolve(self.knowledge_base.components.take());
        self
    }
}

fn default_parallel() -> bool {
    true
}
