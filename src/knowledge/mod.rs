//! Pattern and component tables that drive detection.
//!
//! The knowledge base is injected configuration: a default copy ships in
//! `data/` and is embedded at compile time, and either table can be replaced
//! at runtime from a JSON file. No internal consistency checks are made; a
//! suggested component that the library does not know only loses its link.

pub mod components;

pub use components::{Component, ComponentLibrary};

use crate::core::{Error, Result, Severity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const BUILTIN_PATTERNS: &str = include_str!("../../data/patterns.json");
const BUILTIN_COMPONENTS: &str = include_str!("../../data/components.json");

/// A UI state expected to accompany a pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeCase {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub severity: Severity,
    #[serde(default)]
    pub suggested_components: Vec<String>,
}

/// A recognizable UI scenario and the edge cases it requires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pattern {
    /// Taken from the table key
    #[serde(default, skip_serializing)]
    pub id: String,
    pub detection_keywords: Vec<String>,
    #[serde(default)]
    pub required_edge_cases: Vec<EdgeCase>,
}

#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    patterns: Vec<Pattern>,
    components: ComponentLibrary,
}

impl KnowledgeBase {
    pub fn new(patterns: Vec<Pattern>, components: ComponentLibrary) -> Self {
        Self {
            patterns,
            components,
        }
    }

    /// The tables shipped with the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_PATTERNS, BUILTIN_COMPONENTS)
    }

    pub fn from_json_str(patterns_json: &str, components_json: &str) -> Result<Self> {
        Ok(Self::new(
            parse_patterns(patterns_json)?,
            ComponentLibrary::from_json_str(components_json)?,
        ))
    }

    /// Load each table from its file when given, falling back to the builtin copy.
    pub fn load(patterns_path: Option<&Path>, components_path: Option<&Path>) -> Result<Self> {
        let patterns = match patterns_path {
            Some(path) => {
                tracing::debug!("Loading patterns from {}", path.display());
                parse_patterns(&read_table(path)?)?
            }
            None => parse_patterns(BUILTIN_PATTERNS)?,
        };

        let components = match components_path {
            Some(path) => {
                tracing::debug!("Loading components from {}", path.display());
                ComponentLibrary::from_json_str(&read_table(path)?)?
            }
            None => ComponentLibrary::from_json_str(BUILTIN_COMPONENTS)?,
        };

        Ok(Self::new(patterns, components))
    }

    /// Patterns ordered by id
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn pattern(&self, id: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|pattern| pattern.id == id)
    }

    pub fn components(&self) -> &ComponentLibrary {
        &self.components
    }

    pub fn edge_case_count(&self) -> usize {
        self.patterns
            .iter()
            .map(|pattern| pattern.required_edge_cases.len())
            .sum()
    }
}

/// Parse a `{ "<patternId>": { ... } }` table. Keys become pattern ids.
pub fn parse_patterns(json: &str) -> Result<Vec<Pattern>> {
    let table: BTreeMap<String, Pattern> = serde_json::from_str(json)
        .map_err(|e| Error::KnowledgeBase(format!("invalid patterns table: {e}")))?;

    Ok(table
        .into_iter()
        .map(|(id, mut pattern)| {
            pattern.id = id;
            pattern
        })
        .collect())
}

fn read_table(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        Error::KnowledgeBase(format!("failed to read {}: {}", path.display(), e))
    })
}
