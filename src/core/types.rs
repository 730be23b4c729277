//! Data model shared by the detector, the flow analyzer and the report writers.
//!
//! Input types (`DesignNode`, `Screen`, `Connection`) mirror the JSON exported by
//! the design tool. Output types (`Issue`, `ScreenAnalysis`, `AnalysisResult`)
//! are serialized verbatim for downstream renderers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Severity of a missing edge case
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::Warning, Severity::Info];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single node in an exported design tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub node_type: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub children: Vec<DesignNode>,
}

impl DesignNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type: String::new(),
            visible: true,
            children: Vec::new(),
        }
    }

    pub fn with_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = node_type.into();
        self
    }

    pub fn with_children(mut self, children: Vec<DesignNode>) -> Self {
        self.children = children;
        self
    }
}

/// Directed navigation edge from a node inside one screen to another screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub trigger_node_id: String,
    #[serde(default)]
    pub trigger_node_name: String,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub target_frame_id: String,
    #[serde(default)]
    pub target_frame_name: String,
}

impl Connection {
    pub fn to_frame(target_frame_id: impl Into<String>) -> Self {
        Self {
            trigger_node_id: String::new(),
            trigger_node_name: String::new(),
            target_frame_id: target_frame_id.into(),
            target_frame_name: String::new(),
        }
    }
}

/// One analyzed top-level frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub children: Vec<DesignNode>,
    #[serde(default, deserialize_with = "deserialize_connections")]
    pub connections: Vec<Connection>,
}

impl Screen {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            width: 0.0,
            height: 0.0,
            children: Vec::new(),
            connections: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<DesignNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_connections(mut self, connections: Vec<Connection>) -> Self {
        self.connections = connections;
        self
    }
}

/// A missing edge case flagged on a specific screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub pattern_id: String,
    pub edge_case_id: String,
    pub name: String,
    pub description: String,
    pub severity: Severity,
    pub suggested_components: Vec<String>,
    pub screen_id: String,
    pub screen_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenAnalysis {
    pub screen_id: String,
    pub screen_name: String,
    pub detected_patterns: Vec<String>,
    pub issues: Vec<Issue>,
    pub missing_states: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowIssues {
    pub dead_ends: Vec<String>,
    pub orphan_screens: Vec<String>,
}

/// Top-level output of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub timestamp: DateTime<Utc>,
    pub total_screens: usize,
    pub total_issues: usize,
    pub critical_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
    pub screens: Vec<ScreenAnalysis>,
    pub flow_issues: FlowIssues,
}

impl AnalysisResult {
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.screens.iter().flat_map(|screen| screen.issues.iter())
    }

    pub fn count_for(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical_count,
            Severity::Warning => self.warning_count,
            Severity::Info => self.info_count,
        }
    }

    /// Number of issues whose severity is `min` or worse
    pub fn count_at_least(&self, min: Severity) -> usize {
        Severity::ALL
            .iter()
            .filter(|severity| **severity >= min)
            .map(|severity| self.count_for(*severity))
            .sum()
    }
}

fn default_visible() -> bool {
    true
}

/// Ids arrive as strings from the design tool but as numbers from hand-written
/// fixtures; both normalize to a string.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(text)) => text,
        Some(RawId::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

fn deserialize_connections<'de, D>(deserializer: D) -> Result<Vec<Connection>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Connection>>::deserialize(deserializer)?.unwrap_or_default())
}
