use crate::core::{Error, Issue, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An entry in the component library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Taken from the table key
    #[serde(default, skip_serializing)]
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub library_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Component {
    fn answers_to(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self
                .aliases
                .iter()
                .any(|alias| alias.trim().eq_ignore_ascii_case(name))
    }
}

/// Maps suggested component names to library entries
#[derive(Debug, Clone, Default)]
pub struct ComponentLibrary {
    components: Vec<Component>,
}

impl ComponentLibrary {
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    /// Parse a `{ "<componentName>": { ... } }` table
    pub fn from_json_str(json: &str) -> Result<Self> {
        let table: BTreeMap<String, Component> = serde_json::from_str(json)
            .map_err(|e| Error::KnowledgeBase(format!("invalid components table: {e}")))?;

        Ok(Self::new(
            table
                .into_iter()
                .map(|(name, mut component)| {
                    component.name = name;
                    component
                })
                .collect(),
        ))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }

    /// Case-insensitive lookup by name, then by alias
    pub fn resolve(&self, name: &str) -> Option<&Component> {
        let name = name.trim();
        self.components
            .iter()
            .find(|component| component.name.eq_ignore_ascii_case(name))
            .or_else(|| {
                self.components
                    .iter()
                    .find(|component| component.answers_to(name))
            })
    }

    /// Resolved library entries for an issue's suggestions, unresolved ones skipped
    pub fn links_for<'a>(&'a self, issue: &'a Issue) -> Vec<(&'a str, &'a Component)> {
        issue
            .suggested_components
            .iter()
            .filter_map(|suggestion| {
                self.resolve(suggestion)
                    .map(|component| (suggestion.as_str(), component))
            })
            .collect()
    }
}
