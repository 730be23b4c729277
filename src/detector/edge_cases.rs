//! Decides which required edge cases of a detected pattern are missing.
//!
//! An edge case counts as present when the screen text contains its id (with
//! dashes read as spaces), one of its suggested components, or any common
//! indicator word. The common indicators are checked against the whole
//! screen, so a single "error" label anywhere suppresses every edge case of
//! every detected pattern on that screen.

use crate::core::{Issue, Screen};
use crate::knowledge::{EdgeCase, Pattern};

/// Words whose presence anywhere on a screen marks all edge cases as handled
pub const COMMON_INDICATORS: [&str; 7] = [
    "error", "loading", "empty", "skeleton", "spinner", "alert", "toast",
];

pub fn has_common_indicator(text: &str) -> bool {
    COMMON_INDICATORS
        .iter()
        .any(|indicator| text.contains(indicator))
}

pub fn is_edge_case_present(text: &str, edge_case: &EdgeCase) -> bool {
    text.contains(edge_case.id.replace('-', " ").as_str())
        || edge_case
            .suggested_components
            .iter()
            .any(|component| text.contains(component.to_lowercase().as_str()))
        || has_common_indicator(text)
}

/// Issues for every required edge case of `patterns` that `text` does not show
pub fn check_edge_cases(screen: &Screen, text: &str, patterns: &[&Pattern]) -> Vec<Issue> {
    patterns
        .iter()
        .flat_map(|pattern| {
            pattern
                .required_edge_cases
                .iter()
                .filter(move |edge_case| !is_edge_case_present(text, edge_case))
                .map(move |edge_case| missing_edge_case(screen, pattern, edge_case))
        })
        .collect()
}

fn missing_edge_case(screen: &Screen, pattern: &Pattern, edge_case: &EdgeCase) -> Issue {
    Issue {
        id: format!("{}-{}-{}", screen.id, pattern.id, edge_case.id),
        pattern_id: pattern.id.clone(),
        edge_case_id: edge_case.id.clone(),
        name: edge_case.name.clone(),
        description: edge_case.description.clone(),
        severity: edge_case.severity,
        suggested_components: edge_case.suggested_components.clone(),
        screen_id: screen.id.clone(),
        screen_name: screen.name.clone(),
    }
}
