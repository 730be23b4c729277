use crate::knowledge::{KnowledgeBase, Pattern};

impl Pattern {
    /// True when any detection keyword occurs in `text`.
    ///
    /// Plain substring search without word boundaries, so "items" also
    /// matches "line items" and "tabs" matches "stabs". `text` is expected
    /// to be lowercased already.
    pub fn matches(&self, text: &str) -> bool {
        self.detection_keywords
            .iter()
            .any(|keyword| text.contains(keyword.to_lowercase().as_str()))
    }
}

/// Patterns whose keywords occur in the flattened screen text, in knowledge base order
pub fn detect_patterns<'kb>(text: &str, knowledge_base: &'kb KnowledgeBase) -> Vec<&'kb Pattern> {
    knowledge_base
        .patterns()
        .iter()
        .filter(|pattern| pattern.matches(text))
        .collect()
}
