use crate::config::KnowledgeBaseConfig;
use crate::core::Severity;
use crate::knowledge::KnowledgeBase;
use anyhow::Result;
use colored::*;
use std::io::Write;

pub fn handle_patterns(config: &KnowledgeBaseConfig) -> Result<()> {
    let kb = super::load_knowledge_base(config)?;
    let stdout = std::io::stdout();
    list_patterns(&kb, &mut stdout.lock())?;
    Ok(())
}

/// One block per pattern: keywords, then each required edge case with its
/// severity and suggested components.
pub fn list_patterns(kb: &KnowledgeBase, out: &mut impl Write) -> std::io::Result<()> {
    for pattern in kb.patterns() {
        writeln!(out, "{}", pattern.id.bold())?;
        writeln!(
            out,
            "  keywords: {}",
            pattern.detection_keywords.join(", ").dimmed()
        )?;
        for edge_case in &pattern.required_edge_cases {
            let severity = match edge_case.severity {
                Severity::Critical => edge_case.severity.as_str().red(),
                Severity::Warning => edge_case.severity.as_str().yellow(),
                Severity::Info => edge_case.severity.as_str().blue(),
            };
            writeln!(out, "  - {} [{}]", edge_case.name, severity)?;
            if !edge_case.suggested_components.is_empty() {
                writeln!(
                    out,
                    "      suggested: {}",
                    edge_case.suggested_components.join(", ")
                )?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
