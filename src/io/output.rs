use crate::core::{AnalysisResult, Issue, ScreenAnalysis, Severity};
use crate::knowledge::ComponentLibrary;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_results(&mut self, result: &AnalysisResult) -> anyhow::Result<()>;
}

/// The `AnalysisResult` verbatim, pretty-printed
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(result)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<'a, W: Write> {
    writer: W,
    library: &'a ComponentLibrary,
}

impl<'a, W: Write> MarkdownWriter<'a, W> {
    pub fn new(writer: W, library: &'a ComponentLibrary) -> Self {
        Self { writer, library }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<'_, W> {
    fn write_results(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        self.write_header(result)?;
        self.write_summary(result)?;
        self.write_screens(result)?;
        self.write_flow(result)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<'_, W> {
    fn write_header(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        writeln!(self.writer, "# Edge Case Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            result.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Screens Analyzed | {} |", result.total_screens)?;
        writeln!(self.writer, "| Missing Edge Cases | {} |", result.total_issues)?;
        writeln!(self.writer, "| Critical | {} |", result.critical_count)?;
        writeln!(self.writer, "| Warning | {} |", result.warning_count)?;
        writeln!(self.writer, "| Info | {} |", result.info_count)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_screens(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        if result.screens.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Screens")?;
        writeln!(self.writer)?;

        for screen in &result.screens {
            self.write_screen(screen)?;
        }
        Ok(())
    }

    fn write_screen(&mut self, screen: &ScreenAnalysis) -> anyhow::Result<()> {
        writeln!(self.writer, "### {}", screen.screen_name)?;
        writeln!(self.writer)?;

        if screen.detected_patterns.is_empty() {
            writeln!(self.writer, "No known patterns detected.")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(
            self.writer,
            "Patterns: {}",
            screen
                .detected_patterns
                .iter()
                .map(|p| format!("`{p}`"))
                .collect::<Vec<_>>()
                .join(", ")
        )?;
        writeln!(self.writer)?;

        if screen.issues.is_empty() {
            writeln!(self.writer, "All required states are covered.")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        for issue in &screen.issues {
            writeln!(
                self.writer,
                "- **{}** ({}): {}",
                issue.name,
                issue.severity,
                issue.description
            )?;
            let suggestions = self.suggestion_links(issue);
            if !suggestions.is_empty() {
                writeln!(self.writer, "  - Suggested: {suggestions}")?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn suggestion_links(&self, issue: &Issue) -> String {
        issue
            .suggested_components
            .iter()
            .map(|name| match self.library.resolve(name) {
                Some(component) => format!("[{}]({})", name, component.library_link),
                None => name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn write_flow(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        let flow = &result.flow_issues;
        if flow.dead_ends.is_empty() && flow.orphan_screens.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Flow")?;
        writeln!(self.writer)?;
        if !flow.dead_ends.is_empty() {
            writeln!(self.writer, "Dead ends: {}", flow.dead_ends.join(", "))?;
            writeln!(self.writer)?;
        }
        if !flow.orphan_screens.is_empty() {
            writeln!(
                self.writer,
                "Orphan screens: {}",
                flow.orphan_screens.join(", ")
            )?;
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<'a, W: Write> {
    writer: W,
    library: &'a ComponentLibrary,
}

impl<'a, W: Write> TerminalWriter<'a, W> {
    pub fn new(writer: W, library: &'a ComponentLibrary) -> Self {
        Self { writer, library }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<'_, W> {
    fn write_results(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Edge Case Report".bold())?;
        writeln!(self.writer, "{}", summary_table(result))?;
        writeln!(self.writer)?;

        for screen in result.screens.iter().filter(|s| !s.issues.is_empty()) {
            writeln!(
                self.writer,
                "{} ({})",
                screen.screen_name.bold(),
                screen.detected_patterns.join(", ").dimmed()
            )?;
            for issue in &screen.issues {
                writeln!(
                    self.writer,
                    "  {} {}",
                    severity_label(issue.severity),
                    issue.name
                )?;
                for (name, component) in self.library.links_for(issue) {
                    writeln!(
                        self.writer,
                        "      {} {}",
                        name.cyan(),
                        component.library_link.dimmed()
                    )?;
                }
            }
            writeln!(self.writer)?;
        }

        let flow = &result.flow_issues;
        if !flow.dead_ends.is_empty() {
            writeln!(
                self.writer,
                "{} {}",
                "Dead ends:".yellow(),
                flow.dead_ends.join(", ")
            )?;
        }
        if !flow.orphan_screens.is_empty() {
            writeln!(
                self.writer,
                "{} {}",
                "Orphan screens:".yellow(),
                flow.orphan_screens.join(", ")
            )?;
        }

        if result.total_issues == 0 {
            writeln!(self.writer, "{} no missing edge cases", "✓".green())?;
        }
        Ok(())
    }
}

fn summary_table(result: &AnalysisResult) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Screens", "Issues", "Critical", "Warning", "Info"])
        .add_row(vec![
            result.total_screens.to_string(),
            result.total_issues.to_string(),
            result.critical_count.to_string(),
            result.warning_count.to_string(),
            result.info_count.to_string(),
        ]);
    table
}

fn severity_label(severity: Severity) -> ColoredString {
    let label = format!("[{}]", severity.as_str().to_uppercase());
    match severity {
        Severity::Critical => label.red().bold(),
        Severity::Warning => label.yellow(),
        Severity::Info => label.blue(),
    }
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    library: &'a ComponentLibrary,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer, library)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, library)),
    }
}
