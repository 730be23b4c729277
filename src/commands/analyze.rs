use crate::config::KnowledgeBaseConfig;
use crate::core::{AnalysisResult, Severity};
use crate::detector::{AnalysisOptions, Analyzer};
use crate::io::{self, OutputFormat};
use crate::knowledge::ComponentLibrary;
use crate::observability::{set_current_file, set_stage, Stage};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub knowledge_base: KnowledgeBaseConfig,
    pub options: AnalysisOptions,
    /// Fail when any issue at or above this severity is found
    pub fail_on: Option<Severity>,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let kb = super::load_knowledge_base(&config.knowledge_base)?;
    let _file = set_current_file(&config.input);
    let screens = {
        let _stage = set_stage(Stage::InputLoading);
        io::load_screens(&config.input)
            .with_context(|| format!("Failed to load screens from {}", config.input.display()))?
    };

    let result = {
        let _stage = set_stage(Stage::Detection);
        Analyzer::with_options(&kb, config.options).analyze(&screens)?
    };
    tracing::info!(
        screens = result.total_screens,
        issues = result.total_issues,
        critical = result.critical_count,
        "Analysis complete"
    );

    let _stage = set_stage(Stage::OutputGeneration);
    write_output(&config, &result, kb.components())?;
    check_fail_on(config.fail_on, &result)
}

fn write_output(
    config: &AnalyzeConfig,
    result: &AnalysisResult,
    library: &ComponentLibrary,
) -> Result<()> {
    match &config.output {
        Some(path) => {
            if config.format == OutputFormat::Terminal {
                colored::control::set_override(false);
            }
            let rendered = render(config.format, result, library)?;
            io::write_file_atomic(path, &rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            tracing::info!("Report written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            io::create_writer(config.format, stdout.lock(), library).write_results(result)?;
        }
    }
    Ok(())
}

/// Render a report fully in memory
pub fn render(
    format: OutputFormat,
    result: &AnalysisResult,
    library: &ComponentLibrary,
) -> Result<String> {
    let mut buffer = Vec::new();
    io::create_writer(format, &mut buffer, library).write_results(result)?;
    Ok(String::from_utf8(buffer)?)
}

fn check_fail_on(fail_on: Option<Severity>, result: &AnalysisResult) -> Result<()> {
    match fail_on {
        Some(min) if result.count_at_least(min) > 0 => anyhow::bail!(
            "{} missing edge case(s) at or above {} severity",
            result.count_at_least(min),
            min
        ),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FlowIssues;
    use chrono::Utc;
    use tempfile::TempDir;

    fn write_export(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("login.json");
        std::fs::write(
            &path,
            r#"{"screens": [{"id": "1", "name": "Login Form",
                "children": [{"id": "2", "name": "Submit Button"}]}]}"#,
        )
        .unwrap();
        path
    }

    fn config(input: PathBuf, output: Option<PathBuf>, fail_on: Option<Severity>) -> AnalyzeConfig {
        AnalyzeConfig {
            input,
            format: OutputFormat::Json,
            output,
            knowledge_base: KnowledgeBaseConfig::default(),
            options: AnalysisOptions::default(),
            fail_on,
        }
    }

    #[test]
    fn test_analyze_writes_json_report() {
        let dir = TempDir::new().unwrap();
        let input = write_export(&dir);
        let output = dir.path().join("report.json");

        handle_analyze(config(input, Some(output.clone()), None)).unwrap();

        let result: AnalysisResult =
            serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(result.total_issues, 3);
        assert_eq!(result.screens[0].detected_patterns, vec!["form-submission"]);
    }

    #[test]
    fn test_fail_on_critical() {
        let dir = TempDir::new().unwrap();
        let input = write_export(&dir);
        let output = dir.path().join("report.json");

        let err = handle_analyze(config(input, Some(output.clone()), Some(Severity::Critical)))
            .unwrap_err();
        assert!(err.to_string().contains("at or above critical"));
        assert!(output.exists());
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("report.json");

        assert!(handle_analyze(config(dir.path().join("nope.json"), Some(output.clone()), None))
            .is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_check_fail_on_passes_without_issues() {
        let result = AnalysisResult {
            timestamp: Utc::now(),
            total_screens: 0,
            total_issues: 0,
            critical_count: 0,
            warning_count: 0,
            info_count: 0,
            screens: vec![],
            flow_issues: FlowIssues::default(),
        };
        assert!(check_fail_on(Some(Severity::Info), &result).is_ok());
        assert!(check_fail_on(None, &result).is_ok());
    }
}
