//! Directory-to-directory analysis.
//!
//! Every `*.json` export in the input directory produces
//! `<name>-results.json` in the output directory. A file that fails to load
//! or analyze produces no output; the other files still run.

use crate::config::KnowledgeBaseConfig;
use crate::core::{Error, Result};
use crate::detector::{AnalysisOptions, Analyzer};
use crate::io;
use crate::observability::{set_current_file, set_stage, Stage};
use std::path::{Path, PathBuf};
use tracing::{info, info_span, warn};

pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub knowledge_base: KnowledgeBaseConfig,
    pub options: AnalysisOptions,
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, Error)>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.written.len() + self.failed.len()
    }
}

pub fn handle_batch(config: BatchConfig) -> anyhow::Result<()> {
    let kb = super::load_knowledge_base(&config.knowledge_base)?;
    let analyzer = Analyzer::with_options(&kb, config.options);

    let summary = run_batch(&analyzer, &config.input_dir, &config.output_dir)?;
    println!(
        "Wrote {} result file(s) to {}",
        summary.written.len(),
        config.output_dir.display()
    );

    if summary.failed.is_empty() {
        return Ok(());
    }

    for (path, err) in &summary.failed {
        eprintln!("  {}: {}", path.display(), err);
    }
    Err(Error::Batch {
        failed: summary
            .failed
            .iter()
            .map(|(path, _)| path.display().to_string())
            .collect(),
        total: summary.total(),
    }
    .into())
}

/// Analyze every export in `input_dir`. Only directory-level problems are
/// returned as errors; per-file failures are collected in the summary.
pub fn run_batch(analyzer: &Analyzer<'_>, input_dir: &Path, output_dir: &Path) -> Result<BatchSummary> {
    let files = io::find_export_files(input_dir)?;
    io::ensure_dir(output_dir)?;
    info!("Processing {} export(s) from {}", files.len(), input_dir.display());

    let mut summary = BatchSummary::default();
    for file in files {
        match process_file(analyzer, &file, output_dir) {
            Ok(written) => summary.written.push(written),
            Err(err) => {
                warn!("Skipping {}: {}", file.display(), err);
                summary.failed.push((file, err));
            }
        }
    }
    Ok(summary)
}

/// Analyze one export and write its results file. The result is serialized
/// before anything is written.
pub fn process_file(analyzer: &Analyzer<'_>, input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let _span = info_span!("batch_file", file = %input.display()).entered();
    let _file = set_current_file(input);

    let screens = {
        let _stage = set_stage(Stage::InputLoading);
        io::load_screens(input)?
    };
    let result = {
        let _stage = set_stage(Stage::Detection);
        analyzer.analyze(&screens)?
    };
    let _stage = set_stage(Stage::OutputGeneration);
    let json = serde_json::to_string_pretty(&result)?;

    let output = output_dir.join(results_file_name(input));
    io::write_file_atomic(&output, &json)?;
    info!(
        issues = result.total_issues,
        "Wrote {}",
        output.display()
    );
    Ok(output)
}

/// `home.json` -> `home-results.json`
pub fn results_file_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{stem}-results.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AnalysisResult;
    use crate::knowledge::KnowledgeBase;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_results_file_name() {
        assert_eq!(results_file_name(Path::new("in/home.json")), "home-results.json");
        assert_eq!(
            results_file_name(Path::new("sprint.v2.json")),
            "sprint.v2-results.json"
        );
    }

    #[test]
    fn test_run_batch_isolates_failures() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let output_dir = output.path().join("results");
        fs::write(
            input.path().join("good.json"),
            r#"[{"id": "1", "name": "Search"}]"#,
        )
        .unwrap();
        fs::write(input.path().join("bad.json"), r#"{"screens": "#).unwrap();

        let kb = KnowledgeBase::builtin().unwrap();
        let summary = run_batch(&Analyzer::new(&kb), input.path(), &output_dir).unwrap();

        assert_eq!(summary.written, vec![output_dir.join("good-results.json")]);
        assert_eq!(summary.failed.len(), 1);
        assert!(summary.failed[0].0.ends_with("bad.json"));
        assert!(!output_dir.join("bad-results.json").exists());

        let result: AnalysisResult =
            serde_json::from_str(&fs::read_to_string(&summary.written[0]).unwrap()).unwrap();
        assert_eq!(result.screens[0].detected_patterns, vec!["search"]);
    }

    #[test]
    fn test_handle_batch_reports_failures() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("bad.json"), "{}").unwrap();

        let err = handle_batch(BatchConfig {
            input_dir: input.path().to_path_buf(),
            output_dir: output.path().to_path_buf(),
            knowledge_base: KnowledgeBaseConfig::default(),
            options: AnalysisOptions::default(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("1 of 1 batch file(s) failed"));
    }
}
