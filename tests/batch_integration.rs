//! Integration tests for directory-to-directory analysis.
//!
//! Each export is analyzed independently; a broken export produces no
//! results file and does not stop the rest of the batch.

mod common;

use common::{builtin_kb, create_export_dir, fixture_path};
use edgelint::commands::run_batch;
use edgelint::core::AnalysisResult;
use edgelint::detector::Analyzer;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn read_result(path: &std::path::Path) -> AnalysisResult {
    serde_json::from_str(&fs::read_to_string(path).expect("Failed to read results"))
        .expect("Results are not valid JSON")
}

#[test]
fn test_fixture_directory_batch() {
    let output = TempDir::new().unwrap();
    let kb = builtin_kb();

    let summary = run_batch(
        &Analyzer::new(&kb),
        &fixture_path("exports"),
        output.path(),
    )
    .unwrap();

    assert_eq!(summary.total(), 3);
    assert_eq!(
        summary.written,
        vec![
            output.path().join("checkout-results.json"),
            output.path().join("gallery-results.json"),
        ]
    );
    assert_eq!(summary.failed.len(), 1);
    assert!(summary.failed[0].0.ends_with("broken.json"));
    assert!(!output.path().join("broken-results.json").exists());

    let checkout = read_result(&output.path().join("checkout-results.json"));
    assert_eq!(checkout.screens[0].detected_patterns, vec!["form-submission"]);
    assert_eq!(checkout.total_issues, 3);

    let gallery = read_result(&output.path().join("gallery-results.json"));
    assert_eq!(gallery.screens[0].detected_patterns, vec!["data-list"]);
    assert_eq!(gallery.critical_count, 1);
    assert_eq!(gallery.warning_count, 2);
}

#[test]
fn test_non_json_files_and_subdirectories_are_skipped() {
    let input = create_export_dir(&[
        ("home.json", r#"[{"id": "1", "name": "Home Feed"}]"#),
        ("notes.txt", "not an export"),
    ]);
    fs::create_dir(input.path().join("nested")).unwrap();
    fs::write(input.path().join("nested/inner.json"), "[]").unwrap();
    let output = TempDir::new().unwrap();
    let kb = builtin_kb();

    let summary = run_batch(&Analyzer::new(&kb), input.path(), output.path()).unwrap();

    assert_eq!(summary.written, vec![output.path().join("home-results.json")]);
    assert!(summary.failed.is_empty());
}

#[test]
fn test_output_directory_is_created() {
    let input = create_export_dir(&[("empty.json", r#"{"screens": []}"#)]);
    let output = TempDir::new().unwrap();
    let target = output.path().join("reports/sprint-12");
    let kb = builtin_kb();

    let summary = run_batch(&Analyzer::new(&kb), input.path(), &target).unwrap();

    assert_eq!(summary.written.len(), 1);
    let result = read_result(&target.join("empty-results.json"));
    assert_eq!(result.total_screens, 0);
    assert_eq!(result.total_issues, 0);
}

#[test]
fn test_missing_input_directory_is_an_error() {
    let output = TempDir::new().unwrap();
    let kb = builtin_kb();

    let result = run_batch(
        &Analyzer::new(&kb),
        &output.path().join("does-not-exist"),
        output.path(),
    );

    assert!(result.is_err());
}
