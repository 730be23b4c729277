// Test utility module for edgelint integration tests
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use edgelint::core::{AnalysisResult, DesignNode, Screen};
use edgelint::detector::Analyzer;
use edgelint::io::load_screens;
use edgelint::knowledge::KnowledgeBase;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> Vec<Screen> {
    load_screens(&fixture_path(name)).expect("Failed to load fixture")
}

pub fn builtin_kb() -> KnowledgeBase {
    KnowledgeBase::builtin().expect("Builtin knowledge base must parse")
}

pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

/// Analyze with the builtin knowledge base at a fixed timestamp
pub fn analyze(screens: &[Screen]) -> AnalysisResult {
    let kb = builtin_kb();
    Analyzer::new(&kb)
        .analyze_at(screens, fixed_timestamp())
        .expect("Analysis failed")
}

/// Screen whose children are leaf nodes with the given names
pub fn screen_with_nodes(id: &str, name: &str, node_names: &[&str]) -> Screen {
    let children = node_names
        .iter()
        .enumerate()
        .map(|(i, node)| DesignNode::new(format!("{id}:{i}"), *node))
        .collect();
    Screen::new(id, name).with_children(children)
}

// Helper to create temporary export files
pub fn create_export_dir(files: &[(&str, &str)]) -> tempfile::TempDir {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    for (name, content) in files {
        std::fs::write(temp_dir.path().join(name), content).expect("Failed to write export");
    }
    temp_dir
}
