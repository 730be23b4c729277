//! CLI command implementations for edgelint operations.
//!
//! Available commands:
//! - **analyze**: Detect missing edge cases in one screen export
//! - **batch**: Analyze every export in a directory into `<name>-results.json`
//! - **patterns**: List the knowledge base patterns and their edge cases
//! - **init**: Write a default `.edgelint.toml`

pub mod analyze;
pub mod batch;
pub mod init;
pub mod patterns;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use batch::{handle_batch, run_batch, BatchConfig, BatchSummary};
pub use init::init_config;
pub use patterns::{handle_patterns, list_patterns};

use crate::config::KnowledgeBaseConfig;
use crate::knowledge::KnowledgeBase;
use crate::observability::{set_stage, Stage};
use anyhow::{Context, Result};

pub(crate) fn load_knowledge_base(config: &KnowledgeBaseConfig) -> Result<KnowledgeBase> {
    let _stage = set_stage(Stage::KnowledgeBaseLoading);
    let kb = KnowledgeBase::load(config.patterns.as_deref(), config.components.as_deref())
        .context("Failed to load knowledge base")?;
    tracing::info!(
        patterns = kb.patterns().len(),
        edge_cases = kb.edge_case_count(),
        components = kb.components().len(),
        "Knowledge base loaded"
    );
    Ok(kb)
}
