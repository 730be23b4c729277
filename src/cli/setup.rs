//! Setup and initialization functions for CLI
//!
//! Thread pool sizing and merging CLI flags over the config file.

use super::args::{KnowledgeBaseArgs, PerformanceArgs};
use crate::config::{EdgelintConfig, KnowledgeBaseConfig};
use crate::detector::AnalysisOptions;
use std::path::Path;

/// Configure rayon global thread pool once at startup
pub fn configure_thread_pool(jobs: usize) {
    let workers = get_worker_count(jobs);

    match rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build_global()
    {
        Ok(()) => tracing::info!("Using {} worker thread(s)", workers),
        // Already configured - this is fine, just ignore
        Err(e) => tracing::debug!("Thread pool already configured: {}", e),
    }
}

/// Get the number of worker threads to use
pub fn get_worker_count(jobs: usize) -> usize {
    if jobs == 0 {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
    } else {
        jobs
    }
}

/// Explicit `--config` wins; otherwise search upward from the working directory
pub fn resolve_config(explicit: Option<&Path>) -> crate::core::Result<EdgelintConfig> {
    match explicit {
        Some(path) => crate::config::load_config_from(path),
        None => Ok(crate::config::load_config()),
    }
}

/// CLI paths override the config file per table
pub fn merge_knowledge_base(args: &KnowledgeBaseArgs, config: &EdgelintConfig) -> KnowledgeBaseConfig {
    KnowledgeBaseConfig {
        patterns: args
            .patterns
            .clone()
            .or_else(|| config.knowledge_base.patterns.clone()),
        components: args
            .components
            .clone()
            .or_else(|| config.knowledge_base.components.clone()),
    }
}

pub fn merge_analysis_options(args: &PerformanceArgs, config: &EdgelintConfig) -> AnalysisOptions {
    let mut options = AnalysisOptions::from(&config.analysis);
    if args.no_parallel {
        options.parallel = false;
    }
    options
}
