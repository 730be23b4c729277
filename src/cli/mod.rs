//! CLI module for edgelint
//!
//! This module provides the command-line interface for edgelint, including:
//! - Argument parsing (`args`)
//! - Runtime setup and flag/config merging (`setup`)

pub mod args;
pub mod setup;

pub use args::{Cli, Commands, KnowledgeBaseArgs, OutputFormat, PerformanceArgs, SeverityArg};
pub use setup::{
    configure_thread_pool, get_worker_count, merge_analysis_options, merge_knowledge_base,
    resolve_config,
};

use crate::commands::{self, AnalyzeConfig, BatchConfig};
use anyhow::Result;

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}

/// Dispatch a parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze {
            input,
            format,
            output,
            fail_on,
            knowledge_base,
            performance,
        } => {
            configure_thread_pool(performance.jobs);
            let format = format
                .map(crate::io::OutputFormat::from)
                .or(config.output.default_format)
                .unwrap_or(crate::io::OutputFormat::Terminal);

            commands::handle_analyze(AnalyzeConfig {
                input,
                format,
                output,
                knowledge_base: merge_knowledge_base(&knowledge_base, &config),
                options: merge_analysis_options(&performance, &config),
                fail_on: fail_on.map(Into::into),
            })
        }
        Commands::Batch {
            input_dir,
            output_dir,
            knowledge_base,
            performance,
        } => {
            configure_thread_pool(performance.jobs);
            commands::handle_batch(BatchConfig {
                input_dir,
                output_dir,
                knowledge_base: merge_knowledge_base(&knowledge_base, &config),
                options: merge_analysis_options(&performance, &config),
            })
        }
        Commands::Patterns { knowledge_base } => {
            commands::handle_patterns(&merge_knowledge_base(&knowledge_base, &config))
        }
        Commands::Init { force } => commands::init_config(force),
    }
}
