use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "edgelint")]
#[command(
    about = "Detects missing edge-case UI states in exported design screens",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Configuration file (defaults to the nearest .edgelint.toml)
    #[arg(long, global = true, env = "EDGELINT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Knowledge base overrides shared by every command that analyzes
#[derive(clap::Args, Debug, Clone, Default)]
pub struct KnowledgeBaseArgs {
    /// Patterns table (JSON) replacing the builtin one
    #[arg(long)]
    pub patterns: Option<PathBuf>,

    /// Components table (JSON) replacing the builtin one
    #[arg(long)]
    pub components: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct PerformanceArgs {
    /// Analyze screens sequentially
    #[arg(long = "no-parallel")]
    pub no_parallel: bool,

    /// Number of worker threads (0 = all cores)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    pub jobs: usize,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one screen export for missing edge cases
    Analyze {
        /// Screen export: {"screens": [...]} or a bare array
        input: PathBuf,

        /// Output format (defaults to the config file's, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exit with an error when issues at or above this severity exist
        #[arg(long = "fail-on", value_enum)]
        fail_on: Option<SeverityArg>,

        #[command(flatten)]
        knowledge_base: KnowledgeBaseArgs,

        #[command(flatten)]
        performance: PerformanceArgs,
    },

    /// Analyze every *.json export in a directory into <name>-results.json files
    Batch {
        /// Directory holding screen exports
        input_dir: PathBuf,

        /// Directory for result files (created if absent)
        output_dir: PathBuf,

        #[command(flatten)]
        knowledge_base: KnowledgeBaseArgs,

        #[command(flatten)]
        performance: PerformanceArgs,
    },

    /// List knowledge base patterns and their required edge cases
    Patterns {
        #[command(flatten)]
        knowledge_base: KnowledgeBaseArgs,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum SeverityArg {
    Info,
    Warning,
    Critical,
}

impl From<SeverityArg> for crate::core::Severity {
    fn from(s: SeverityArg) -> Self {
        match s {
            SeverityArg::Info => crate::core::Severity::Info,
            SeverityArg::Warning => crate::core::Severity::Warning,
            SeverityArg::Critical => crate::core::Severity::Critical,
        }
    }
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
