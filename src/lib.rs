// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod detector;
pub mod io;
pub mod knowledge;
pub mod observability;

// Re-export commonly used types
pub use crate::core::{
    AnalysisResult, Connection, DesignNode, Error, FlowIssues, Issue, MalformedTreeReason,
    Result, Screen, ScreenAnalysis, Severity,
};

pub use crate::detector::{
    aggregate, analyze_flow, check_edge_cases, detect_patterns, flatten_screen, AnalysisOptions,
    Analyzer,
};

pub use crate::knowledge::{Component, ComponentLibrary, EdgeCase, KnowledgeBase, Pattern};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::config::{load_config, EdgelintConfig};
