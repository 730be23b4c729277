pub mod errors;
pub mod types;

pub use errors::{Error, MalformedTreeReason, Result};
pub use types::{
    AnalysisResult, Connection, DesignNode, FlowIssues, Issue, Screen, ScreenAnalysis, Severity,
};
