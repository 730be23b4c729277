//! Missing edge-case detection over a batch of exported screens.
//!
//! Each screen is flattened to lowercase text, matched against the knowledge
//! base patterns, and checked for the edge cases those patterns require. The
//! per-screen results are then folded into one [`AnalysisResult`] together
//! with the cross-screen flow findings.
//!
//! ```rust
//! use edgelint::core::Screen;
//! use edgelint::detector::Analyzer;
//! use edgelint::knowledge::KnowledgeBase;
//!
//! let kb = KnowledgeBase::builtin().unwrap();
//! let screens = vec![Screen::new("1", "Login Form")];
//! let result = Analyzer::new(&kb).analyze(&screens).unwrap();
//! assert_eq!(result.total_screens, 1);
//! ```

pub mod edge_cases;
pub mod flatten;
pub mod flow;
pub mod patterns;

pub use edge_cases::{check_edge_cases, has_common_indicator, COMMON_INDICATORS};
pub use flatten::{flatten_nodes, flatten_screen};
pub use flow::analyze_flow;
pub use patterns::detect_patterns;

use crate::core::{AnalysisResult, FlowIssues, Result, Screen, ScreenAnalysis, Severity};
use crate::knowledge::KnowledgeBase;
use crate::observability::get_current_context;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use tracing::{debug, info_span};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Analyze screens on the rayon pool
    pub parallel: bool,
    /// Reject trees nested deeper than this; unbounded when `None`
    pub max_tree_depth: Option<usize>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            max_tree_depth: None,
        }
    }
}

/// Runs detection against an injected knowledge base
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'kb> {
    knowledge_base: &'kb KnowledgeBase,
    options: AnalysisOptions,
}

impl<'kb> Analyzer<'kb> {
    pub fn new(knowledge_base: &'kb KnowledgeBase) -> Self {
        Self::with_options(knowledge_base, AnalysisOptions::default())
    }

    pub fn with_options(knowledge_base: &'kb KnowledgeBase, options: AnalysisOptions) -> Self {
        Self {
            knowledge_base,
            options,
        }
    }

    pub fn knowledge_base(&self) -> &'kb KnowledgeBase {
        self.knowledge_base
    }

    pub fn analyze_screen(&self, screen: &Screen) -> Result<ScreenAnalysis> {
        let text = flatten_screen(screen, self.options.max_tree_depth)?;
        let detected = detect_patterns(&text, self.knowledge_base);
        let issues = check_edge_cases(screen, &text, &detected);

        debug!(
            screen = %screen.name,
            patterns = detected.len(),
            issues = issues.len(),
            "Analyzed screen"
        );

        Ok(ScreenAnalysis {
            screen_id: screen.id.clone(),
            screen_name: screen.name.clone(),
            detected_patterns: detected.iter().map(|pattern| pattern.id.clone()).collect(),
            missing_states: issues.iter().map(|issue| issue.name.clone()).collect(),
            issues,
        })
    }

    pub fn analyze(&self, screens: &[Screen]) -> Result<AnalysisResult> {
        self.analyze_at(screens, Utc::now())
    }

    /// Same as [`Analyzer::analyze`] with a fixed timestamp, for reproducible output
    pub fn analyze_at(&self, screens: &[Screen], timestamp: DateTime<Utc>) -> Result<AnalysisResult> {
        let _span = info_span!("analyze", screens = screens.len()).entered();

        let analyses = if self.options.parallel {
            let context = get_current_context();
            screens
                .par_iter()
                .map(|screen| {
                    let _context = context.enter();
                    self.analyze_screen(screen)
                })
                .collect::<Result<Vec<_>>>()?
        } else {
            screens
                .iter()
                .map(|screen| self.analyze_screen(screen))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(aggregate(analyses, analyze_flow(screens), timestamp))
    }
}

/// Fold per-screen analyses and flow findings into one result
pub fn aggregate(
    screens: Vec<ScreenAnalysis>,
    flow_issues: FlowIssues,
    timestamp: DateTime<Utc>,
) -> AnalysisResult {
    let count = |severity: Severity| {
        screens
            .iter()
            .flat_map(|screen| screen.issues.iter())
            .filter(|issue| issue.severity == severity)
            .count()
    };

    let critical_count = count(Severity::Critical);
    let warning_count = count(Severity::Warning);
    let info_count = count(Severity::Info);

    AnalysisResult {
        timestamp,
        total_screens: screens.len(),
        total_issues: screens.iter().map(|screen| screen.issues.len()).sum(),
        critical_count,
        warning_count,
        info_count,
        screens,
        flow_issues,
    }
}
