//! Thread-local context for crash reports.
//!
//! Commands record the stage they are in and the export being processed so
//! the panic hook can say what edgelint was doing when it crashed.

use std::cell::RefCell;
use std::path::PathBuf;

thread_local! {
    static CURRENT_CONTEXT: RefCell<RunContext> = const { RefCell::new(RunContext::new()) };
}

#[derive(Debug, Clone, Default)]
pub struct RunContext {
    pub stage: Option<Stage>,
    pub current_file: Option<PathBuf>,
}

impl RunContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stage: None,
            current_file: None,
        }
    }

    /// Install this context on the current thread until the guard drops.
    /// Used to carry the caller's context onto rayon workers.
    #[must_use]
    pub fn enter(&self) -> ContextGuard {
        CURRENT_CONTEXT.with(|ctx| {
            let previous = ctx.replace(self.clone());
            ContextGuard { previous }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    KnowledgeBaseLoading,
    InputLoading,
    Detection,
    OutputGeneration,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KnowledgeBaseLoading => write!(f, "knowledge_base_loading"),
            Self::InputLoading => write!(f, "input_loading"),
            Self::Detection => write!(f, "detection"),
            Self::OutputGeneration => write!(f, "output_generation"),
        }
    }
}

/// Restores the previous context on drop.
pub struct ContextGuard {
    previous: RunContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

#[must_use]
pub fn set_stage(stage: Stage) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().stage = Some(stage);
        ContextGuard { previous }
    })
}

#[must_use]
pub fn set_current_file(path: impl Into<PathBuf>) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().current_file = Some(path.into());
        ContextGuard { previous }
    })
}

#[must_use]
pub fn get_current_context() -> RunContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guards_restore_previous_context() {
        let _file = set_current_file("exports/home.json");
        {
            let _stage = set_stage(Stage::Detection);
            let ctx = get_current_context();
            assert_eq!(ctx.stage, Some(Stage::Detection));
            assert_eq!(ctx.current_file, Some(PathBuf::from("exports/home.json")));
        }
        let ctx = get_current_context();
        assert_eq!(ctx.stage, None);
        assert_eq!(ctx.current_file, Some(PathBuf::from("exports/home.json")));
    }

    #[test]
    fn test_entered_context_is_visible_on_worker_thread() {
        let _file = set_current_file("exports/orders.json");
        let _stage = set_stage(Stage::Detection);
        let captured = get_current_context();

        let seen = std::thread::spawn(move || {
            let before = get_current_context();
            let inside = {
                let _guard = captured.enter();
                get_current_context()
            };
            (before, inside, get_current_context())
        })
        .join()
        .unwrap();

        assert_eq!(seen.0.stage, None);
        assert_eq!(seen.1.stage, Some(Stage::Detection));
        assert_eq!(seen.1.current_file, Some(PathBuf::from("exports/orders.json")));
        assert_eq!(seen.2.current_file, None);
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::InputLoading.to_string(), "input_loading");
        assert_eq!(Stage::OutputGeneration.to_string(), "output_generation");
    }
}
