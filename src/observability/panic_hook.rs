//! Panic hook printing a crash report to stderr.
//!
//! The report names the version, the stage, and the export being processed.

use super::context::{get_current_context, RunContext};
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "================================================================================";

/// Install the crash report hook. Call once, early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let context = get_current_context();
    eprintln!();
    eprintln!("{RULE}");
    eprintln!("EDGELINT CRASH REPORT");
    eprintln!("{RULE}");
    for line in report_lines(&context, &extract_panic_message(info), info.location()) {
        eprintln!("{line}");
    }

    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!("{RULE}");
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("Run with RUST_BACKTRACE=1 for stack trace");
    }
    eprintln!("{RULE}");
}

fn report_lines(
    context: &RunContext,
    message: &str,
    location: Option<&std::panic::Location<'_>>,
) -> Vec<String> {
    let mut lines = vec![
        format!("Version: {VERSION}"),
        format!("Platform: {}", std::env::consts::OS),
        format!("Time: {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")),
        format!("Panic: {message}"),
    ];
    if let Some(location) = location {
        lines.push(format!(
            "Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ));
    }
    match context.stage {
        Some(stage) => lines.push(format!("Stage: {stage}")),
        None => lines.push("Stage: (not set)".to_string()),
    }
    if let Some(file) = &context.current_file {
        lines.push(format!("Input: {}", file.display()));
    }
    lines
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
