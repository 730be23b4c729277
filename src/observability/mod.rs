//! Logging setup and crash reports.
//!
//! Logs go to stderr so reports written to stdout stay clean. `RUST_LOG`
//! takes precedence over the `-v` count.
//!
//! ```ignore
//! use edgelint::observability::{init_logging, install_panic_hook};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_logging(cli.verbosity);
//! }
//! ```

pub mod context;
pub mod panic_hook;

pub use context::{get_current_context, set_current_file, set_stage, ContextGuard, RunContext, Stage};
pub use panic_hook::install_panic_hook;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level directive for a `-v` count.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("edgelint={}", level_for_verbosity(verbosity))));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
