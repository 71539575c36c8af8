//! Logging for confscrub runs.
//!
//! All events go to stderr so `run --json` keeps stdout machine-readable.
//! What each level shows during a run:
//!
//! | Level | Events |
//! |-------|--------|
//! | error | nothing is logged; failures surface as the command's error |
//! | info  | `processing file` per handled file, `redacted key` per replaced value, the closing `redaction finished` totals, and skipped runs (no keys, missing root) |
//! | debug | files that were not selected, had no adapter or had nothing to redact, and every rewrite |
//! | trace | every path checked by the selector and every key the walk passed over |
//!
//! `RUST_LOG` replaces the `confscrub=<level>` filter derived from `-q`/`-v`.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// `-q`: only the final error, if any.
    Quiet,
    /// Per-file and per-key redaction events.
    #[default]
    Normal,
    /// `-v`: also selection misses and unchanged files.
    Verbose,
    /// `-vv`: every path checked and key visited.
    Trace,
}

impl Verbosity {
    /// The level used for the `confscrub` target.
    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Install the stderr subscriber. Later calls are no-ops.
///
/// # Examples
///
/// ```no_run
/// use confscrub::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::Verbose);
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let default_filter = format!("confscrub={}", verbosity.to_level_filter());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(std::io::stderr),
    );

    // Ignore the error if a subscriber is already installed.
    let _ = subscriber.try_init();
}

/// Initialize logging for tests.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}
