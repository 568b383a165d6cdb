//! Logging infrastructure for the bootstrap and converter.
//!
//! This module provides:
//! - A per-run logger that prints plain progress lines to a sink (stdout by default)
//! - Level filtering and message prefixes (`=== Phase ===`, `$ command`, ...)
//! - A tail buffer for diagnosing failed external tools
//! - Integration with the `tracing` ecosystem for diagnostics
//!
//! # Example
//!
//! ```no_run
//! use oncotree_core::logging::{LogConfig, RunLogger};
//!
//! let logger = RunLogger::new("bootstrap", LogConfig::default(), None);
//! logger.phase("Install dependencies");
//! logger.command("python -m pip install -r requirements.txt");
//! logger.success("Dependencies installed");
//! ```

mod run_logger;
mod types;

pub use run_logger::RunLogger;
pub use types::{LogConfig, LogLevel, LogSink, MessagePrefix};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG`, falls back to `default_level`, writes to stderr so
/// it never interleaves with the plain progress lines on stdout.
///
/// Should be called once at startup. Calling it twice is a no-op.
pub fn init_tracing(default_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_to_filter_str(default_level)));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .with(filter)
        .try_init();
}

/// Initialize tracing for tests (only logs warnings and above).
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

/// Convert LogLevel to filter string.
fn level_to_filter_str(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_to_filter_works() {
        assert_eq!(level_to_filter_str(LogLevel::Debug), "debug");
        assert_eq!(level_to_filter_str(LogLevel::Warn), "warn");
    }

    #[test]
    fn init_tracing_twice_does_not_panic() {
        init_test_tracing();
        init_tracing(LogLevel::Info);
        init_tracing(LogLevel::Debug);
    }
}
