//! Lightweight diagnostics for the bikeshare explorer.
//!
//! Emits structured logs to stderr so they never interleave with the report
//! output on stdout.
//!
//! Usage:
//! - Set BIKESHARE_LOG=off (default) - no logs
//! - Set BIKESHARE_LOG=info - load/filter summaries
//! - Set BIKESHARE_LOG=debug - per-stage detail (row counts, timings)

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

static INIT: Once = Once::new();

/// Initialize diagnostics based on the BIKESHARE_LOG environment variable.
///
/// Safe to call more than once; only the first call has any effect.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let log_level = std::env::var("BIKESHARE_LOG").unwrap_or_else(|_| "off".to_string());

        let min_level = match log_level.as_str() {
            "off" => return,
            "debug" => emit::Level::Debug,
            "info" => emit::Level::Info,
            "warn" => emit::Level::Warn,
            "error" => emit::Level::Error,
            other => {
                eprintln!("Warning: unknown BIKESHARE_LOG value '{}', using 'info'", other);
                emit::Level::Info
            }
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(min_level))
            .init();

        // The runtime must live for the rest of the process.
        std::mem::forget(rt);
    });
}

/// Log basic operations (dataset loads, filter selections, report timings).
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log detailed diagnostics (row counts, schema capabilities, parse progress).
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log warnings (recoverable input problems).
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log errors (failed loads, malformed source data).
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}
