//! Structured logging setup
//!
//! Thin wrappers over `tracing-subscriber` for binaries and examples. The
//! library crates only emit `tracing` events; installing a subscriber is left
//! to the process entry point. `RUST_LOG` overrides the default level, e.g.
//! `RUST_LOG=rep_core=debug,rep_store=trace`.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging at `info` level (or whatever `RUST_LOG` says).
pub fn init_logging() {
    init_logging_with_level("info")
}

/// Initialize logging at the given default level.
///
/// Safe to call more than once; later calls are no-ops when a global
/// subscriber is already installed.
pub fn init_logging_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
