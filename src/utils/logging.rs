//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::Env;

/// Setup logging for the checker.
///
/// `RUST_LOG` wins when set; otherwise only warnings and errors are shown so
/// log lines do not drown out the interactive replies.
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}
