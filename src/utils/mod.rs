//! Utility functions
//!
//! Common helpers used across the checker.

pub mod input;
pub mod logging;

pub use input::{LineRead, read_command_line};
pub use logging::setup_logging;
