//! Checker shell commands
//!
//! Parsing, dispatch and replies for the line-oriented credential checker.

pub mod handlers;
pub mod parser;
pub mod responses;
pub mod session;
pub mod shell;

pub use handlers::{CommandResult, CommandStatus, handle_command};
pub use parser::{Command, parse_command};
pub use session::CheckerSession;
pub use shell::run_shell;
