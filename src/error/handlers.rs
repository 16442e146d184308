//! Error handlers
//!
//! Logging and reply-code mapping for checker errors.

use crate::commands::responses::{LINE_TOO_LONG, SYNTAX_ERROR, UNKNOWN_COMMAND};
use crate::error::types::{CheckerError, CommandError};
use log::error;

/// Log a fatal checker error
pub fn handle_error(err: &CheckerError) {
    error!("Checker error: {}", err);
}

/// Reply code sent back for a command error
pub fn error_to_reply_code(err: &CommandError) -> u16 {
    match err {
        CommandError::Unknown(_) => UNKNOWN_COMMAND,
        CommandError::MissingArgument(_) => SYNTAX_ERROR,
        CommandError::UnknownField(_) => SYNTAX_ERROR,
        CommandError::LineTooLong(_) => LINE_TOO_LONG,
        CommandError::InvalidEncoding => SYNTAX_ERROR,
    }
}
