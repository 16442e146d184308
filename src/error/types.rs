//! Error types
//!
//! Errors raised by the checker shell and its configuration. Credential
//! validation itself never errors; problems with user input are reported
//! through `ValidationResult`.

use std::fmt;
use std::io;

/// Problems with a single shell line
#[derive(Debug, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument(&'static str),
    UnknownField(String),
    LineTooLong(usize),
    InvalidEncoding,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown(c) => write!(f, "Unknown command: {}", c),
            CommandError::MissingArgument(usage) => write!(f, "Missing argument, usage: {}", usage),
            CommandError::UnknownField(name) => write!(f, "Unknown field: {}", name),
            CommandError::LineTooLong(max) => write!(f, "Line too long (max {} bytes)", max),
            CommandError::InvalidEncoding => write!(f, "Line is not valid UTF-8"),
        }
    }
}

impl std::error::Error for CommandError {}

/// Fatal checker errors
#[derive(Debug)]
pub enum CheckerError {
    Config(config::ConfigError),
    Io(io::Error),
}

impl fmt::Display for CheckerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckerError::Config(e) => write!(f, "Configuration error: {}", e),
            CheckerError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for CheckerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckerError::Config(e) => Some(e),
            CheckerError::Io(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for CheckerError {
    fn from(error: config::ConfigError) -> Self {
        CheckerError::Config(error)
    }
}

impl From<io::Error> for CheckerError {
    fn from(error: io::Error) -> Self {
        CheckerError::Io(error)
    }
}
