//! Checker shell loop
//!
//! Reads command lines from any `BufRead`, dispatches them, and writes replies
//! to any `Write`. `main` wires this to stdin/stdout; tests use in-memory buffers.

use log::{info, warn};
use std::io::{BufRead, Write};

use crate::commands::handlers::{CommandStatus, handle_command};
use crate::commands::parser::parse_command;
use crate::commands::responses::{READY, format_response};
use crate::commands::session::CheckerSession;
use crate::config::CheckerConfig;
use crate::error::{CheckerError, CommandError, error_to_reply_code};
use crate::utils::input::{LineRead, read_command_line};

/// Run the shell until QUIT or end of input.
pub fn run_shell<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    config: &CheckerConfig,
) -> Result<(), CheckerError> {
    let mut session = CheckerSession::new();
    let mut buf = Vec::new();

    writer.write_all(format_response(READY, "BeeKind credential checker ready").as_bytes())?;

    loop {
        if !config.prompt.is_empty() {
            writer.write_all(config.prompt.as_bytes())?;
        }
        writer.flush()?;

        let line = match read_command_line(&mut reader, &mut buf, config.max_line_length)? {
            LineRead::Line(line) => line,
            LineRead::Eof => {
                info!("End of input");
                break;
            }
            LineRead::TooLong => {
                reject(&mut writer, &CommandError::LineTooLong(config.max_line_length))?;
                continue;
            }
            LineRead::InvalidUtf8 => {
                reject(&mut writer, &CommandError::InvalidEncoding)?;
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(command) => {
                info!("Received: {}", command.redacted());
                let result = handle_command(&mut session, command, config);
                writer.write_all(result.message.as_bytes())?;
                if result.status == CommandStatus::Quit {
                    info!("Session ended by QUIT");
                    break;
                }
            }
            Err(err) => reject(&mut writer, &err)?,
        }
    }

    writer.flush()?;
    Ok(())
}

fn reject<W: Write>(writer: &mut W, err: &CommandError) -> Result<(), CheckerError> {
    warn!("Rejected line: {}", err);
    let reply = format_response(error_to_reply_code(err), &err.to_string());
    writer.write_all(reply.as_bytes())?;
    Ok(())
}
