//! BeeKind credential checker - Entry Point
//!
//! Interactive shell for checking sign-up and sign-in details against the
//! BeeKind Lab credential rules.

use log::info;
use std::io;
use std::process::ExitCode;

use beekind_lab::CheckerConfig;
use beekind_lab::commands::run_shell;
use beekind_lab::error::{CheckerError, handle_error};
use beekind_lab::utils::setup_logging;

fn main() -> ExitCode {
    setup_logging();

    info!("Launching credential checker...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            handle_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CheckerError> {
    let config = CheckerConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_shell(stdin.lock(), stdout.lock(), &config)
}
