//! Command handlers
//!
//! Runs a parsed command against the session and builds the reply text.

use log::debug;

use crate::commands::parser::Command;
use crate::commands::responses::{
    FORM_UPDATED, GOODBYE, INFO, INVALID, VALID, format_multiline, format_response,
};
use crate::commands::session::CheckerSession;
use crate::config::CheckerConfig;
use crate::validation::{
    Field, SECURITY_TIPS, ValidationResult, get_password_strength, requirement_summary,
    requirements, validate_field, validate_password_confirmation,
};

#[derive(Debug, PartialEq, Eq)]
pub enum CommandStatus {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: String,
}

impl CommandResult {
    fn reply(message: String) -> Self {
        Self {
            status: CommandStatus::Continue,
            message,
        }
    }
}

const HELP_LINES: &[&str] = &[
    "USERNAME <value>             check a username",
    "EMAIL <value>                check an email address",
    "PASSWORD <value>             check a password",
    "CONFIRM <password> <confirm> check that two passwords match",
    "STRENGTH <password>          rate a password",
    "SET <field> <value>          fill in the sign-up form",
    "SUBMIT                       validate the sign-up form",
    "LOGIN <email> <password>     validate sign-in details",
    "RULES [field]                show requirements",
    "RESET                        clear both forms",
    "QUIT                         leave",
];

pub fn handle_command(
    session: &mut CheckerSession,
    command: Command,
    config: &CheckerConfig,
) -> CommandResult {
    let result = match command {
        Command::Quit => {
            return CommandResult {
                status: CommandStatus::Quit,
                message: format_response(GOODBYE, "Goodbye"),
            };
        }
        Command::Help => handle_cmd_help(),
        Command::Reset => {
            session.reset();
            CommandResult::reply(format_response(FORM_UPDATED, "Forms cleared"))
        }
        Command::Submit => handle_cmd_submit(session, config),
        Command::Rules(field) => handle_cmd_rules(field),
        Command::Check(field, value) => handle_cmd_check(session, field, &value, config),
        Command::Confirm { password, confirm } => {
            let result = validate_password_confirmation(&password, &confirm);
            CommandResult::reply(validation_reply(&result, "Passwords match", config))
        }
        Command::Strength(password) => CommandResult::reply(strength_reply(&password)),
        Command::Set(field, value) => handle_cmd_set(session, field, value, config),
        Command::Login { email, password } => handle_cmd_login(session, email, password, config),
    };
    debug!("Reply: {}", result.message.lines().last().unwrap_or_default());
    result
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::Username => "Username",
        Field::Email => "Email",
        Field::Password => "Password",
        Field::ConfirmPassword => "Confirmation",
    }
}

fn handle_cmd_help() -> CommandResult {
    let lines: Vec<String> = HELP_LINES.iter().map(|l| l.to_string()).collect();
    CommandResult::reply(format_multiline(INFO, &lines, "End of help"))
}

fn handle_cmd_rules(field: Option<Field>) -> CommandResult {
    let lines: Vec<String> = match field {
        None => Field::ALL
            .iter()
            .map(|f| requirement_summary(*f).to_string())
            .collect(),
        Some(field) => {
            let mut lines: Vec<String> = requirements(field).iter().map(|r| r.to_string()).collect();
            if field == Field::Password {
                lines.extend(SECURITY_TIPS.iter().map(|tip| format!("Tip: {}", tip)));
            }
            lines
        }
    };
    CommandResult::reply(format_multiline(INFO, &lines, "End of rules"))
}

fn handle_cmd_check(
    session: &CheckerSession,
    field: Field,
    value: &str,
    config: &CheckerConfig,
) -> CommandResult {
    let password = session.registration().value(Field::Password);
    let result = validate_field(field, value, password);
    let mut message = validation_reply(
        &result,
        &format!("{} is valid", field_label(field)),
        config,
    );
    if field == Field::Password && config.show_strength {
        message.push_str(&strength_reply(value));
    }
    CommandResult::reply(message)
}

fn handle_cmd_set(
    session: &mut CheckerSession,
    field: Field,
    value: String,
    config: &CheckerConfig,
) -> CommandResult {
    let form = session.registration_mut();
    let errors = form.set_field(field, value).to_vec();
    let result = ValidationResult::from_errors(errors);
    let mut message = if result.is_valid {
        format_response(FORM_UPDATED, &format!("{} updated", field_label(field)))
    } else {
        invalid_reply(&result, config)
    };
    if field == Field::Password && config.show_strength {
        message.push_str(&strength_reply(form.value(Field::Password)));
    }
    CommandResult::reply(message)
}

fn handle_cmd_submit(session: &mut CheckerSession, config: &CheckerConfig) -> CommandResult {
    let form = session.registration_mut();
    let result = form.submit();
    if !result.is_valid {
        return CommandResult::reply(invalid_reply(&result, config));
    }

    let who = match form.value(Field::Username) {
        "" => form.value(Field::Email).to_string(),
        username => username.to_string(),
    };
    form.reset();
    CommandResult::reply(format_response(
        VALID,
        &format!("Registration details accepted for {}", who),
    ))
}

fn handle_cmd_login(
    session: &mut CheckerSession,
    email: String,
    password: String,
    config: &CheckerConfig,
) -> CommandResult {
    let form = session.login_mut();
    form.set_email(email);
    form.set_password(password);
    let result = form.submit();
    let ok = format!("Login details accepted for {}", form.email());
    CommandResult::reply(validation_reply(&result, &ok, config))
}

fn validation_reply(result: &ValidationResult, ok: &str, config: &CheckerConfig) -> String {
    if result.is_valid {
        format_response(VALID, ok)
    } else {
        invalid_reply(result, config)
    }
}

/// 450 reply listing every error, or only the first one.
fn invalid_reply(result: &ValidationResult, config: &CheckerConfig) -> String {
    if !config.show_all_errors {
        return format_response(INVALID, result.first_error().unwrap_or_default());
    }
    let count = result.errors.len();
    let summary = if count == 1 {
        "1 problem found".to_string()
    } else {
        format!("{} problems found", count)
    };
    format_multiline(INVALID, &result.errors, &summary)
}

fn strength_reply(password: &str) -> String {
    let strength = get_password_strength(password);
    format_response(
        INFO,
        &format!(
            "Strength: {} ({}/8, {}%)",
            strength.label,
            strength.score,
            strength.percentage()
        ),
    )
}
