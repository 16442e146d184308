//! Command parsing
//!
//! Turns one shell line into a [`Command`]. The verb is case-insensitive and
//! separated from its arguments by whitespace; the last argument keeps any
//! interior spaces so passwords like `"my hive key!"` survive intact.

use crate::error::CommandError;
use crate::validation::Field;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Reset,
    Submit,
    Rules(Option<Field>),
    Check(Field, String),
    Confirm { password: String, confirm: String },
    Strength(String),
    Set(Field, String),
    Login { email: String, password: String },
}

impl Command {
    /// Log-safe rendering with password values masked.
    pub fn redacted(&self) -> String {
        match self {
            Command::Check(Field::Password, _) => "PASSWORD ***".to_string(),
            Command::Check(field, value) => format!("CHECK {} {}", field, value),
            Command::Confirm { .. } => "CONFIRM *** ***".to_string(),
            Command::Strength(_) => "STRENGTH ***".to_string(),
            Command::Set(field @ (Field::Password | Field::ConfirmPassword), _) => {
                format!("SET {} ***", field)
            }
            Command::Set(field, value) => format!("SET {} {}", field, value),
            Command::Login { email, .. } => format!("LOGIN {} ***", email),
            Command::Rules(Some(field)) => format!("RULES {}", field),
            Command::Rules(None) => "RULES".to_string(),
            other => format!("{:?}", other).to_ascii_uppercase(),
        }
    }
}

const USAGE_USERNAME: &str = "USERNAME <value>";
const USAGE_EMAIL: &str = "EMAIL <value>";
const USAGE_PASSWORD: &str = "PASSWORD <value>";
const USAGE_CONFIRM: &str = "CONFIRM <password> <confirm>";
const USAGE_STRENGTH: &str = "STRENGTH <password>";
const USAGE_SET: &str = "SET <field> <value>";
const USAGE_LOGIN: &str = "LOGIN <email> <password>";

/// Parse a raw line (without its line terminator) into a command.
pub fn parse_command(raw: &str) -> Result<Command, CommandError> {
    let line = raw.trim_start();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (line.trim_end(), ""),
    };

    match verb.to_ascii_uppercase().as_str() {
        "QUIT" | "Q" => Ok(Command::Quit),
        "HELP" => Ok(Command::Help),
        "RESET" => Ok(Command::Reset),
        "SUBMIT" => Ok(Command::Submit),
        "RULES" => parse_rules(rest.trim()),
        "USERNAME" => single_arg(rest, USAGE_USERNAME)
            .map(|value| Command::Check(Field::Username, value)),
        "EMAIL" => single_arg(rest, USAGE_EMAIL).map(|value| Command::Check(Field::Email, value)),
        "PASSWORD" => {
            single_arg(rest, USAGE_PASSWORD).map(|value| Command::Check(Field::Password, value))
        }
        "STRENGTH" => single_arg(rest, USAGE_STRENGTH).map(Command::Strength),
        "CONFIRM" => {
            let (password, confirm) = two_args(rest, USAGE_CONFIRM)?;
            Ok(Command::Confirm { password, confirm })
        }
        "SET" => {
            let (name, value) = rest
                .split_once(' ')
                .unwrap_or((rest.trim_end(), ""));
            if name.is_empty() {
                return Err(CommandError::MissingArgument(USAGE_SET));
            }
            let field = parse_field(name)?;
            Ok(Command::Set(field, value.to_string()))
        }
        "LOGIN" => {
            let (email, password) = rest.split_once(' ').unwrap_or((rest.trim_end(), ""));
            if email.is_empty() {
                return Err(CommandError::MissingArgument(USAGE_LOGIN));
            }
            Ok(Command::Login {
                email: email.to_string(),
                password: password.to_string(),
            })
        }
        _ => Err(CommandError::Unknown(line.trim_end().to_string())),
    }
}

fn parse_field(name: &str) -> Result<Field, CommandError> {
    name.parse::<Field>().map_err(CommandError::UnknownField)
}

fn parse_rules(arg: &str) -> Result<Command, CommandError> {
    if arg.is_empty() {
        Ok(Command::Rules(None))
    } else {
        parse_field(arg).map(|field| Command::Rules(Some(field)))
    }
}

fn single_arg(rest: &str, usage: &'static str) -> Result<String, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(usage))
    } else {
        Ok(rest.to_string())
    }
}

fn two_args(rest: &str, usage: &'static str) -> Result<(String, String), CommandError> {
    match rest.split_once(' ') {
        Some((first, second)) if !first.is_empty() => Ok((first.to_string(), second.to_string())),
        _ => Err(CommandError::MissingArgument(usage)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("QUIT"), Ok(Command::Quit));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("RESET  "), Ok(Command::Reset));
        assert_eq!(parse_command("  submit"), Ok(Command::Submit));
        assert_eq!(parse_command("RULES"), Ok(Command::Rules(None)));
        assert_eq!(
            parse_command("RULES email"),
            Ok(Command::Rules(Some(Field::Email)))
        );
    }

    #[test]
    fn test_parse_commands_with_args() {
        assert_eq!(
            parse_command("USERNAME busy_bee"),
            Ok(Command::Check(Field::Username, "busy_bee".to_string()))
        );
        assert_eq!(
            parse_command("email queen@hive.io"),
            Ok(Command::Check(Field::Email, "queen@hive.io".to_string()))
        );
        assert_eq!(
            parse_command("STRENGTH Tr0ub4dor&3xtra!Long"),
            Ok(Command::Strength("Tr0ub4dor&3xtra!Long".to_string()))
        );
        assert_eq!(
            parse_command("CONFIRM X1!aaaaa X1!aaaab"),
            Ok(Command::Confirm {
                password: "X1!aaaaa".to_string(),
                confirm: "X1!aaaab".to_string(),
            })
        );
        assert_eq!(
            parse_command("LOGIN a@b.com"),
            Ok(Command::Login {
                email: "a@b.com".to_string(),
                password: String::new(),
            })
        );
    }

    #[test]
    fn test_last_argument_keeps_spaces() {
        assert_eq!(
            parse_command("PASSWORD my hive key! 7A"),
            Ok(Command::Check(Field::Password, "my hive key! 7A".to_string()))
        );
        assert_eq!(
            parse_command("SET password  lead space"),
            Ok(Command::Set(Field::Password, " lead space".to_string()))
        );
        assert_eq!(
            parse_command("SET confirm"),
            Ok(Command::Set(Field::ConfirmPassword, String::new()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_command("FOO bar"),
            Err(CommandError::Unknown("FOO bar".to_string()))
        );
        assert_eq!(parse_command(""), Err(CommandError::Unknown(String::new())));
        assert_eq!(
            parse_command("EMAIL"),
            Err(CommandError::MissingArgument("EMAIL <value>"))
        );
        assert_eq!(
            parse_command("CONFIRM onlyone"),
            Err(CommandError::MissingArgument("CONFIRM <password> <confirm>"))
        );
        assert_eq!(
            parse_command("SET nickname bob"),
            Err(CommandError::UnknownField("nickname".to_string()))
        );
        assert_eq!(
            parse_command("RULES colour"),
            Err(CommandError::UnknownField("colour".to_string()))
        );
    }

    #[test]
    fn test_redacted_hides_passwords() {
        let command = parse_command("LOGIN a@b.com s3cret").unwrap();
        assert_eq!(command.redacted(), "LOGIN a@b.com ***");
        let command = parse_command("SET password s3cret").unwrap();
        assert!(!command.redacted().contains("s3cret"));
        let command = parse_command("PASSWORD s3cret").unwrap();
        assert!(!command.redacted().contains("s3cret"));
        assert_eq!(Command::Quit.redacted(), "QUIT");
        assert_eq!(Command::Rules(Some(Field::Email)).redacted(), "RULES email");
        assert_eq!(Command::Rules(None).redacted(), "RULES");
    }
}
