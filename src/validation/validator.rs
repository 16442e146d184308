//! Credential validators
//!
//! Implements the username, email and password checks used by the sign-up and
//! sign-in forms. None of these short-circuit: every broken rule is reported so
//! the form can show all problems at once.

use std::fmt;
use std::str::FromStr;

use super::credentials::{UserCredentials, is_common_weak_password, is_reserved_username};
use super::results::ValidationResult;
use super::rules::{
    ALL_DIGITS, CONSECUTIVE_SPECIALS, EMAIL_SHAPE, Rule, USERNAME_CHARSET, apply_rules, char_len,
    has_digit, has_lowercase, has_special, has_uppercase, is_predictable,
};

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 20;
pub const EMAIL_MAX_LENGTH: usize = 254;
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 128;

pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const PASSWORD_REQUIRED: &str = "Password is required";

const USERNAME_RULES: &[Rule] = &[
    Rule::new(
        |u| char_len(u) < USERNAME_MIN_LENGTH,
        "Username must be at least 3 characters long",
    ),
    Rule::new(
        |u| char_len(u) > USERNAME_MAX_LENGTH,
        "Username must be no more than 20 characters long",
    ),
    Rule::new(
        |u| !USERNAME_CHARSET.is_match(u),
        "Username can only contain letters, numbers, underscores, and hyphens",
    ),
    Rule::new(
        |u| u.starts_with(['-', '_']) || u.ends_with(['-', '_']),
        "Username cannot start or end with underscores or hyphens",
    ),
    Rule::new(
        |u| CONSECUTIVE_SPECIALS.is_match(u),
        "Username cannot contain consecutive special characters",
    ),
    Rule::new(|u| ALL_DIGITS.is_match(u), "Username cannot be all numbers"),
    Rule::new(
        is_reserved_username,
        "This username is reserved and cannot be used",
    ),
];

const EMAIL_RULES: &[Rule] = &[
    Rule::new(
        |e| !EMAIL_SHAPE.is_match(e),
        "Please enter a valid email address",
    ),
    Rule::new(
        |e| char_len(e) > EMAIL_MAX_LENGTH,
        "Email address is too long",
    ),
    Rule::new(
        |e| e.contains(".."),
        "Email cannot contain consecutive dots",
    ),
    Rule::new(
        |e| e.starts_with('.') || e.ends_with('.'),
        "Email cannot start or end with a dot",
    ),
];

const PASSWORD_RULES: &[Rule] = &[
    Rule::new(
        |p| char_len(p) < PASSWORD_MIN_LENGTH,
        "Password must be at least 8 characters long",
    ),
    Rule::new(
        |p| char_len(p) > PASSWORD_MAX_LENGTH,
        "Password must be no more than 128 characters long",
    ),
    Rule::new(
        |p| !has_lowercase(p),
        "Password must contain at least one lowercase letter",
    ),
    Rule::new(
        |p| !has_uppercase(p),
        "Password must contain at least one uppercase letter",
    ),
    Rule::new(|p| !has_digit(p), "Password must contain at least one number"),
    Rule::new(
        |p| !has_special(p),
        "Password must contain at least one special character (!@#$%^&*()_+-=[]{}|;:,.<>?)",
    ),
    Rule::new(
        is_predictable,
        "Password contains common patterns and is too predictable",
    ),
    Rule::new(
        is_common_weak_password,
        "This password is too common and easily guessed",
    ),
];

pub fn validate_username(username: &str) -> ValidationResult {
    apply_rules(USERNAME_RULES, username)
}

pub fn validate_email(email: &str) -> ValidationResult {
    apply_rules(EMAIL_RULES, email)
}

pub fn validate_password(password: &str) -> ValidationResult {
    apply_rules(PASSWORD_RULES, password)
}

/// Exact, case-sensitive comparison of the two entries.
pub fn validate_password_confirmation(password: &str, confirm_password: &str) -> ValidationResult {
    if password == confirm_password {
        ValidationResult::valid()
    } else {
        ValidationResult::from_errors(vec![PASSWORDS_DO_NOT_MATCH.to_string()])
    }
}

/// Full sign-up check.
///
/// Errors are concatenated in field order: username (when given), email,
/// password, then confirmation (when given).
pub fn validate_registration(credentials: &UserCredentials) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if let Some(username) = credentials.provided_username() {
        result.extend(validate_username(username));
    }
    result.extend(validate_email(&credentials.email));
    result.extend(validate_password(&credentials.password));
    if let Some(confirm_password) = credentials.provided_confirm_password() {
        result.extend(validate_password_confirmation(
            &credentials.password,
            confirm_password,
        ));
    }

    result
}

/// Sign-in check. Only the email shape and a non-blank password are required,
/// so accounts created under older password rules can still sign in.
pub fn validate_login(credentials: &UserCredentials) -> ValidationResult {
    let mut result = validate_email(&credentials.email);
    if credentials.password.trim().is_empty() {
        result.extend(ValidationResult::from_errors(vec![
            PASSWORD_REQUIRED.to_string(),
        ]));
    }
    result
}

/// A form field that can be validated on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Username,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "username" | "user" => Ok(Field::Username),
            "email" | "mail" => Ok(Field::Email),
            "password" | "pass" => Ok(Field::Password),
            "confirm" | "confirmpassword" | "confirm_password" => Ok(Field::ConfirmPassword),
            _ => Err(s.to_string()),
        }
    }
}

/// Validate a single field as it is edited.
///
/// `password` is only consulted for [`Field::ConfirmPassword`].
pub fn validate_field(field: Field, value: &str, password: &str) -> ValidationResult {
    match field {
        Field::Username => validate_username(value),
        Field::Email => validate_email(value),
        Field::Password => validate_password(value),
        Field::ConfirmPassword => validate_password_confirmation(password, value),
    }
}
