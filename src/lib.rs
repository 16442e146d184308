pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod utils;
pub mod validation;

pub use crate::config::CheckerConfig;
pub use validation::{
    Field, PasswordStrength, StrengthLabel, UserCredentials, ValidationResult,
    get_password_strength, validate_email, validate_field, validate_login, validate_password,
    validate_password_confirmation, validate_registration, validate_username,
};
