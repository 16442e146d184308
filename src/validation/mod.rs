//! Credential validation
//!
//! Pure checks for usernames, emails and passwords, form-level aggregation,
//! and the password strength heuristic. Nothing here performs I/O or keeps state.

pub mod credentials;
pub mod requirements;
pub mod results;
pub mod rules;
pub mod strength;
pub mod validator;

pub use credentials::{COMMON_WEAK_PASSWORDS, RESERVED_USERNAMES, UserCredentials};
pub use requirements::{SECURITY_TIPS, requirement_summary, requirements};
pub use results::{PasswordStrength, StrengthLabel, ValidationResult};
pub use strength::get_password_strength;
pub use validator::{
    Field, validate_email, validate_field, validate_login, validate_password,
    validate_password_confirmation, validate_registration, validate_username,
};
