//! Human-readable requirement lists shown next to the sign-up form.

use super::validator::Field;

const USERNAME_REQUIREMENTS: &[&str] = &[
    "3-20 characters long",
    "Letters, numbers, hyphens (-), and underscores (_) only",
    "Cannot start or end with special characters",
    "Cannot be all numbers",
    "Cannot use reserved names (admin, support, etc.)",
];

const EMAIL_REQUIREMENTS: &[&str] = &[
    "Valid email format (user@domain.com)",
    "No consecutive dots (..)",
    "Maximum 254 characters",
];

const PASSWORD_REQUIREMENTS: &[&str] = &[
    "At least 8 characters long",
    "At least one lowercase letter (a-z)",
    "At least one uppercase letter (A-Z)",
    "At least one number (0-9)",
    "At least one special character (!@#$%^&*)",
    "No common patterns (123, abc, qwerty)",
    "Cannot be a commonly used weak password",
];

const CONFIRM_REQUIREMENTS: &[&str] = &["Must match the password exactly"];

pub const SECURITY_TIPS: &[&str] = &[
    "Use a unique password you don't use elsewhere",
    "Consider using a password manager",
    "Avoid using personal information in passwords",
    "Make your password at least 12 characters for better security",
];

pub fn requirements(field: Field) -> &'static [&'static str] {
    match field {
        Field::Username => USERNAME_REQUIREMENTS,
        Field::Email => EMAIL_REQUIREMENTS,
        Field::Password => PASSWORD_REQUIREMENTS,
        Field::ConfirmPassword => CONFIRM_REQUIREMENTS,
    }
}

/// One-line summary for compact displays.
pub fn requirement_summary(field: Field) -> &'static str {
    match field {
        Field::Username => "Username: 3-20 chars, letters/numbers/hyphens/underscores",
        Field::Email => "Email: Valid format (user@domain.com)",
        Field::Password => "Password: 8+ chars, upper/lower/number/special character",
        Field::ConfirmPassword => "Confirm: same as password",
    }
}
