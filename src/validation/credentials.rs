//! Credential input and denylists
//!
//! Holds the credential shape submitted by the sign-up and sign-in forms,
//! plus the fixed lists of reserved usernames and common weak passwords.

/// Usernames nobody may register, compared case-insensitively.
pub const RESERVED_USERNAMES: &[&str] = &[
    "admin",
    "administrator",
    "root",
    "user",
    "guest",
    "anonymous",
    "system",
    "moderator",
    "mod",
    "support",
    "help",
    "api",
    "test",
    "demo",
    "null",
    "undefined",
    "hivehub",
    "thehivehub",
    "bee",
    "honey",
    "official",
];

/// Passwords rejected outright, compared case-insensitively.
pub const COMMON_WEAK_PASSWORDS: &[&str] = &[
    "password",
    "password123",
    "12345678",
    "qwerty123",
    "abc123456",
    "password1",
    "welcome123",
    "admin123",
    "letmein123",
    "changeme123",
];

pub fn is_reserved_username(username: &str) -> bool {
    let lowered = username.to_lowercase();
    RESERVED_USERNAMES.contains(&lowered.as_str())
}

pub fn is_common_weak_password(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_WEAK_PASSWORDS.contains(&lowered.as_str())
}

/// Credentials as entered in a registration or login form.
///
/// Optional fields are only validated when present and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserCredentials {
    pub username: Option<String>,
    pub email: String,
    pub password: String,
    pub confirm_password: Option<String>,
}

impl UserCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: None,
            email: email.into(),
            password: password.into(),
            confirm_password: None,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_confirm_password(mut self, confirm_password: impl Into<String>) -> Self {
        self.confirm_password = Some(confirm_password.into());
        self
    }

    /// Username, if one was entered.
    pub fn provided_username(&self) -> Option<&str> {
        self.username.as_deref().filter(|u| !u.is_empty())
    }

    /// Confirmation password, if one was entered.
    pub fn provided_confirm_password(&self) -> Option<&str> {
        self.confirm_password.as_deref().filter(|c| !c.is_empty())
    }
}
