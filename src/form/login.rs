//! Login form state

use crate::validation::{UserCredentials, ValidationResult, validate_login};

/// Sign-in form. Only checks that the input is well-formed; it never authenticates.
#[derive(Debug, Default, Clone)]
pub struct LoginForm {
    email: String,
    password: String,
    errors: Vec<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn submit(&mut self) -> ValidationResult {
        let credentials = UserCredentials::new(self.email.clone(), self.password.clone());
        let result = validate_login(&credentials);
        self.errors = result.errors.clone();
        result
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
