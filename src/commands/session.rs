//! Shell session state
//!
//! One registration form and one login form per shell session.

use crate::form::{LoginForm, RegistrationForm};

#[derive(Debug, Default)]
pub struct CheckerSession {
    registration: RegistrationForm,
    login: LoginForm,
}

impl CheckerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registration(&self) -> &RegistrationForm {
        &self.registration
    }

    pub fn registration_mut(&mut self) -> &mut RegistrationForm {
        &mut self.registration
    }

    pub fn login_mut(&mut self) -> &mut LoginForm {
        &mut self.login
    }

    pub fn reset(&mut self) {
        self.registration.reset();
        self.login.reset();
    }
}
