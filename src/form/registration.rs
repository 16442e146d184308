//! Registration form state
//!
//! Tracks the values typed into the sign-up form, which fields the user has
//! left (touched), and the errors shown under each field.

use std::collections::{HashMap, HashSet};

use crate::validation::{
    Field, PasswordStrength, UserCredentials, ValidationResult, get_password_strength,
    validate_field, validate_registration,
};

/// Sign-up form with per-field, validate-on-blur behaviour.
#[derive(Debug, Default, Clone)]
pub struct RegistrationForm {
    username: String,
    email: String,
    password: String,
    confirm_password: String,
    touched: HashSet<Field>,
    field_errors: HashMap<Field, Vec<String>>,
    form_errors: Vec<String>,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every value, error and touched flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Store a new value for `field`.
    ///
    /// Touched fields are re-validated immediately. A password change also
    /// re-checks a touched confirmation against the new password.
    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Username => self.username = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }

        if self.is_touched(field) {
            self.revalidate(field);
        }
        if field == Field::Password && self.is_touched(Field::ConfirmPassword) {
            self.revalidate(Field::ConfirmPassword);
        }
    }

    /// Mark `field` as touched and validate its current value.
    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    /// Store a value and validate it, as if the user typed it and left the field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> &[String] {
        self.update(field, value);
        self.blur(field);
        self.field_errors(field)
    }

    fn revalidate(&mut self, field: Field) {
        let result = validate_field(field, self.value(field), &self.password);
        self.field_errors.insert(field, result.errors);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn field_errors(&self, field: Field) -> &[String] {
        self.field_errors
            .get(&field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// First error of a touched field, the one shown under the input.
    pub fn field_error(&self, field: Field) -> Option<&str> {
        if !self.is_touched(field) {
            return None;
        }
        self.field_errors(field).first().map(String::as_str)
    }

    pub fn is_field_valid(&self, field: Field) -> bool {
        self.is_touched(field) && self.field_errors(field).is_empty()
    }

    pub fn strength(&self) -> PasswordStrength {
        get_password_strength(&self.password)
    }

    pub fn credentials(&self) -> UserCredentials {
        UserCredentials {
            username: Some(self.username.clone()),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: Some(self.confirm_password.clone()),
        }
    }

    /// Validate the whole form and keep the errors for display.
    pub fn submit(&mut self) -> ValidationResult {
        let result = validate_registration(&self.credentials());
        self.form_errors = result.errors.clone();
        result
    }

    pub fn form_errors(&self) -> &[String] {
        &self.form_errors
    }
}
