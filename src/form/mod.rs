//! Form sessions
//!
//! Stateful wrappers around the validators that mirror how the sign-up and
//! sign-in forms validate as the user types.

pub mod login;
pub mod registration;

pub use login::LoginForm;
pub use registration::RegistrationForm;
