//! Password strength scoring
//!
//! An additive heuristic shown next to the password field. It is independent of
//! [`validate_password`](super::validate_password): a password can score
//! "Strong" and still fail validation, or the other way around.

use super::results::PasswordStrength;
use super::rules::{
    char_len, has_digit, has_full_variety, has_lowercase, has_special, has_uppercase,
    is_predictable,
};

const PREDICTABLE_PENALTY: u8 = 2;

/// Score a password from 0 to 8 and map it onto a label band.
///
/// - one point each for reaching 8, 12 and 16 characters
/// - one point per character class present (lower, upper, digit, special)
/// - one bonus point for 12+ characters with all four classes
/// - minus two, floored at zero, for a predictable pattern
pub fn get_password_strength(password: &str) -> PasswordStrength {
    let length = char_len(password);
    let mut score: u8 = 0;

    for threshold in [8, 12, 16] {
        if length >= threshold {
            score += 1;
        }
    }

    let classes = [
        has_lowercase(password),
        has_uppercase(password),
        has_digit(password),
        has_special(password),
    ];
    score += classes.iter().filter(|present| **present).count() as u8;

    if length >= 12 && has_full_variety(password) {
        score += 1;
    }

    if is_predictable(password) {
        score = score.saturating_sub(PREDICTABLE_PENALTY);
    }

    PasswordStrength::from_score(score)
}
