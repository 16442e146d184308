//! Validation result types
//!
//! Defines the values returned by the credential validators and the strength scorer.

use std::fmt;

/// Outcome of a validation call.
///
/// Built only from an error list, so `is_valid` always mirrors `errors.is_empty()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn valid() -> Self {
        Self::from_errors(Vec::new())
    }

    /// Append another result's errors after this one's, keeping order.
    pub fn extend(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.is_valid = self.errors.is_empty();
    }

    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

/// Label band for a password strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    /// Band for a score in 0..=8.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLabel::Weak,
            3..=4 => StrengthLabel::Fair,
            5..=6 => StrengthLabel::Good,
            _ => StrengthLabel::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
        }
    }

    /// Presentation hint for the label.
    pub fn color(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "text-destructive",
            StrengthLabel::Fair => "text-orange-500",
            StrengthLabel::Good => "text-yellow-500",
            StrengthLabel::Strong => "text-green-500",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heuristic strength assessment of a password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStrength {
    pub score: u8,
    pub label: StrengthLabel,
    pub color: &'static str,
}

/// Highest score the scorer can produce.
pub const MAX_STRENGTH_SCORE: u8 = 8;

/// Smallest percentage shown for a strength bar, so a zero score still shows a sliver.
pub const MIN_STRENGTH_PERCENTAGE: u8 = 10;

impl PasswordStrength {
    pub fn from_score(score: u8) -> Self {
        let label = StrengthLabel::from_score(score);
        Self {
            score,
            label,
            color: label.color(),
        }
    }

    /// Score scaled to a progress percentage, floored at 10.
    pub fn percentage(&self) -> u8 {
        let scaled = u16::from(self.score) * 100 / u16::from(MAX_STRENGTH_SCORE);
        let scaled = u8::try_from(scaled).unwrap_or(100);
        scaled.max(MIN_STRENGTH_PERCENTAGE)
    }
}
