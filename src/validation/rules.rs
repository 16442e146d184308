//! Rule engine and character predicates
//!
//! Each field is checked against an ordered list of rules. Every rule is
//! evaluated, and each violated rule contributes exactly one message.

use regex::Regex;
use std::sync::LazyLock;

use super::results::ValidationResult;

/// Characters that count as "special" for passwords.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?~`";

/// A single check: `violated` returns true when the input breaks the rule.
#[derive(Clone, Copy)]
pub struct Rule {
    pub violated: fn(&str) -> bool,
    pub message: &'static str,
}

impl Rule {
    pub const fn new(violated: fn(&str) -> bool, message: &'static str) -> Self {
        Self { violated, message }
    }

    pub fn check(&self, input: &str) -> Option<&'static str> {
        (self.violated)(input).then_some(self.message)
    }
}

/// Run every rule against `input` and fold the messages of the violated ones.
pub fn apply_rules(rules: &[Rule], input: &str) -> ValidationResult {
    let errors = rules
        .iter()
        .filter_map(|rule| rule.check(input))
        .map(str::to_string)
        .collect();
    ValidationResult::from_errors(errors)
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern)
        .unwrap_or_else(|error| panic!("pattern {pattern:?} failed to compile: {error}"))
}

pub(crate) static USERNAME_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| compile("^[a-zA-Z0-9_-]+$"));

pub(crate) static CONSECUTIVE_SPECIALS: LazyLock<Regex> =
    LazyLock::new(|| compile("__|-_|_-|--"));

pub(crate) static ALL_DIGITS: LazyLock<Regex> = LazyLock::new(|| compile("^[0-9]+$"));

pub(crate) static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"));

static SEQUENTIAL_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| compile("123|234|345|456|567|678|789|890"));

// Matched against the ASCII-lowercased password.
static SEQUENTIAL_LETTERS: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        "abc|bcd|cde|def|efg|fgh|ghi|hij|ijk|jkl|klm|lmn|mno|nop|opq|pqr|qrs|rst|stu|tuv|uvw|vwx|wxy|xyz",
    )
});

static KEYBOARD_WALKS: LazyLock<Regex> =
    LazyLock::new(|| compile("qwer|asdf|zxcv|qwerty|asdfgh|zxcvbn"));

pub fn char_len(input: &str) -> usize {
    input.chars().count()
}

pub fn has_lowercase(input: &str) -> bool {
    input.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_uppercase(input: &str) -> bool {
    input.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_digit(input: &str) -> bool {
    input.chars().any(|c| c.is_ascii_digit())
}

pub fn has_special(input: &str) -> bool {
    input.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

/// All four character classes at once.
pub fn has_full_variety(input: &str) -> bool {
    has_lowercase(input) && has_uppercase(input) && has_digit(input) && has_special(input)
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Three or more identical characters in a row. Line terminators never count.
pub fn has_repeated_run(input: &str) -> bool {
    let mut previous: Option<char> = None;
    let mut run = 0;
    for c in input.chars() {
        if is_line_terminator(c) {
            previous = None;
            run = 0;
            continue;
        }
        if previous == Some(c) {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            previous = Some(c);
            run = 1;
        }
    }
    false
}

pub fn has_sequential_digits(input: &str) -> bool {
    SEQUENTIAL_DIGITS.is_match(input)
}

pub fn has_sequential_letters(input: &str) -> bool {
    SEQUENTIAL_LETTERS.is_match(&input.to_ascii_lowercase())
}

pub fn has_keyboard_walk(input: &str) -> bool {
    KEYBOARD_WALKS.is_match(&input.to_ascii_lowercase())
}

/// The "too predictable" group, checked in order until the first match.
pub fn is_predictable(input: &str) -> bool {
    has_repeated_run(input)
        || has_sequential_digits(input)
        || has_sequential_letters(input)
        || has_keyboard_walk(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_empty(s: &str) -> bool {
        s.is_empty()
    }

    fn is_short(s: &str) -> bool {
        s.len() < 3
    }

    fn has_space(s: &str) -> bool {
        s.contains(' ')
    }

    const RULES: &[Rule] = &[
        Rule::new(is_empty, "empty"),
        Rule::new(is_short, "short"),
        Rule::new(has_space, "space"),
    ];

    #[test]
    fn test_apply_rules_collects_every_violation() {
        let result = apply_rules(RULES, "");
        assert_eq!(result.errors, vec!["empty", "short"]);

        let result = apply_rules(RULES, "a b");
        assert_eq!(result.errors, vec!["space"]);

        assert!(apply_rules(RULES, "abcd").is_valid);
    }

    #[test]
    fn test_character_classes_are_ascii() {
        assert!(has_lowercase("ABc"));
        assert!(!has_lowercase("ÀBÇ é"));
        assert!(has_uppercase("abC"));
        assert!(!has_uppercase("abç"));
        assert!(has_digit("x9"));
        assert!(!has_digit("٣"));
        assert!(has_special("a`b"));
        assert!(has_special("\\"));
        assert!(!has_special("abc def"));
    }

    #[test]
    fn test_repeated_run() {
        assert!(has_repeated_run("aaa"));
        assert!(has_repeated_run("x!!!y"));
        assert!(!has_repeated_run("aabbaa"));
        assert!(!has_repeated_run("\n\n\n"));
        assert!(!has_repeated_run("aa\na"));
    }

    #[test]
    fn test_sequences() {
        assert!(has_sequential_digits("pass123"));
        assert!(has_sequential_digits("x890"));
        assert!(!has_sequential_digits("901"));
        assert!(!has_sequential_digits("321"));

        assert!(has_sequential_letters("xABCx"));
        assert!(has_sequential_letters("Xyz"));
        assert!(!has_sequential_letters("cba"));
        assert!(!has_sequential_letters("yza"));
    }

    #[test]
    fn test_keyboard_walks() {
        assert!(has_keyboard_walk("myQWERpass"));
        assert!(has_keyboard_walk("ZXCV"));
        assert!(has_keyboard_walk("1asdf"));
        assert!(!has_keyboard_walk("qwe"));
        assert!(!has_keyboard_walk("poiu"));
    }

    #[test]
    fn test_predictable_group() {
        assert!(is_predictable("Password123!"));
        assert!(is_predictable("aaaB1!cd"));
        assert!(!is_predictable("Tr0ub4dor&3xtra!Long"));
        assert!(!is_predictable(""));
    }
}
