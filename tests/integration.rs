use std::io::Cursor;

use beekind_lab::commands::run_shell;
use beekind_lab::form::RegistrationForm;
use beekind_lab::{
    CheckerConfig, Field, StrengthLabel, UserCredentials, get_password_strength, validate_email,
    validate_login, validate_password, validate_password_confirmation, validate_registration,
    validate_username,
};

fn shell(input: &str) -> String {
    let config = CheckerConfig {
        prompt: String::new(),
        show_strength: false,
        ..CheckerConfig::default()
    };
    let mut output = Vec::new();
    run_shell(Cursor::new(input.to_string()), &mut output, &config).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_email_examples() {
    assert!(validate_email("a@b.co").is_valid);
    assert!(!validate_email("a..b@c.com").is_valid);
    assert!(!validate_email(".a@b.com").is_valid);
}

#[test]
fn test_password_examples() {
    let result = validate_password("Password123!");
    assert_eq!(
        result.errors,
        vec!["Password contains common patterns and is too predictable"]
    );
    assert!(!validate_password("aaaB1!cd").is_valid);
    assert!(validate_password("Hive!Keeper7").is_valid);
}

#[test]
fn test_confirmation_examples() {
    assert!(validate_password_confirmation("X1!aaaaa", "X1!aaaaa").is_valid);
    let result = validate_password_confirmation("X1!aaaaa", "X1!aaaaA");
    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
}

#[test]
fn test_strength_examples() {
    let empty = get_password_strength("");
    assert_eq!(empty.score, 0);
    assert_eq!(empty.label.as_str(), "Weak");

    let long = get_password_strength("Tr0ub4dor&3xtra!Long");
    assert!((7..=8).contains(&long.score));
    assert_eq!(long.label, StrengthLabel::Strong);
}

#[test]
fn test_registration_without_optional_fields() {
    let result = validate_registration(&UserCredentials::new("bad", "bad"));
    let mut expected = validate_email("bad").errors;
    expected.extend(validate_password("bad").errors);
    assert_eq!(result.errors, expected);
    assert!(!result.is_valid);
}

#[test]
fn test_registration_includes_username_and_confirmation() {
    let credentials = UserCredentials::new("bad", "bad")
        .with_username("x")
        .with_confirm_password("other");
    let mut expected = validate_username("x").errors;
    expected.extend(validate_email("bad").errors);
    expected.extend(validate_password("bad").errors);
    expected.push("Passwords do not match".to_string());
    assert_eq!(validate_registration(&credentials).errors, expected);
}

#[test]
fn test_login_does_not_enforce_complexity() {
    let result = validate_login(&UserCredentials::new("a@b.com", ""));
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["Password is required"]);

    assert!(validate_login(&UserCredentials::new("a@b.com", "abc")).is_valid);
}

#[test]
fn test_username_error_count_matches_broken_rules() {
    // too short, bad charset, leading special, all rules independent
    let result = validate_username("-!");
    assert_eq!(result.errors.len(), 3);
    // too long, consecutive specials, trailing special
    let result = validate_username("a--bbbbbbbbbbbbbbbbbbbb_");
    assert_eq!(result.errors.len(), 3);
}

#[test]
fn test_form_session_flow() {
    let mut form = RegistrationForm::new();
    form.set_field(Field::Username, "worker_bee");
    form.set_field(Field::Email, "worker@hive.io");
    form.set_field(Field::Password, "Hive!Keeper7");
    form.set_field(Field::ConfirmPassword, "Hive!Keeper7");
    assert!(Field::ALL.iter().all(|f| form.is_field_valid(*f)));
    assert!(form.submit().is_valid);
}

#[test]
fn test_shell_registration_session() {
    let output = shell(
        "SET username bee\n\
         SET username worker_bee\n\
         SET email worker@hive.io\n\
         SET password Hive!Keeper7\n\
         SUBMIT\n\
         QUIT\n",
    );
    assert_eq!(
        output,
        "220 BeeKind credential checker ready\n\
         450-This username is reserved and cannot be used\n\
         450 1 problem found\n\
         250 Username updated\n\
         250 Email updated\n\
         250 Password updated\n\
         200 Registration details accepted for worker_bee\n\
         221 Goodbye\n"
    );
}

#[test]
fn test_shell_login_and_unknown() {
    let output = shell("LOGIN a@b.com\nNOPE\nLOGIN a@b.com hunter2\n");
    assert_eq!(
        output,
        "220 BeeKind credential checker ready\n\
         450-Password is required\n\
         450 1 problem found\n\
         500 Unknown command: NOPE\n\
         200 Login details accepted for a@b.com\n"
    );
}
