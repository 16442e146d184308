//! Shell replies
//!
//! Reply codes and line formatting. Multi-line replies use `CODE-text` for
//! every line but the last, which uses `CODE text`.

pub const VALID: u16 = 200;
pub const INFO: u16 = 211;
pub const READY: u16 = 220;
pub const GOODBYE: u16 = 221;
pub const FORM_UPDATED: u16 = 250;
pub const INVALID: u16 = 450;
pub const UNKNOWN_COMMAND: u16 = 500;
pub const LINE_TOO_LONG: u16 = 500;
pub const SYNTAX_ERROR: u16 = 501;

/// Format a single-line reply
pub fn format_response(code: u16, message: &str) -> String {
    format!("{} {}\n", code, message)
}

/// Format a reply whose body lines precede a closing summary line
pub fn format_multiline(code: u16, lines: &[String], last: &str) -> String {
    let mut reply = String::new();
    for line in lines {
        reply.push_str(&format!("{}-{}\n", code, line));
    }
    reply.push_str(&format_response(code, last));
    reply
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_response() {
        assert_eq!(format_response(VALID, "Email is valid"), "200 Email is valid\n");
    }

    #[test]
    fn test_format_multiline() {
        let lines = vec!["one".to_string(), "two".to_string()];
        assert_eq!(
            format_multiline(INVALID, &lines, "2 problems"),
            "450-one\n450-two\n450 2 problems\n"
        );
        assert_eq!(format_multiline(INFO, &[], "done"), "211 done\n");
    }
}
