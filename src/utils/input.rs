//! Input line handling
//!
//! Reads one command line at a time without buffering more than the
//! configured limit, and decodes it as UTF-8.

use std::io::{self, BufRead, Read};

/// Outcome of reading one line.
#[derive(Debug, PartialEq, Eq)]
pub enum LineRead {
    Line(String),
    TooLong,
    InvalidUtf8,
    Eof,
}

/// Read the next line, excluding its `\n` or `\r\n` terminator.
///
/// At most `max_len` content bytes plus the terminator are buffered. The rest
/// of an over-long line is skipped so the next read starts on a fresh line.
pub fn read_command_line<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    max_len: usize,
) -> io::Result<LineRead> {
    buf.clear();
    let limit = max_len as u64 + 2;
    let read = reader.by_ref().take(limit).read_until(b'\n', buf)?;
    if read == 0 {
        return Ok(LineRead::Eof);
    }

    let terminated = buf.last() == Some(&b'\n');
    if !terminated && read as u64 == limit {
        skip_rest_of_line(reader)?;
        return Ok(LineRead::TooLong);
    }

    strip_terminator(buf);
    if buf.len() > max_len {
        return Ok(LineRead::TooLong);
    }

    match std::str::from_utf8(buf) {
        Ok(line) => Ok(LineRead::Line(line.to_string())),
        Err(_) => Ok(LineRead::InvalidUtf8),
    }
}

fn strip_terminator(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
}

/// Consume input up to and including the next `\n` without keeping it.
fn skip_rest_of_line<R: BufRead>(reader: &mut R) -> io::Result<()> {
    loop {
        let available = reader.fill_buf()?;
        if available.is_empty() {
            return Ok(());
        }
        match available.iter().position(|b| *b == b'\n') {
            Some(pos) => {
                reader.consume(pos + 1);
                return Ok(());
            }
            None => {
                let len = available.len();
                reader.consume(len);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_all(input: &[u8], max_len: usize) -> Vec<LineRead> {
        let mut reader = Cursor::new(input.to_vec());
        let mut buf = Vec::new();
        let mut lines = Vec::new();
        loop {
            let line = read_command_line(&mut reader, &mut buf, max_len).unwrap();
            if line == LineRead::Eof {
                return lines;
            }
            lines.push(line);
        }
    }

    #[test]
    fn test_terminators_are_not_counted() {
        assert_eq!(
            read_all(b"EMAIL a@b.co\nEMAIL a@b.co\r\nEMAIL a@b.co", 12),
            vec![
                LineRead::Line("EMAIL a@b.co".to_string()),
                LineRead::Line("EMAIL a@b.co".to_string()),
                LineRead::Line("EMAIL a@b.co".to_string()),
            ]
        );
    }

    #[test]
    fn test_long_line_is_skipped_whole() {
        let mut input = b"EMAIL ".to_vec();
        input.extend(std::iter::repeat_n(b'x', 10_000));
        input.extend(b"\nQUIT\n");
        assert_eq!(
            read_all(&input, 16),
            vec![LineRead::TooLong, LineRead::Line("QUIT".to_string())]
        );
        assert_eq!(
            read_all(b"EMAIL a@b.com\n", 12),
            vec![LineRead::TooLong]
        );
    }

    #[test]
    fn test_invalid_utf8_is_reported() {
        assert_eq!(
            read_all(b"PASSWORD caf\xE9!X1\nQUIT\n", 64),
            vec![LineRead::InvalidUtf8, LineRead::Line("QUIT".to_string())]
        );
    }
}
