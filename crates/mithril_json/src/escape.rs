//! Quoting and escaping of string and character literals.
//!
//! | char | escape |
//! |------|--------|
//! | `"`  | `\"`   |
//! | `\`  | `\\`   |
//! | backspace | `\b` |
//! | form feed | `\f` |
//! | newline   | `\n` |
//! | carriage return | `\r` |
//! | tab  | `\t`   |
//!
//! Inside a character literal `'` is written as `\'`; the decoder accepts
//! `\'` in both literal kinds.

use alloc::string::String;

// -----------------------------------------------------------------------------
// EscapeError

/// Failure to unescape the body of a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EscapeError {
    #[error("unknown escape sequence `\\{0}`")]
    UnknownEscape(char),
    #[error("dangling backslash at the end of the literal")]
    DanglingBackslash,
    #[error("unescaped `{0}` inside the literal")]
    UnescapedQuote(char),
    #[error("literal is not enclosed in `{0}`")]
    Unquoted(char),
}

// -----------------------------------------------------------------------------
// Encode

fn escape_of(c: char, quote: char) -> Option<&'static str> {
    Some(match c {
        '"' if quote == '"' => "\\\"",
        '\'' if quote == '\'' => "\\'",
        '\\' => "\\\\",
        '\u{8}' => "\\b",
        '\u{c}' => "\\f",
        '\n' => "\\n",
        '\r' => "\\r",
        '\t' => "\\t",
        _ => return None,
    })
}

fn write_escaped(out: &mut String, body: &str, quote: char) {
    for c in body.chars() {
        match escape_of(c, quote) {
            Some(escaped) => out.push_str(escaped),
            None => out.push(c),
        }
    }
}

/// Appends `s` as a double-quoted, escaped string literal.
///
/// ```
/// let mut out = String::new();
/// mithril_json::escape::write_quoted_str(&mut out, "He said \"hi\"");
/// assert_eq!(out, r#""He said \"hi\"""#);
/// ```
pub fn write_quoted_str(out: &mut String, s: &str) {
    out.reserve(s.len() + 2);
    out.push('"');
    write_escaped(out, s, '"');
    out.push('"');
}

/// Appends `c` as a single-quoted, escaped character literal.
pub fn write_quoted_char(out: &mut String, c: char) {
    let mut buf = [0; 4];
    out.push('\'');
    write_escaped(out, c.encode_utf8(&mut buf), '\'');
    out.push('\'');
}

// -----------------------------------------------------------------------------
// Decode

/// Strips one pair of `quote` characters.
#[inline]
pub fn unquote(text: &str, quote: char) -> Result<&str, EscapeError> {
    text.trim()
        .strip_prefix(quote)
        .and_then(|s| s.strip_suffix(quote))
        .ok_or(EscapeError::Unquoted(quote))
}

/// Reverses the escape table on the body of a literal quoted with `quote`.
pub fn unescape(body: &str, quote: char) -> Result<String, EscapeError> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let next = chars.next().ok_or(EscapeError::DanglingBackslash)?;
                out.push(match next {
                    '"' => '"',
                    '\'' => '\'',
                    '\\' => '\\',
                    'b' => '\u{8}',
                    'f' => '\u{c}',
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    other => return Err(EscapeError::UnknownEscape(other)),
                });
            }
            c if c == quote => return Err(EscapeError::UnescapedQuote(quote)),
            c => out.push(c),
        }
    }
    Ok(out)
}

/// Decodes a double-quoted string literal.
///
/// ```
/// use mithril_json::escape::decode_str;
///
/// assert_eq!(decode_str(r#""a\tb""#).unwrap(), "a\tb");
/// assert!(decode_str(r#""a"b""#).is_err());
/// ```
#[inline]
pub fn decode_str(text: &str) -> Result<String, EscapeError> {
    unescape(unquote(text, '"')?, '"')
}

// -----------------------------------------------------------------------------
// Tests
