//! Top-level splitting of encoded text.
//!
//! Every decoder works on borrowed slices of the input: it strips a bracket
//! pair with [`unwrap_pair`], walks the items with [`entries`] and splits a
//! `key: value` item with [`split_entry`]. Only characters at nesting depth
//! zero and outside quoted literals count as delimiters.
//!
//! A `"` opens a string literal and a `'` opens a character literal; either
//! is closed by the same quote unless it is escaped with a backslash.
//!
//! ```
//! use mithril_json::scan;
//!
//! let interior = scan::unwrap_pair(r#" [ "a,b", [1, 2], ']' ] "#, '[', ']').unwrap();
//! let items = scan::split_elements(interior);
//! assert_eq!(items, [r#""a,b""#, "[1, 2]", "']'"]);
//! ```

use alloc::string::ToString;
use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::DecodeError;

// -----------------------------------------------------------------------------
// Depth tracking

#[derive(Default)]
struct Scanner {
    depth: usize,
    quote: Option<char>,
    escaped: bool,
}

impl Scanner {
    /// Feeds one character, returns `true` if it sits at depth zero outside
    /// any literal and is not itself a bracket or quote.
    fn step(&mut self, c: char) -> bool {
        if let Some(quote) = self.quote {
            if self.escaped {
                self.escaped = false;
            } else if c == '\\' {
                self.escaped = true;
            } else if c == quote {
                self.quote = None;
            }
            return false;
        }

        match c {
            '"' | '\'' => self.quote = Some(c),
            '[' | '{' => self.depth += 1,
            ']' | '}' => self.depth = self.depth.saturating_sub(1),
            _ => return self.depth == 0,
        }
        false
    }
}

/// Returns the byte offset of the first top-level `sep`.
pub fn find_top_level(text: &str, sep: char) -> Option<usize> {
    let mut scanner = Scanner::default();
    text.char_indices()
        .find(|&(_, c)| scanner.step(c) && c == sep)
        .map(|(index, _)| index)
}

/// Splits `text` around its first top-level `sep`.
///
/// Returns `None` when there is no such separator, which callers treat as
/// "no further item" rather than as an error.
///
/// ```
/// use mithril_json::scan::split_top_level;
///
/// assert_eq!(split_top_level(r#""k:v": 3"#, ':'), Some((r#""k:v""#, " 3")));
/// assert_eq!(split_top_level("[1, 2]", ','), None);
/// ```
pub fn split_top_level(text: &str, sep: char) -> Option<(&str, &str)> {
    let index = find_top_level(text, sep)?;
    Some((&text[..index], &text[index + sep.len_utf8()..]))
}

/// Strips the outermost `open`/`close` pair and returns the trimmed interior.
///
/// The interior must be balanced: `[1][2]` is rejected because its first
/// bracket closes before the end.
pub fn unwrap_pair(text: &str, open: char, close: char) -> Result<&str, DecodeError> {
    let missing = || DecodeError::MissingBracket {
        open,
        close,
        text: text.to_string(),
    };

    let interior = text
        .trim()
        .strip_prefix(open)
        .and_then(|rest| rest.strip_suffix(close))
        .ok_or_else(missing)?;

    let mut scanner = Scanner::default();
    let mut closed_early = false;
    for c in interior.chars() {
        if scanner.quote.is_none() && scanner.depth == 0 && matches!(c, ']' | '}') {
            closed_early = true;
            break;
        }
        scanner.step(c);
    }
    if closed_early || scanner.depth != 0 || scanner.quote.is_some() {
        return Err(missing());
    }

    Ok(interior.trim())
}

// -----------------------------------------------------------------------------
// Entries

/// Iterator over the top-level comma-separated items of an interior.
///
/// Items are trimmed. A blank interior yields nothing.
#[derive(Clone, Debug)]
pub struct Entries<'a> {
    rest: Option<&'a str>,
}

/// Iterates the top-level items of `interior`.
#[inline]
pub fn entries(interior: &str) -> Entries<'_> {
    let rest = Some(interior).filter(|s| !s.trim().is_empty());
    Entries { rest }
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        match split_top_level(rest, ',') {
            Some((head, tail)) => {
                self.rest = Some(tail);
                Some(head.trim())
            }
            None => {
                self.rest = None;
                Some(rest.trim())
            }
        }
    }
}

impl FusedIterator for Entries<'_> {}

/// Collects the top-level items of `interior`.
#[inline]
pub fn split_elements(interior: &str) -> Vec<&str> {
    entries(interior).collect()
}

/// Splits a `key: value` item, trimming both halves.
#[inline]
pub fn split_entry(text: &str) -> Option<(&str, &str)> {
    split_top_level(text, ':').map(|(key, value)| (key.trim(), value.trim()))
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{entries, split_elements, split_entry, split_top_level, unwrap_pair};
    use crate::DecodeError;

    #[test]
    fn separators_inside_literals_are_ignored() {
        assert_eq!(split_top_level(r#""a,b", 2"#, ','), Some((r#""a,b""#, " 2")));
        assert_eq!(split_top_level("',', 2", ','), Some(("','", " 2")));
        assert_eq!(split_top_level(r#""say \"x,y\"", z"#, ','), Some((r#""say \"x,y\"""#, " z")));
        assert_eq!(split_top_level(r#""\\", z"#, ','), Some((r#""\\""#, " z")));
        assert_eq!(split_top_level("{a: 1}", ':'), None);
    }

    #[test]
    fn quoted_brackets_do_not_count() {
        let items = split_elements(r#""[", '{', "}]""#);
        assert_eq!(items, [r#""[""#, "'{'", r#""}]""#]);
    }

    #[test]
    fn unwrap_checks_brackets() {
        assert_eq!(unwrap_pair("  [ 1, 2 ]\n", '[', ']').unwrap(), "1, 2");
        assert_eq!(unwrap_pair("{}", '{', '}').unwrap(), "");

        let err = unwrap_pair("1, 2]", '[', ']').unwrap_err();
        assert!(matches!(err, DecodeError::MissingBracket { open: '[', .. }));
        assert!(unwrap_pair("[1][2]", '[', ']').is_err());
        assert!(unwrap_pair("[[1]", '[', ']').is_err());
        assert!(unwrap_pair(r#"["]"#, '[', ']').is_err());
        assert!(unwrap_pair("[", '[', ']').is_err());
    }

    #[test]
    fn blank_interior_has_no_entries() {
        assert_eq!(entries("").count(), 0);
        assert_eq!(entries(" \n\t ").count(), 0);
        assert_eq!(split_elements("7"), ["7"]);
        assert_eq!(split_elements("[1,2] , {a:[3]},x"), ["[1,2]", "{a:[3]}", "x"]);
    }

    #[test]
    fn entries_split_once() {
        assert_eq!(split_entry(r#" "k" : {"a": 1} "#), Some((r#""k""#, r#"{"a": 1}"#)));
        assert_eq!(split_entry(r#""url": "a:b""#), Some((r#""url""#, r#""a:b""#)));
        assert_eq!(split_entry("no separator"), None);
    }
}
