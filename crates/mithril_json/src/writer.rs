use alloc::string::String;

use crate::escape;
use crate::{Indent, TranslatorConfig};

/// Output buffer and nesting depth of one top-level encode call.
///
/// Compact mode writes no whitespace at all. Pretty mode breaks the line
/// after every opening bracket and item separator, indents by depth, and
/// puts a space after each key colon. Empty containers stay `[]` and `{}`.
pub(crate) struct Writer<'c> {
    out: String,
    depth: usize,
    config: &'c TranslatorConfig,
}

impl<'c> Writer<'c> {
    #[inline]
    pub fn new(config: &'c TranslatorConfig) -> Self {
        Self {
            out: String::new(),
            depth: 0,
            config,
        }
    }

    #[inline]
    pub fn finish(self) -> String {
        self.out
    }

    #[inline]
    pub fn out(&mut self) -> &mut String {
        &mut self.out
    }

    #[inline]
    pub fn push_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    fn newline(&mut self) {
        self.out.push('\n');
        match self.config.indent {
            Indent::Tab => self.out.extend(core::iter::repeat_n('\t', self.depth)),
            Indent::Spaces(n) => self.out.extend(core::iter::repeat_n(' ', self.depth * n)),
        }
    }

    #[inline]
    pub fn open(&mut self, bracket: char) {
        self.out.push(bracket);
        self.depth += 1;
    }

    /// Starts the item at `index`.
    pub fn item(&mut self, index: usize) {
        if index > 0 {
            self.out.push(',');
        }
        if self.config.pretty {
            self.newline();
        }
    }

    /// Closes a container that received `len` items.
    pub fn close(&mut self, bracket: char, len: usize) {
        self.depth = self.depth.saturating_sub(1);
        if self.config.pretty && len > 0 {
            self.newline();
        }
        self.out.push(bracket);
    }

    /// Writes a quoted object key and its colon.
    pub fn key(&mut self, name: &str) {
        escape::write_quoted_str(&mut self.out, name);
        self.out.push(':');
        if self.config.pretty {
            self.out.push(' ');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Writer;
    use crate::{Indent, TranslatorConfig};

    fn sample(config: &TranslatorConfig) -> alloc::string::String {
        let mut w = Writer::new(config);
        w.open('{');
        w.item(0);
        w.key("a");
        w.open('[');
        w.item(0);
        w.push_str("1");
        w.item(1);
        w.push_str("2");
        w.close(']', 2);
        w.item(1);
        w.key("b");
        w.open('[');
        w.close(']', 0);
        w.close('}', 2);
        w.finish()
    }

    #[test]
    fn compact_has_no_whitespace() {
        assert_eq!(sample(&TranslatorConfig::default()), r#"{"a":[1,2],"b":[]}"#);
    }

    #[test]
    fn pretty_indents_by_depth() {
        let config = TranslatorConfig {
            pretty: true,
            indent: Indent::Spaces(2),
        };
        assert_eq!(
            sample(&config),
            "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": []\n}"
        );

        let config = TranslatorConfig {
            pretty: true,
            indent: Indent::Tab,
        };
        assert!(sample(&config).starts_with("{\n\t\"a\": [\n\t\t1,"));
    }
}
