//! Lexical predicates.
//!
//! Character classes are free functions. Structural lookaheads are `Cursor` methods: they may move the lookahead,
//! but never `index`, and each documents where it leaves the lookahead.

use ftl_core::lang::punctuation;

use super::{ASTERISK, Cursor, DASH, DOT, EOL, HASH, LBRACE, LBRACKET};

pub fn is_char_id_start(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

pub fn is_id_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}

pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

pub fn is_hex_digit(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}

/// Whether an indented line starting with `ch` continues the current pattern.
fn is_char_pattern_continuation(ch: Option<char>) -> bool {
    match ch {
        None => false,
        Some(ch) => !punctuation::is_special_line_start(ch),
    }
}

impl Cursor<'_> {
    pub fn is_identifier_start(&self) -> bool {
        self.current_peek().is_some_and(is_char_id_start)
    }

    /// `-?[0-9]` at `index`. Resets the lookahead.
    pub fn is_number_start(&mut self) -> bool {
        let ch = if self.current_char() == Some(DASH) {
            self.peek()
        } else {
            self.current_char()
        };
        self.reset_peek(0);
        ch.is_some_and(is_digit)
    }

    /// The lookahead is on the same line as the `=` and there is something on it.
    pub fn is_value_start(&self) -> bool {
        !matches!(self.current_peek(), Some(EOL) | None)
    }

    /// Called with the lookahead at the start of a line: does the line continue a multiline pattern?
    ///
    /// A line continues the pattern if it starts (after any indentation) with `{`, or if it is indented and its first
    /// character is not one of `} . [ *`. On success the lookahead is restored to the line start.
    pub fn is_value_continuation(&mut self) -> bool {
        let column1 = self.peek_offset();
        self.peek_blank_inline();

        if self.current_peek() == Some(LBRACE) {
            self.reset_peek(column1);
            return true;
        }

        if self.peek_offset() == column1 {
            return false;
        }

        if is_char_pattern_continuation(self.current_peek()) {
            self.reset_peek(column1);
            return true;
        }

        false
    }

    /// Called at a line end: does the next line continue a comment of `level` (0 for `#`, 1 for `##`, 2 for `###`)?
    ///
    /// Only a line of exactly the same level continues the comment. Always resets the lookahead.
    pub fn is_next_line_comment(&mut self, level: usize) -> bool {
        if self.current_char() != Some(EOL) {
            return false;
        }

        for _ in 0..=level {
            if self.peek() != Some(HASH) {
                self.reset_peek(0);
                return false;
            }
        }

        let ch = self.peek();
        self.reset_peek(0);
        matches!(ch, Some(' ' | EOL))
    }

    /// `*[` or `[` at the lookahead. Leaves the lookahead where it was.
    pub fn is_variant_start(&mut self) -> bool {
        let current_peek_offset = self.peek_offset();
        if self.current_peek() == Some(ASTERISK) {
            self.peek();
        }
        let is_start = self.current_peek() == Some(LBRACKET);
        self.reset_peek(current_peek_offset);
        is_start
    }

    pub fn is_attribute_start(&self) -> bool {
        self.current_peek() == Some(DOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Character classes
    // ========================================

    #[test]
    fn test_id_start() {
        assert!(is_char_id_start('a'));
        assert!(is_char_id_start('Z'));
        assert!(!is_char_id_start('1'));
        assert!(!is_char_id_start('-'));
        assert!(!is_char_id_start('é'));
    }

    #[test]
    fn test_id_char() {
        for ch in ['a', 'Z', '0', '_', '-'] {
            assert!(is_id_char(ch));
        }
        assert!(!is_id_char('.'));
        assert!(!is_id_char(' '));
    }

    #[test]
    fn test_hex_digit() {
        assert!(is_hex_digit('0'));
        assert!(is_hex_digit('f'));
        assert!(is_hex_digit('F'));
        assert!(!is_hex_digit('g'));
    }

    // ========================================
    // Lookaheads
    // ========================================

    #[test]
    fn test_is_number_start() {
        assert!(Cursor::new("1").is_number_start());
        assert!(Cursor::new("-1").is_number_start());
        assert!(!Cursor::new("-a").is_number_start());
        assert!(!Cursor::new("-").is_number_start());
        assert!(!Cursor::new("").is_number_start());

        let mut cursor = Cursor::new("-1");
        cursor.is_number_start();
        assert_eq!(cursor.peek_offset(), 0);
    }

    #[test]
    fn test_is_value_start() {
        assert!(Cursor::new("x").is_value_start());
        assert!(!Cursor::new("\n").is_value_start());
        assert!(!Cursor::new("\r\n").is_value_start());
        assert!(!Cursor::new("").is_value_start());
    }

    #[test]
    fn test_is_value_continuation() {
        let mut indented = Cursor::new("    text");
        assert!(indented.is_value_continuation());
        assert_eq!(indented.peek_offset(), 0);

        assert!(Cursor::new("{ $x }").is_value_continuation());
        assert!(Cursor::new("  { $x }").is_value_continuation());
        assert!(!Cursor::new("text").is_value_continuation());
        assert!(!Cursor::new("").is_value_continuation());
        assert!(!Cursor::new("   ").is_value_continuation());
    }

    #[test]
    fn test_special_lines_do_not_continue() {
        for line in ["    .attr = x", "    [one] x", "   *[other] x", "    }"] {
            assert!(!Cursor::new(line).is_value_continuation(), "{line:?}");
        }
    }

    #[test]
    fn test_is_next_line_comment_same_level_only() {
        assert!(Cursor::new("\n# next").is_next_line_comment(0));
        assert!(Cursor::new("\n#\n").is_next_line_comment(0));
        assert!(!Cursor::new("\n## group").is_next_line_comment(0));
        assert!(!Cursor::new("\n# lower").is_next_line_comment(1));
        assert!(Cursor::new("\n### res").is_next_line_comment(2));
        assert!(!Cursor::new("\n#no-space").is_next_line_comment(0));
        assert!(!Cursor::new("# not at eol").is_next_line_comment(0));

        let mut cursor = Cursor::new("\n# next");
        cursor.is_next_line_comment(0);
        assert_eq!(cursor.peek_offset(), 0);
    }

    #[test]
    fn test_is_variant_start() {
        assert!(Cursor::new("[one]").is_variant_start());
        assert!(Cursor::new("*[other]").is_variant_start());
        assert!(!Cursor::new("*other").is_variant_start());
        assert!(!Cursor::new("}").is_variant_start());

        let mut cursor = Cursor::new("*[other]");
        cursor.is_variant_start();
        assert_eq!(cursor.peek_offset(), 0);
    }

    #[test]
    fn test_is_attribute_start() {
        let mut cursor = Cursor::new("\n    .title = x");
        cursor.peek_blank();
        assert!(cursor.is_attribute_start());
        assert_eq!(cursor.index(), 0);
    }
}
