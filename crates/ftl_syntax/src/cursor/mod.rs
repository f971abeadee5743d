//! Character cursor over Fluent source text.
//!
//! The cursor has a committed position (`index`) and a speculative lookahead distance (`peek_offset`). Grammar
//! decisions are made by peeking; only [`Cursor::next`] and [`Cursor::skip_to_peek`] move `index`.
//!
//! Positions are byte offsets into the source. A `\r\n` pair reads as a single `\n` and is stepped over as one
//! character.
//!
//! ## Examples
//! ```rust
//! use ftl_syntax::cursor::Cursor;
//!
//! let mut cursor = Cursor::new("ab\r\nc");
//! assert_eq!(cursor.peek(), Some('b'));
//! assert_eq!(cursor.peek(), Some('\n'));
//! assert_eq!(cursor.index(), 0);
//! cursor.skip_to_peek();
//! assert_eq!(cursor.current_char(), Some('\n'));
//! assert_eq!(cursor.next(), Some('c'));
//! assert_eq!(cursor.index(), 4);
//! ```

mod predicates;

pub use predicates::{is_char_id_start, is_digit, is_hex_digit, is_id_char};

use ftl_core::lang::punctuation::{PunctuationId, char_of, spelling};

use crate::diagnostics::{ErrorKind, ParseError};

/// Line end as seen by the grammar.
pub const EOL: char = '\n';

// Structural characters, spelled by the punctuation registry.
pub const EQUALS: char = char_of(PunctuationId::Equals);
pub const COMMA: char = char_of(PunctuationId::Comma);
pub const COLON: char = char_of(PunctuationId::Colon);
pub const DOT: char = char_of(PunctuationId::Dot);
pub const DASH: char = char_of(PunctuationId::Dash);
pub const DOLLAR: char = char_of(PunctuationId::Dollar);
pub const HASH: char = char_of(PunctuationId::Hash);
pub const ASTERISK: char = char_of(PunctuationId::Asterisk);
pub const LBRACE: char = char_of(PunctuationId::LBrace);
pub const RBRACE: char = char_of(PunctuationId::RBrace);
pub const LBRACKET: char = char_of(PunctuationId::LBracket);
pub const RBRACKET: char = char_of(PunctuationId::RBracket);
pub const LPAREN: char = char_of(PunctuationId::LParen);
pub const RPAREN: char = char_of(PunctuationId::RParen);
pub const QUOTE: char = char_of(PunctuationId::Quote);
pub const BACKSLASH: char = char_of(PunctuationId::Backslash);
/// The select arrow.
pub const ARROW: &str = spelling(PunctuationId::Arrow);

/// Placeholder shown in `Expected token` errors when a line end was required.
pub const EOL_SYMBOL: char = '\u{2424}';

#[derive(Debug, Clone)]
pub struct Cursor<'s> {
    source: &'s str,
    index: usize,
    peek_offset: usize,
}

impl<'s> Cursor<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            index: 0,
            peek_offset: 0,
        }
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Committed position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Distance of the lookahead position past `index`.
    pub fn peek_offset(&self) -> usize {
        self.peek_offset
    }

    /// Source text between two positions.
    pub fn slice(&self, start: usize, end: usize) -> &'s str {
        self.source.get(start..end).unwrap_or_default()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        let rest = self.source.get(offset..)?;
        let mut chars = rest.chars();
        match chars.next()? {
            '\r' if chars.next() == Some('\n') => Some(EOL),
            ch => Some(ch),
        }
    }

    /// Byte width of the logical character at `offset` (2 for `\r\n`, 0 at the end).
    fn width_at(&self, offset: usize) -> usize {
        let Some(rest) = self.source.get(offset..) else {
            return 0;
        };
        if rest.starts_with("\r\n") {
            return 2;
        }
        rest.chars().next().map(char::len_utf8).unwrap_or(0)
    }

    pub fn current_char(&self) -> Option<char> {
        self.char_at(self.index)
    }

    pub fn current_peek(&self) -> Option<char> {
        self.char_at(self.index + self.peek_offset)
    }

    /// Advance `index` by one character, drop any lookahead, and return the new current character.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char> {
        self.peek_offset = 0;
        self.index += self.width_at(self.index);
        self.current_char()
    }

    /// Advance the lookahead by one character and return the character now under it.
    pub fn peek(&mut self) -> Option<char> {
        self.peek_offset += self.width_at(self.index + self.peek_offset);
        self.current_peek()
    }

    /// Move the lookahead to `offset` bytes past `index`.
    pub fn reset_peek(&mut self, offset: usize) {
        self.peek_offset = offset;
    }

    /// Commit the lookahead.
    pub fn skip_to_peek(&mut self) {
        self.index += self.peek_offset;
        self.peek_offset = 0;
    }

    fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.index)
    }

    // ========================================================================
    // Blank handling
    // ========================================================================

    /// Peek over spaces and return them.
    pub fn peek_blank_inline(&mut self) -> &'s str {
        let start = self.index + self.peek_offset;
        while self.current_peek() == Some(' ') {
            self.peek();
        }
        self.slice(start, self.index + self.peek_offset)
    }

    pub fn skip_blank_inline(&mut self) -> &'s str {
        let blank = self.peek_blank_inline();
        self.skip_to_peek();
        blank
    }

    /// Peek over whole blank lines, returning one `\n` per line.
    ///
    /// Stops at the start of the first line with content, so its indentation is not consumed. Trailing spaces at the
    /// end of input are peeked over.
    pub fn peek_blank_block(&mut self) -> String {
        let mut blank = String::new();
        loop {
            let line_start = self.peek_offset;
            self.peek_blank_inline();
            match self.current_peek() {
                Some(EOL) => {
                    blank.push(EOL);
                    self.peek();
                }
                None => return blank,
                Some(_) => {
                    self.reset_peek(line_start);
                    return blank;
                }
            }
        }
    }

    pub fn skip_blank_block(&mut self) -> String {
        let blank = self.peek_blank_block();
        self.skip_to_peek();
        blank
    }

    /// Peek over spaces and line ends.
    pub fn peek_blank(&mut self) {
        while matches!(self.current_peek(), Some(' ' | EOL)) {
            self.peek();
        }
    }

    pub fn skip_blank(&mut self) {
        self.peek_blank();
        self.skip_to_peek();
    }

    // ========================================================================
    // Expectations
    // ========================================================================

    pub fn expect_char(&mut self, ch: char) -> Result<(), ParseError> {
        if self.current_char() == Some(ch) {
            self.next();
            return Ok(());
        }
        Err(self.error(ErrorKind::ExpectedToken(ch)))
    }

    /// Accept the end of input or consume a line end.
    pub fn expect_line_end(&mut self) -> Result<(), ParseError> {
        match self.current_char() {
            None => Ok(()),
            Some(EOL) => {
                self.next();
                Ok(())
            }
            Some(_) => Err(self.error(ErrorKind::ExpectedToken(EOL_SYMBOL))),
        }
    }

    /// Consume and return the current character if it satisfies `pred`.
    pub fn take_char(&mut self, pred: impl FnOnce(char) -> bool) -> Option<char> {
        let ch = self.current_char()?;
        if pred(ch) {
            self.next();
            return Some(ch);
        }
        None
    }

    pub fn take_id_start(&mut self) -> Result<char, ParseError> {
        match self.current_char() {
            Some(ch) if is_char_id_start(ch) => {
                self.next();
                Ok(ch)
            }
            _ => Err(self.error(ErrorKind::ExpectedCharRange("a-zA-Z"))),
        }
    }

    pub fn take_id_char(&mut self) -> Option<char> {
        self.take_char(is_id_char)
    }

    pub fn take_digit(&mut self) -> Option<char> {
        self.take_char(is_digit)
    }

    pub fn take_hex_digit(&mut self) -> Option<char> {
        self.take_char(is_hex_digit)
    }

    // ========================================================================
    // Recovery
    // ========================================================================

    /// Move past a malformed entry that started at `junk_start` to the next line that can start an entry.
    ///
    /// The scan restarts from the last line end at or before `index` (if it lies after `junk_start`), so an error
    /// found on a later line of a multiline entry does not swallow the line that follows it.
    pub fn skip_to_next_entry_start(&mut self, junk_start: usize) {
        let last_newline = if self.current_char() == Some(EOL) {
            Some(self.index)
        } else {
            self.source.get(..self.index).and_then(|head| head.rfind(EOL))
        };
        match last_newline {
            Some(last_newline) if junk_start < last_newline => {
                self.index = last_newline;
                self.peek_offset = 0;
            }
            _ => {}
        }

        while let Some(ch) = self.current_char() {
            if ch != EOL {
                self.next();
                continue;
            }
            match self.next() {
                Some(first) if is_char_id_start(first) || first == DASH || first == HASH => break,
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Movement
    // ========================================

    #[test]
    fn test_next_steps_over_crlf() {
        let mut cursor = Cursor::new("a\r\nb");
        assert_eq!(cursor.next(), Some('\n'));
        assert_eq!(cursor.index(), 1);
        assert_eq!(cursor.next(), Some('b'));
        assert_eq!(cursor.index(), 3);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.index(), 4);
    }

    #[test]
    fn test_lone_carriage_return_is_a_char() {
        let cursor = Cursor::new("\rx");
        assert_eq!(cursor.current_char(), Some('\r'));
    }

    #[test]
    fn test_peek_does_not_move_index() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.peek(), Some('b'));
        assert_eq!(cursor.peek(), Some('c'));
        assert_eq!(cursor.current_char(), Some('a'));
        assert_eq!(cursor.current_peek(), Some('c'));
        cursor.reset_peek(0);
        assert_eq!(cursor.current_peek(), Some('a'));
    }

    #[test]
    fn test_next_resets_peek() {
        let mut cursor = Cursor::new("abc");
        cursor.peek();
        cursor.peek();
        cursor.next();
        assert_eq!(cursor.peek_offset(), 0);
        assert_eq!(cursor.current_peek(), Some('b'));
    }

    #[test]
    fn test_multibyte_chars() {
        let mut cursor = Cursor::new("é€x");
        assert_eq!(cursor.next(), Some('€'));
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.next(), Some('x'));
        assert_eq!(cursor.index(), 5);
    }

    // ========================================
    // Blank handling
    // ========================================

    #[test]
    fn test_skip_blank_inline_returns_spaces() {
        let mut cursor = Cursor::new("   x");
        assert_eq!(cursor.skip_blank_inline(), "   ");
        assert_eq!(cursor.current_char(), Some('x'));
    }

    #[test]
    fn test_peek_blank_block_stops_before_indent() {
        let mut cursor = Cursor::new("\n  \n\n    x");
        assert_eq!(cursor.peek_blank_block(), "\n\n\n");
        // The lookahead sits at the start of the content line, before its indentation.
        assert_eq!(cursor.current_peek(), Some(' '));
        assert_eq!(cursor.index(), 0);
        cursor.skip_to_peek();
        assert_eq!(cursor.skip_blank_inline(), "    ");
    }

    #[test]
    fn test_skip_blank_block_at_eof_consumes_trailing_spaces() {
        let mut cursor = Cursor::new("\n   ");
        assert_eq!(cursor.skip_blank_block(), "\n");
        assert_eq!(cursor.current_char(), None);
    }

    #[test]
    fn test_skip_blank_mixed() {
        let mut cursor = Cursor::new(" \r\n \n x");
        cursor.skip_blank();
        assert_eq!(cursor.current_char(), Some('x'));
    }

    // ========================================
    // Expectations
    // ========================================

    #[test]
    fn test_structural_chars_match_registry() {
        use ftl_core::lang::punctuation;

        assert_eq!(punctuation::as_char(PunctuationId::LBrace), Some(LBRACE));
        assert_eq!(punctuation::as_char(PunctuationId::Asterisk), Some(ASTERISK));
        assert_eq!(punctuation::as_str(PunctuationId::Arrow), ARROW);
        assert!([RBRACE, DOT, LBRACKET, ASTERISK].into_iter().all(punctuation::is_special_line_start));
    }

    #[test]
    fn test_expect_char() {
        let mut cursor = Cursor::new("=x");
        assert!(cursor.expect_char('=').is_ok());
        let err = cursor.expect_char('=').unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExpectedToken('='));
        assert_eq!(err.position, 1);
    }

    #[test]
    fn test_expect_line_end() {
        assert!(Cursor::new("").expect_line_end().is_ok());
        let mut cursor = Cursor::new("\r\nx");
        assert!(cursor.expect_line_end().is_ok());
        assert_eq!(cursor.current_char(), Some('x'));
        let err = cursor.expect_line_end().unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExpectedToken('␤'));
    }

    #[test]
    fn test_take_id_start() {
        assert_eq!(Cursor::new("k").take_id_start(), Ok('k'));
        let err = Cursor::new("1").take_id_start().unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExpectedCharRange("a-zA-Z"));
    }

    #[test]
    fn test_take_helpers() {
        let mut cursor = Cursor::new("a-9F");
        assert_eq!(cursor.take_id_char(), Some('a'));
        assert_eq!(cursor.take_id_char(), Some('-'));
        assert_eq!(cursor.take_digit(), Some('9'));
        assert_eq!(cursor.take_digit(), None);
        assert_eq!(cursor.take_hex_digit(), Some('F'));
        assert_eq!(cursor.take_hex_digit(), None);
    }

    // ========================================
    // Recovery
    // ========================================

    #[test]
    fn test_skip_to_next_entry_start() {
        let source = "broken\n  still broken\nnext = 1\n";
        let mut cursor = Cursor::new(source);
        cursor.skip_to_next_entry_start(0);
        assert_eq!(&source[cursor.index()..], "next = 1\n");
    }

    #[test]
    fn test_skip_to_next_entry_start_rewinds_to_line_start() {
        let source = "key = { $n ->\n   *[one] x\nnext = 1\n";
        let mut cursor = Cursor::new(source);
        // Simulate an error reported at the line end after the variant.
        cursor.reset_peek(source.find("x\n").unwrap() + 1);
        cursor.skip_to_peek();
        cursor.skip_to_next_entry_start(0);
        assert_eq!(&source[cursor.index()..], "next = 1\n");
    }

    #[test]
    fn test_skip_to_next_entry_start_at_crlf() {
        let source = "key = {\r\n-t[\r\nnext = 1\r\n";
        let mut cursor = Cursor::new(source);
        cursor.reset_peek(source.find("[\r").unwrap() + 1);
        cursor.skip_to_peek();
        cursor.skip_to_next_entry_start(0);
        assert_eq!(&source[cursor.index()..], "next = 1\r\n");
    }

    #[test]
    fn test_skip_to_next_entry_start_hits_eof() {
        let mut cursor = Cursor::new("= nothing here");
        cursor.skip_to_next_entry_start(0);
        assert_eq!(cursor.current_char(), None);
    }
}
