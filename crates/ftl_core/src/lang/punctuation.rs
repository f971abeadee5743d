//! Punctuation vocabulary.
//!
//! This module defines the structural characters of the Fluent grammar: entry markers, delimiters, separators and the
//! select arrow.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** (it only matters for the `->` spelling).
//! - This module is vocabulary only (spellings + metadata). It does not scan source text.
//!
//! ## Examples
//! ```rust
//! use ftl_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("->"), Some(PunctuationId::Arrow));
//! assert_eq!(punctuation::as_char(PunctuationId::LBrace), Some('{'));
//! assert!(punctuation::is_special_line_start('*'));
//! ```

use super::registry::{Example, SYNTAX_0_8, Stability, SyntaxVersion};

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets, braces and quotes.
    Delimiter,
    /// Separators like `,` `:` and `=`.
    Separator,
    /// Characters that mark the kind of an entry or reference (`-`, `$`, `#`, `.`).
    Sigil,
    /// The select arrow and the default-variant marker.
    Marker,
}

/// Stable identifier for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators
    Equals,
    Comma,
    Colon,

    // Sigils
    Dot,
    Dash,
    Dollar,
    Hash,

    // Markers
    Asterisk,
    Arrow,

    // Delimiters
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Quote,
    Backslash,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub category: PunctuationCategory,
    pub since_version: SyntaxVersion,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all punctuation tokens, in [`PunctuationId`] declaration order.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    // Separators
    info(PunctuationId::Equals, "=", PunctuationCategory::Separator),
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator),
    info(PunctuationId::Colon, ":", PunctuationCategory::Separator),
    // Sigils
    info(PunctuationId::Dot, ".", PunctuationCategory::Sigil),
    info(PunctuationId::Dash, "-", PunctuationCategory::Sigil),
    info(PunctuationId::Dollar, "$", PunctuationCategory::Sigil),
    info(PunctuationId::Hash, "#", PunctuationCategory::Sigil),
    // Markers
    info(PunctuationId::Asterisk, "*", PunctuationCategory::Marker),
    info(PunctuationId::Arrow, "->", PunctuationCategory::Marker),
    // Delimiters
    info(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter),
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter),
    info(PunctuationId::Quote, "\"", PunctuationCategory::Delimiter),
    info(PunctuationId::Backslash, "\\", PunctuationCategory::Delimiter),
];

/// Characters which, as the first non-blank character of an indented line, end a multiline pattern instead of
/// continuing it.
///
/// `}` closes a placeable, `.` starts an attribute, `[` and `*` start a variant.
pub const SPECIAL_LINE_START: &[PunctuationId] = &[
    PunctuationId::RBrace,
    PunctuationId::Dot,
    PunctuationId::LBracket,
    PunctuationId::Asterisk,
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Canonical spelling, usable in `const` items.
pub const fn spelling(id: PunctuationId) -> &'static str {
    PUNCTUATION[id as usize].canonical
}

/// Single-character spelling, usable in `const` items.
///
/// ## Panics
/// - If `id` is spelled with more than one character ([`PunctuationId::Arrow`]). In a `const` item this is a
///   compile error.
pub const fn char_of(id: PunctuationId) -> char {
    let bytes = spelling(id).as_bytes();
    assert!(bytes.len() == 1, "punctuation is not a single character");
    bytes[0] as char
}

/// Return the token as a single character, or `None` for multi-character spellings (`->`).
pub fn as_char(id: PunctuationId) -> Option<char> {
    let mut chars = as_str(id).chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return `true` if `ch` cannot start a continuation line of a multiline pattern.
pub fn is_special_line_start(ch: char) -> bool {
    SPECIAL_LINE_START.iter().any(|&id| as_char(id) == Some(ch))
}

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    if let Some(p) = PUNCTUATION.iter().find(|p| p.canonical == s) {
        return Some(p.id);
    }
    PUNCTUATION
        .iter()
        .find(|p| {
            let aliases: &[&str] = p.aliases;
            aliases.contains(&s)
        })
        .map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        aliases: &[],
        category,
        since_version: SYNTAX_0_8,
        stability: Stability::Stable,
        examples: &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_has_no_single_char() {
        assert_eq!(as_char(PunctuationId::Arrow), None);
        assert_eq!(as_char(PunctuationId::Quote), Some('"'));
    }

    #[test]
    fn test_const_spellings_follow_declaration_order() {
        for info in PUNCTUATION {
            assert_eq!(spelling(info.id), info.canonical);
            if let Some(ch) = as_char(info.id) {
                assert_eq!(char_of(info.id), ch);
            }
        }
        assert_eq!(spelling(PunctuationId::Arrow), "->");
    }

    #[test]
    #[should_panic(expected = "not a single character")]
    fn test_char_of_arrow_panics() {
        char_of(PunctuationId::Arrow);
    }

    #[test]
    fn test_special_line_starts() {
        for ch in ['}', '.', '[', '*'] {
            assert!(is_special_line_start(ch), "{ch:?} should end a pattern");
        }
        for ch in ['a', '{', '-', '#', ' '] {
            assert!(!is_special_line_start(ch), "{ch:?} should continue a pattern");
        }
    }
}
