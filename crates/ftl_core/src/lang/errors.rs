//! Diagnostic code vocabulary.
//!
//! Every recoverable parse failure carries one of the codes below. The codes are stable: tools and editors match on
//! them, so a code is never re-used for a different meaning even once the grammar stops producing it.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** (`"E0003"`, not `"e0003"`).
//! - The user-facing message (with arguments filled in) is produced by the parser's diagnostics; this registry carries
//!   the longer explanation and a minimal reproducer for each code.
//!
//! ## Examples
//! ```rust
//! use ftl_core::lang::errors::{self, ErrorCode};
//!
//! assert_eq!(errors::as_str(ErrorCode::E0005), "E0005");
//! assert!(errors::description(ErrorCode::E0005).contains("value"));
//! ```

use super::registry::{Example, LangItemInfo, SYNTAX_0_8, Stability};

/// Stable identifier for a parse diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorCode {
    E0001,
    E0002,
    E0003,
    E0004,
    E0005,
    E0006,
    E0007,
    E0008,
    E0009,
    E0010,
    E0011,
    E0012,
    E0013,
    E0014,
    E0015,
    E0016,
    E0017,
    E0018,
    E0019,
    E0020,
    E0021,
    E0022,
    E0023,
    E0024,
    E0025,
    E0026,
    E0027,
    E0028,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(as_str(*self))
    }
}

/// Metadata for a diagnostic code.
pub type ErrorCodeInfo = LangItemInfo<ErrorCode>;

/// Registry of all diagnostic codes, in code order.
pub const ERROR_CODES: &[ErrorCodeInfo] = &[
    reserved(
        ErrorCode::E0001,
        "E0001",
        "Generic parse error. Kept for compatibility with tools that expect the full code range; the parser always \
         reports a more specific code.",
    ),
    info(
        ErrorCode::E0002,
        "E0002",
        "A line at the top level must start an entry: a message identifier, `-` for a term, or `#` for a comment.",
        &[Example {
            code: "= orphan value\n",
            note: Some("The line starts with `=`, which cannot begin an entry."),
        }],
    ),
    info(
        ErrorCode::E0003,
        "E0003",
        "A specific character was required at this position. The argument names the expected character; `␤` stands \
         for a line end.",
        &[Example {
            code: "key value\n",
            note: Some("Messages need `=` between the identifier and the value."),
        }],
    ),
    info(
        ErrorCode::E0004,
        "E0004",
        "A character from a given range was required. Identifiers must start with an ASCII letter and numbers need at \
         least one digit on each side of the decimal point.",
        &[Example {
            code: "-1 = x\n",
            note: Some("Term identifiers cannot start with a digit."),
        }],
    ),
    info(
        ErrorCode::E0005,
        "E0005",
        "A message must have a value, at least one attribute, or both.",
        &[Example {
            code: "broken =\n",
            note: None,
        }],
    ),
    info(
        ErrorCode::E0006,
        "E0006",
        "A term must always have a value; attributes alone are not enough.",
        &[Example {
            code: "-brand =\n",
            note: None,
        }],
    ),
    deprecated(
        ErrorCode::E0007,
        "E0007",
        "Keywords could not end with whitespace. Keywords were removed from the grammar; the code is kept for \
         compatibility.",
    ),
    info(
        ErrorCode::E0008,
        "E0008",
        "Only upper-case identifiers (functions) and terms can be called.",
        &[Example {
            code: "key = { lower() }\n",
            note: Some("Function names must match `[A-Z][A-Z_?-]*`."),
        }],
    ),
    info(
        ErrorCode::E0009,
        "E0009",
        "The name of a named argument has to be a simple identifier.",
        &[Example {
            code: "key = { NUMBER($n, $style: \"long\") }\n",
            note: None,
        }],
    ),
    info(
        ErrorCode::E0010,
        "E0010",
        "Exactly one variant of a select expression has to be marked as the default with `*`.",
        &[Example {
            code: "key = { $n ->\n    [one] One\n    [other] Many\n}\n",
            note: Some("Neither variant is marked with `*`."),
        }],
    ),
    info(
        ErrorCode::E0011,
        "E0011",
        "A select expression needs at least one variant after `->`.",
        &[Example {
            code: "key = { $n ->\n}\n",
            note: None,
        }],
    ),
    info(
        ErrorCode::E0012,
        "E0012",
        "Attributes and variants must have a value.",
        &[Example {
            code: "key = value\n    .title =\n",
            note: None,
        }],
    ),
    info(
        ErrorCode::E0013,
        "E0013",
        "A variant key (an identifier or a number) was expected inside `[...]`.",
        &[Example {
            code: "key = { $n ->\n   *[",
            note: Some("The source ends before the key."),
        }],
    ),
    info(
        ErrorCode::E0014,
        "E0014",
        "A literal (string or number) was expected. Named arguments only accept literal values.",
        &[Example {
            code: "key = { NUMBER($n, style: $other) }\n",
            note: None,
        }],
    ),
    info(
        ErrorCode::E0015,
        "E0015",
        "Only one variant of a select expression can be marked as the default with `*`.",
        &[Example {
            code: "key = { $n ->\n   *[one] One\n   *[other] Many\n}\n",
            note: None,
        }],
    ),
    info(
        ErrorCode::E0016,
        "E0016",
        "Message references cannot be used as selectors.",
        &[Example {
            code: "key = { other ->\n   *[a] A\n}\n",
            note: None,
        }],
    ),
    info(
        ErrorCode::E0017,
        "E0017",
        "Terms, their variants and calls to them cannot be used as selectors; only term attributes can.",
        &[Example {
            code: "key = { -term ->\n   *[a] A\n}\n",
            note: None,
        }],
    ),
    info(
        ErrorCode::E0018,
        "E0018",
        "Attributes of messages cannot be used as selectors.",
        &[Example {
            code: "key = { other.attr ->\n   *[a] A\n}\n",
            note: None,
        }],
    ),
    info(
        ErrorCode::E0019,
        "E0019",
        "Attributes of terms are private and may only be used as selectors, never as placeables.",
        &[Example {
            code: "key = { -term.attr }\n",
            note: None,
        }],
    ),
    info(
        ErrorCode::E0020,
        "E0020",
        "String literals must be closed on the same line they start on.",
        &[Example {
            code: "key = { \"unterminated\n}\n",
            note: None,
        }],
    ),
    info(
        ErrorCode::E0021,
        "E0021",
        "Positional arguments must come before any named argument.",
        &[Example {
            code: "key = { NUMBER(style: \"a\", $n) }\n",
            note: None,
        }],
    ),
    info(
        ErrorCode::E0022,
        "E0022",
        "Each named argument may appear at most once in a call.",
        &[Example {
            code: "key = { NUMBER(style: \"a\", style: \"b\") }\n",
            note: None,
        }],
    ),
    deprecated(
        ErrorCode::E0023,
        "E0023",
        "Variant lists were only allowed inside other variant lists. Variant lists were removed from the grammar; the \
         code is kept for compatibility.",
    ),
    info(
        ErrorCode::E0024,
        "E0024",
        "Only terms have variants; `message[key]` is not valid.",
        &[Example {
            code: "key = { other[one] }\n",
            note: None,
        }],
    ),
    info(
        ErrorCode::E0025,
        "E0025",
        "Unknown escape sequence in a string literal. Valid escapes are `\\\\`, `\\\"`, `\\uXXXX` and `\\UXXXXXX`.",
        &[Example {
            code: "key = { \"\\q\" }\n",
            note: None,
        }],
    ),
    info(
        ErrorCode::E0026,
        "E0026",
        "A Unicode escape sequence needs exactly 4 (`\\u`) or 6 (`\\U`) hexadecimal digits.",
        &[Example {
            code: "key = { \"\\u00zz\" }\n",
            note: None,
        }],
    ),
    info(
        ErrorCode::E0027,
        "E0027",
        "A closing brace appeared in text without a matching opening brace. Use `{ \"}\" }` for a literal brace.",
        &[Example {
            code: "key = value }\n",
            note: None,
        }],
    ),
    info(
        ErrorCode::E0028,
        "E0028",
        "An inline expression (literal, reference, call or nested placeable) was expected.",
        &[Example {
            code: "key = { ! }\n",
            note: None,
        }],
    ),
];

/// Return the canonical spelling for a code (e.g. `"E0010"`).
#[inline]
pub fn as_str(code: ErrorCode) -> &'static str {
    info_for(code).canonical
}

/// Return the long-form explanation of a code.
#[inline]
pub fn description(code: ErrorCode) -> &'static str {
    info_for(code).description
}

/// Return the documentation examples for a code.
#[inline]
pub fn examples(code: ErrorCode) -> &'static [Example] {
    info_for(code).examples
}

/// Return `true` if the parser can produce `code`.
#[inline]
pub fn is_produced(code: ErrorCode) -> bool {
    info_for(code).stability == Stability::Stable
}

/// Resolve a spelling to a code.
///
/// Matching is case-sensitive.
pub fn from_str(name: &str) -> Option<ErrorCode> {
    if let Some(e) = ERROR_CODES.iter().find(|e| e.canonical == name) {
        return Some(e.id);
    }
    ERROR_CODES.iter().find(|e| e.aliases.contains(&name)).map(|e| e.id)
}

/// Return full metadata for a code.
///
/// ## Panics
/// - If the registry is missing an entry for `code` (programming error).
pub fn info_for(code: ErrorCode) -> &'static ErrorCodeInfo {
    ERROR_CODES
        .iter()
        .find(|e| e.id == code)
        .expect("error code info missing")
}

const fn info(
    id: ErrorCode,
    canonical: &'static str,
    description: &'static str,
    examples: &'static [Example],
) -> ErrorCodeInfo {
    LangItemInfo {
        id,
        canonical,
        aliases: &[],
        description,
        since_version: SYNTAX_0_8,
        stability: Stability::Stable,
        examples,
    }
}

const fn reserved(id: ErrorCode, canonical: &'static str, description: &'static str) -> ErrorCodeInfo {
    LangItemInfo {
        id,
        canonical,
        aliases: &[],
        description,
        since_version: SYNTAX_0_8,
        stability: Stability::Reserved,
        examples: &[],
    }
}

const fn deprecated(id: ErrorCode, canonical: &'static str, description: &'static str) -> ErrorCodeInfo {
    LangItemInfo {
        id,
        canonical,
        aliases: &[],
        description,
        since_version: SYNTAX_0_8,
        stability: Stability::Deprecated,
        examples: &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_in_order() {
        for pair in ERROR_CODES.windows(2) {
            assert!(pair[0].id < pair[1].id, "{:?} listed before {:?}", pair[0].id, pair[1].id);
        }
    }

    #[test]
    fn test_display_matches_canonical() {
        assert_eq!(ErrorCode::E0027.to_string(), "E0027");
    }

    #[test]
    fn test_unproduced_codes() {
        assert!(!is_produced(ErrorCode::E0001));
        assert!(!is_produced(ErrorCode::E0007));
        assert!(!is_produced(ErrorCode::E0023));
        assert!(is_produced(ErrorCode::E0015));
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert_eq!(from_str("E0016"), Some(ErrorCode::E0016));
        assert_eq!(from_str("e0016"), None);
        assert_eq!(from_str("E9999"), None);
    }
}
