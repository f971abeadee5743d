//! Parser for Fluent resources
//!
//! A single-pass recursive-descent parser working directly on characters (there is no separate lexer: whitespace
//! and line structure are part of the grammar). Entries that fail to parse are recovered as [`Junk`] with one
//! [`Annotation`] describing the first error.
//!
//! ## Examples
//!
//! ```rust
//! use ftl_syntax::ast::{Entry, Expression, PatternElement};
//! use ftl_syntax::parser;
//!
//! let document = parser::parse("greeting = Hello, { $name }!\n");
//! let Entry::Message(message) = &document.body[0] else { panic!("expected a message") };
//! let value = message.value.as_ref().unwrap();
//! assert_eq!(value.elements.len(), 3);
//! match &value.elements[1] {
//!     PatternElement::Placeable(p) => assert!(matches!(*p.expression, Expression::VariableReference(_))),
//!     other => panic!("unexpected element {other:?}"),
//! }
//! ```

use crate::ast::*;
use crate::cursor::{
    ARROW, ASTERISK, BACKSLASH, COLON, COMMA, Cursor, DASH, DOLLAR, DOT, EOL, EQUALS, HASH, LBRACE, LBRACKET, LPAREN,
    QUOTE, RBRACE, RBRACKET, RPAREN,
};
use crate::diagnostics::{ErrorKind, ParseError};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/entries.rs");
include!("parser/pattern.rs");
include!("parser/expr.rs");
include!("parser/literals.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
