//! Syntax frontend for Fluent localization files: cursor, parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse by the serializer, the `ftl` CLI, and editor tooling.
//!
//! ## Notes
//! - Parsing never fails: malformed entries come back as [`ast::Junk`] carrying one annotation with the error code.
//! - Vocabulary identity (error codes, punctuation) comes from `ftl_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use ftl_syntax::ast::Entry;
//! use ftl_syntax::parser;
//!
//! let document = parser::parse("hello = Hello, world!\n");
//! assert_eq!(document.body.len(), 1);
//! assert!(matches!(document.body[0], Entry::Message(_)));
//! ```
//!
//! ## See also
//! - `ftl_core::lang` for the error-code catalog.

pub mod ast;
pub mod cursor;
pub mod diagnostics;
pub mod parser;

pub use parser::{ParseOptions, parse, parse_entry, parse_with_options};
