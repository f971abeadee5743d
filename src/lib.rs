#![forbid(unsafe_code)]
//! Fluent localization syntax: parser, serializer and the `ftl` command-line tool.
//!
//! The parser and AST live in the `ftl_syntax` crate and the vocabulary tables (error codes, punctuation) in
//! `ftl_core`; this crate adds the serializer and the CLI, and re-exports the commonly used pieces.
//!
//! ## Examples
//!
//! ```rust
//! let source = "greeting = Hello, { $name }!\n";
//! let document = ftl::parse(source);
//! assert_eq!(ftl::serialize(&document), source);
//! ```
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`. Parsing never fails: malformed input becomes `Junk`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation. Registry lookups (`info_for`) fall in this category.

pub mod cli;
pub mod format;

pub use ftl_syntax::ast;
pub use ftl_syntax::diagnostics;
pub use ftl_syntax::parser;
pub use ftl_syntax::{ParseOptions, parse, parse_entry, parse_with_options};

pub use ftl_core::ErrorCode;

pub use format::{
    FormatConfig, SerializeOptions, check_formatted, format_diff, format_source, format_source_with_config, serialize,
    serialize_entry, serialize_expression, serialize_with_options,
};
