//! Fluent syntax vocabulary registries.
//!
//! This module is the “front door” for syntax-level vocabulary: diagnostic codes and punctuation.
//!
//! The design goal is to avoid stringly-typed checks scattered across the parser and tooling.
//! Instead, callers work with **stable IDs** (e.g. `ErrorCode`, `PunctuationId`) and look up
//! spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The parser enforces syntax; registries provide spellings and metadata for shared use (diagnostics, docs,
//!   highlighting).
//!
//! ## Examples
//! ```rust
//! use ftl_core::lang::errors::{self, ErrorCode};
//!
//! assert_eq!(errors::from_str("E0010"), Some(ErrorCode::E0010));
//! assert_eq!(errors::as_str(ErrorCode::E0010), "E0010");
//! ```

pub mod errors;
pub mod punctuation;
pub mod registry;
