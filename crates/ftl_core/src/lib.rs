//! Provide the canonical, shared vocabulary of the Fluent syntax for the `ftl` parser, serializer and tooling.
//!
//! This crate is intentionally small and dependency-free. It contains deterministic tables that both:
//! - the parser uses to classify structural characters and to name its diagnostics, and
//! - tools (the CLI, editors, docs generators) use to explain those diagnostics to people.
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no global state, and no AST types.
//! - Current scope: the error-code catalog (`E0001`–`E0028`) and the punctuation that drives grammar decisions.

pub mod lang;

pub use lang::errors::ErrorCode;
pub use lang::punctuation::PunctuationId;
