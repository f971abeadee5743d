//! Shareable metadata for `ftl_core::lang` registries.
//!
//! The `ftl_core::lang` module is a set of **registry-first** vocabularies: error codes and punctuation.
//! This submodule provides the small, dependency-free metadata types reused across all registries.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in
//!   `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules still lives
//!   in the parser.
//!
//! ## See also
//! - [`crate::lang::errors`]
//! - [`crate::lang::punctuation`]

/// Identify the Fluent Syntax version a vocabulary item is available since.
///
/// ## Examples
/// ```rust
/// use ftl_core::lang::registry::SyntaxVersion;
///
/// let since: SyntaxVersion = "0.8";
/// assert!(!since.is_empty());
/// ```
pub type SyntaxVersion = &'static str;

/// Fluent Syntax 0.8, the grammar revision this workspace implements.
pub const SYNTAX_0_8: SyntaxVersion = "0.8";

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Notes
/// - `Reserved` items keep their identity (so codes are never re-used) but are not produced by the parser.
/// - `Deprecated` items belonged to older grammar revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Reserved,
    Deprecated,
}

/// Represent a small example snippet for documentation.
///
/// ## Notes
/// - `code` is the example body, in Fluent syntax.
/// - `note` is an optional short explanation (one or two sentences).
///
/// ## Examples
/// ```rust
/// use ftl_core::lang::registry::Example;
///
/// let ex = Example {
///     code: "hello = Hello\n",
///     note: Some("Minimal message."),
/// };
/// assert!(ex.code.contains('='));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}

/// Shared metadata shape for “registry-first” vocabulary items.
///
/// Vocabularies share the same core fields:
/// - stable identity (`id`)
/// - accepted spellings (`canonical` + `aliases`)
/// - documentation (`description` + `examples`)
/// - provenance (`since_version`, `stability`)
///
/// ## Notes
/// - `description` is intentionally mandatory to keep docs/tooling consistent.
/// - This type is `Copy` so it can live in `const` tables.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub since_version: SyntaxVersion,
    pub stability: Stability,
    pub examples: &'static [Example],
}
