//! Fluent serializer
//!
//! Renders a parsed [`Document`] back to canonical Fluent source:
//! - 4-space indentation for continuation lines, attributes and variants
//! - multiline values and select expressions start on their own line
//! - default variants marked with `*` in the last indentation column
//! - string literals written from their raw, still-escaped form
//!
//! For canonically formatted input, `serialize(parse(x)) == x`.

mod config;
mod serializer;
mod writer;

pub use config::{FormatConfig, SerializeOptions};
pub use serializer::Serializer;
pub use writer::FormatWriter;

use ftl_syntax::ast::{Document, Entry, Expression};
use thiserror::Error;

/// Serialize a document with default options (junk is dropped)
#[tracing::instrument(skip_all, fields(entry_count = document.body.len()))]
pub fn serialize(document: &Document) -> String {
    serialize_with_options(document, SerializeOptions::default())
}

/// Serialize a document with custom options
pub fn serialize_with_options(document: &Document, options: SerializeOptions) -> String {
    Serializer::new(options.into()).serialize_document(document)
}

/// Serialize a single entry
pub fn serialize_entry(entry: &Entry) -> String {
    Serializer::new(FormatConfig::default()).serialize_entry(entry)
}

/// Serialize a single expression, without the surrounding braces
pub fn serialize_expression(expression: &Expression) -> String {
    Serializer::new(FormatConfig::default()).serialize_expression(expression)
}

/// Reasons a source file cannot be reformatted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Reformatting would silently delete the junk entries.
    #[error("{count} {} could not be parsed", entries_noun(.count))]
    ContainsJunk { count: usize },
}

fn entries_noun(count: &usize) -> &'static str {
    if *count == 1 { "entry" } else { "entries" }
}

/// Parse and re-serialize Fluent source with default settings
pub fn format_source(source: &str) -> Result<String, FormatError> {
    format_source_with_config(source, FormatConfig::default())
}

/// Parse and re-serialize Fluent source with custom configuration.
///
/// Unless `config.with_junk` is set, sources containing junk are refused rather than reformatted.
pub fn format_source_with_config(source: &str, config: FormatConfig) -> Result<String, FormatError> {
    format_document(&ftl_syntax::parse(source), config)
}

/// Re-serialize an already parsed document, refusing junk unless `config.with_junk` is set.
pub fn format_document(document: &Document, config: FormatConfig) -> Result<String, FormatError> {
    let count = document.junk().count();
    if count > 0 && !config.with_junk {
        return Err(FormatError::ContainsJunk { count });
    }

    Ok(Serializer::new(config).serialize_document(document))
}

/// Check if source is already in canonical form
pub fn check_formatted(source: &str) -> Result<bool, FormatError> {
    let formatted = format_source(source)?;
    Ok(source == formatted)
}

/// Get the diff between original and formatted source
pub fn format_diff(source: &str) -> Result<Option<String>, FormatError> {
    format_diff_with_config(source, FormatConfig::default())
}

/// [`format_diff`] with custom configuration
pub fn format_diff_with_config(source: &str, config: FormatConfig) -> Result<Option<String>, FormatError> {
    let formatted = format_source_with_config(source, config)?;
    Ok(line_diff(source, &formatted))
}

/// Line-by-line diff between `original` and `formatted`, or `None` if they are equal.
pub fn line_diff(original: &str, formatted: &str) -> Option<String> {
    if original == formatted {
        return None;
    }

    let mut diff = String::new();
    let original_lines: Vec<&str> = original.lines().collect();
    let formatted_lines: Vec<&str> = formatted.lines().collect();

    let max_lines = original_lines.len().max(formatted_lines.len());

    for i in 0..max_lines {
        let orig = original_lines.get(i).copied();
        let fmt = formatted_lines.get(i).copied();

        if orig != fmt {
            if let Some(orig) = orig {
                diff.push_str(&format!("-{:4} | {}\n", i + 1, orig));
            }
            if let Some(fmt) = fmt {
                diff.push_str(&format!("+{:4} | {}\n", i + 1, fmt));
            }
        }
    }

    Some(diff)
}
