//! Parse errors and their presentation.
//!
//! Productions return [`ParseError`]; the parser turns each one into an [`Annotation`] on a [`Junk`] entry, so errors
//! never escape the public parse functions. [`JunkReport`] renders those annotations with source context via `miette`.

use ftl_core::ErrorCode;
use ftl_core::lang::errors;
use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode, SourceSpan};
use thiserror::Error;

use crate::ast::{Annotation, Document, Junk, Span};

/// What went wrong. Each variant maps onto exactly one [`ErrorCode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("Generic error")]
    Generic,
    #[error("Expected an entry start")]
    ExpectedEntry,
    #[error("Expected token: \"{0}\"")]
    ExpectedToken(char),
    #[error("Expected a character from range: \"{0}\"")]
    ExpectedCharRange(&'static str),
    #[error("Expected message \"{0}\" to have a value or attributes")]
    ExpectedMessageField(String),
    #[error("Expected term \"-{0}\" to have a value")]
    ExpectedTermField(String),
    #[error("Keyword cannot end with a whitespace")]
    KeywordTrailingWhitespace,
    #[error("The callee has to be an upper-case identifier or a term")]
    ForbiddenCallee,
    #[error("The argument name has to be a simple identifier")]
    ForbiddenKey,
    #[error("Expected one of the variants to be marked as default (*)")]
    MissingDefaultVariant,
    #[error("Expected at least one variant after \"->\"")]
    MissingVariants,
    #[error("Expected value")]
    MissingValue,
    #[error("Expected variant key")]
    MissingVariantKey,
    #[error("Expected literal")]
    MissingLiteral,
    #[error("Only one variant can be marked as default (*)")]
    MultipleDefaultVariants,
    #[error("Message references cannot be used as selectors")]
    MessageReferenceAsSelector,
    #[error("Terms cannot be used as selectors")]
    TermReferenceAsSelector,
    #[error("Attributes of messages cannot be used as selectors")]
    MessageAttributeAsSelector,
    #[error("Attributes of terms cannot be used as placeables")]
    TermAttributeAsPlaceable,
    #[error("Unterminated string expression")]
    UnterminatedStringExpression,
    #[error("Positional arguments must not follow named arguments")]
    PositionalArgumentFollowsNamed,
    #[error("Named arguments must be unique")]
    DuplicatedNamedArgument(String),
    #[error("VariantLists are only allowed inside of other VariantLists.")]
    ForbiddenVariantList,
    #[error("Cannot access variants of a message.")]
    ForbiddenVariantAccessor,
    #[error("Unknown escape sequence: \\{0}.")]
    UnknownEscapeSequence(String),
    #[error("Invalid Unicode escape sequence: {0}.")]
    InvalidUnicodeEscapeSequence(String),
    #[error("Unbalanced closing brace in TextElement.")]
    UnbalancedClosingBrace,
    #[error("Expected an inline expression")]
    ExpectedInlineExpression,
}

impl ErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ErrorKind::Generic => ErrorCode::E0001,
            ErrorKind::ExpectedEntry => ErrorCode::E0002,
            ErrorKind::ExpectedToken(_) => ErrorCode::E0003,
            ErrorKind::ExpectedCharRange(_) => ErrorCode::E0004,
            ErrorKind::ExpectedMessageField(_) => ErrorCode::E0005,
            ErrorKind::ExpectedTermField(_) => ErrorCode::E0006,
            ErrorKind::KeywordTrailingWhitespace => ErrorCode::E0007,
            ErrorKind::ForbiddenCallee => ErrorCode::E0008,
            ErrorKind::ForbiddenKey => ErrorCode::E0009,
            ErrorKind::MissingDefaultVariant => ErrorCode::E0010,
            ErrorKind::MissingVariants => ErrorCode::E0011,
            ErrorKind::MissingValue => ErrorCode::E0012,
            ErrorKind::MissingVariantKey => ErrorCode::E0013,
            ErrorKind::MissingLiteral => ErrorCode::E0014,
            ErrorKind::MultipleDefaultVariants => ErrorCode::E0015,
            ErrorKind::MessageReferenceAsSelector => ErrorCode::E0016,
            ErrorKind::TermReferenceAsSelector => ErrorCode::E0017,
            ErrorKind::MessageAttributeAsSelector => ErrorCode::E0018,
            ErrorKind::TermAttributeAsPlaceable => ErrorCode::E0019,
            ErrorKind::UnterminatedStringExpression => ErrorCode::E0020,
            ErrorKind::PositionalArgumentFollowsNamed => ErrorCode::E0021,
            ErrorKind::DuplicatedNamedArgument(_) => ErrorCode::E0022,
            ErrorKind::ForbiddenVariantList => ErrorCode::E0023,
            ErrorKind::ForbiddenVariantAccessor => ErrorCode::E0024,
            ErrorKind::UnknownEscapeSequence(_) => ErrorCode::E0025,
            ErrorKind::InvalidUnicodeEscapeSequence(_) => ErrorCode::E0026,
            ErrorKind::UnbalancedClosingBrace => ErrorCode::E0027,
            ErrorKind::ExpectedInlineExpression => ErrorCode::E0028,
        }
    }

    /// Positional arguments of the message template, as recorded on annotations.
    pub fn args(&self) -> Vec<String> {
        match self {
            ErrorKind::ExpectedToken(ch) => vec![ch.to_string()],
            ErrorKind::ExpectedCharRange(range) => vec![(*range).to_string()],
            ErrorKind::ExpectedMessageField(id)
            | ErrorKind::ExpectedTermField(id)
            | ErrorKind::DuplicatedNamedArgument(id) => vec![id.clone()],
            ErrorKind::UnknownEscapeSequence(seq) | ErrorKind::InvalidUnicodeEscapeSequence(seq) => {
                vec![seq.clone()]
            }
            _ => Vec::new(),
        }
    }
}

/// A failed production: what went wrong and the byte offset of the cursor when it did.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub position: usize,
}

impl ParseError {
    pub fn new(kind: ErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn args(&self) -> Vec<String> {
        self.kind.args()
    }

    /// Convert into the annotation stored on a junk entry.
    pub fn into_annotation(self, span: Option<Span>) -> Annotation {
        Annotation {
            code: self.kind.code(),
            args: self.kind.args(),
            message: self.kind.to_string(),
            span,
        }
    }
}

/// Convert a byte offset into a 1-based `(line, column)` pair. Columns count characters, not bytes.
///
/// Offsets past the end of `source` are clamped to its length.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

// ============================================================================
// miette rendering
// ============================================================================

/// A junk annotation packaged with its source for rich rendering.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct JunkReport {
    code: ErrorCode,
    message: String,
    src: NamedSource<String>,
    span: SourceSpan,
    junk: Option<SourceSpan>,
}

impl JunkReport {
    pub fn new(file_name: &str, source: &str, junk: &Junk, annotation: &Annotation) -> Self {
        let at = annotation.span.or(junk.span).map(|span| span.start).unwrap_or(0);
        Self {
            code: annotation.code,
            message: annotation.message.clone(),
            src: NamedSource::new(file_name, source.to_string()),
            span: SourceSpan::from((at, 0)),
            junk: junk.span.map(|span| SourceSpan::from((span.start, span.len()))),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Byte offset the report points at.
    pub fn offset(&self) -> usize {
        self.span.offset()
    }
}

impl Diagnostic for JunkReport {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(self.code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(errors::description(self.code)))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let mut labels = vec![LabeledSpan::new_primary_with_span(Some("here".to_string()), self.span)];
        if let Some(junk) = self.junk {
            labels.push(LabeledSpan::new_with_span(Some("skipped as junk".to_string()), junk));
        }
        Some(Box::new(labels.into_iter()))
    }
}

/// Build one report per annotation of every junk entry in `document`.
pub fn junk_reports(file_name: &str, source: &str, document: &Document) -> Vec<JunkReport> {
    document
        .junk()
        .flat_map(|junk| {
            junk.annotations
                .iter()
                .map(move |annotation| JunkReport::new(file_name, source, junk, annotation))
        })
        .collect()
}
