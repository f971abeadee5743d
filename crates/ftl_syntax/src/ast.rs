//! Abstract Syntax Tree definitions for Fluent resources
//!
//! Every node family is a closed enum over plain data structs. Nodes carry an optional [`Span`]: `Some` when the
//! document was parsed with span tracking (the default), `None` otherwise or when the node was built by hand.
//!
//! Trees are values. Equality is structural (spans included), and edits are done by cloning and replacing nodes.

use ftl_core::ErrorCode;

/// Source location span (byte offsets into the parsed text)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Access to the optional span every node carries.
///
/// The parser uses this to attach spans after a production returns (see `Parser::spanned`).
pub trait SyntaxNode {
    fn span(&self) -> Option<Span>;

    fn span_mut(&mut self) -> &mut Option<Span>;
}

macro_rules! impl_syntax_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SyntaxNode for $ty {
                fn span(&self) -> Option<Span> {
                    self.span
                }

                fn span_mut(&mut self) -> &mut Option<Span> {
                    &mut self.span
                }
            }
        )*
    };
}

macro_rules! delegate_syntax_node {
    ($ty:ty { $($variant:ident),* $(,)? }) => {
        impl SyntaxNode for $ty {
            fn span(&self) -> Option<Span> {
                match self {
                    $(Self::$variant(node) => node.span(),)*
                }
            }

            fn span_mut(&mut self) -> &mut Option<Span> {
                match self {
                    $(Self::$variant(node) => node.span_mut(),)*
                }
            }
        }
    };
}

// ============================================================================
// Document and entries
// ============================================================================

/// A parsed `.ftl` resource: entries in source order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    pub body: Vec<Entry>,
    pub span: Option<Span>,
}

impl Document {
    pub fn new(body: Vec<Entry>) -> Self {
        Self { body, span: None }
    }

    /// Iterate over the messages of the document.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.body.iter().filter_map(|entry| match entry {
            Entry::Message(message) => Some(message),
            _ => None,
        })
    }

    /// Iterate over the terms of the document.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.body.iter().filter_map(|entry| match entry {
            Entry::Term(term) => Some(term),
            _ => None,
        })
    }

    /// Iterate over the entries that failed to parse.
    pub fn junk(&self) -> impl Iterator<Item = &Junk> {
        self.body.iter().filter_map(|entry| match entry {
            Entry::Junk(junk) => Some(junk),
            _ => None,
        })
    }

    /// Find a message by identifier.
    pub fn message(&self, id: &str) -> Option<&Message> {
        self.messages().find(|message| message.id.name == id)
    }

    /// Find a term by identifier (without the leading `-`).
    pub fn term(&self, id: &str) -> Option<&Term> {
        self.terms().find(|term| term.id.name == id)
    }
}

/// Top-level entry of a document.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Entry {
    Message(Message),
    Term(Term),
    Comment(Comment),
    Junk(Junk),
}

delegate_syntax_node!(Entry { Message, Term, Comment, Junk });

impl Entry {
    pub fn span(&self) -> Option<Span> {
        SyntaxNode::span(self)
    }

    pub fn is_junk(&self) -> bool {
        matches!(self, Entry::Junk(_))
    }
}

/// `id = pattern` with optional attributes. At least one of value and attributes is present after parsing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub id: Identifier,
    pub value: Option<Pattern>,
    pub attributes: Vec<Attribute>,
    pub comment: Option<Comment>,
    pub span: Option<Span>,
}

impl Message {
    pub fn new(id: Identifier, value: Option<Pattern>, attributes: Vec<Attribute>) -> Self {
        Self {
            id,
            value,
            attributes,
            comment: None,
            span: None,
        }
    }
}

/// `-id = pattern`. Terms always have a value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Term {
    pub id: Identifier,
    pub value: Pattern,
    pub attributes: Vec<Attribute>,
    pub comment: Option<Comment>,
    pub span: Option<Span>,
}

impl Term {
    pub fn new(id: Identifier, value: Pattern, attributes: Vec<Attribute>) -> Self {
        Self {
            id,
            value,
            attributes,
            comment: None,
            span: None,
        }
    }
}

/// Comment nesting level, from the number of leading `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommentLevel {
    /// `#`, documents the entry that follows it.
    Comment,
    /// `##`, titles a group of entries.
    Group,
    /// `###`, describes the whole resource.
    Resource,
}

impl CommentLevel {
    /// Number of `#` beyond the first (0, 1 or 2).
    pub fn depth(self) -> usize {
        match self {
            CommentLevel::Comment => 0,
            CommentLevel::Group => 1,
            CommentLevel::Resource => 2,
        }
    }

    pub fn from_depth(depth: usize) -> Self {
        match depth {
            0 => CommentLevel::Comment,
            1 => CommentLevel::Group,
            _ => CommentLevel::Resource,
        }
    }

    /// The `#` prefix written before each line.
    pub fn sigil(self) -> &'static str {
        match self {
            CommentLevel::Comment => "#",
            CommentLevel::Group => "##",
            CommentLevel::Resource => "###",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comment {
    pub level: CommentLevel,
    /// Lines joined with `\n`, without the `# ` prefixes.
    pub content: String,
    pub span: Option<Span>,
}

impl Comment {
    pub fn new(level: CommentLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
            span: None,
        }
    }
}

/// Unparsed source of a malformed entry, kept verbatim.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Junk {
    pub content: String,
    pub annotations: Vec<Annotation>,
    pub span: Option<Span>,
}

/// Error attached to a [`Junk`] entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotation {
    #[cfg_attr(feature = "serde", serde(with = "code_serde"))]
    pub code: ErrorCode,
    pub args: Vec<String>,
    pub message: String,
    pub span: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    pub id: Identifier,
    pub value: Pattern,
    pub span: Option<Span>,
}

impl Attribute {
    pub fn new(id: Identifier, value: Pattern) -> Self {
        Self { id, value, span: None }
    }
}

/// `[A-Za-z][A-Za-z0-9_-]*`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    pub name: String,
    pub span: Option<Span>,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            span: None,
        }
    }
}

// ============================================================================
// Patterns
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    pub elements: Vec<PatternElement>,
    pub span: Option<Span>,
}

impl Pattern {
    pub fn new(elements: Vec<PatternElement>) -> Self {
        Self { elements, span: None }
    }

    /// Whether the pattern has to start on its own line when written out: it contains a select expression or
    /// multiline text.
    pub fn is_block(&self) -> bool {
        self.elements.iter().any(|element| match element {
            PatternElement::TextElement(text) => text.value.contains('\n'),
            PatternElement::Placeable(placeable) => {
                matches!(*placeable.expression, Expression::SelectExpression(_))
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum PatternElement {
    TextElement(TextElement),
    Placeable(Placeable),
}

delegate_syntax_node!(PatternElement { TextElement, Placeable });

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextElement {
    pub value: String,
    pub span: Option<Span>,
}

impl TextElement {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            span: None,
        }
    }
}

/// `{ expression }`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placeable {
    pub expression: Box<Expression>,
    pub span: Option<Span>,
}

impl Placeable {
    pub fn new(expression: Expression) -> Self {
        Self {
            expression: Box::new(expression),
            span: None,
        }
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Expression {
    StringLiteral(StringLiteral),
    NumberLiteral(NumberLiteral),
    MessageReference(MessageReference),
    TermReference(TermReference),
    VariableReference(VariableReference),
    FunctionReference(FunctionReference),
    AttributeExpression(AttributeExpression),
    VariantExpression(VariantExpression),
    CallExpression(CallExpression),
    SelectExpression(SelectExpression),
    Placeable(Placeable),
}

delegate_syntax_node!(Expression {
    StringLiteral,
    NumberLiteral,
    MessageReference,
    TermReference,
    VariableReference,
    FunctionReference,
    AttributeExpression,
    VariantExpression,
    CallExpression,
    SelectExpression,
    Placeable,
});

/// Quoted string. `raw` is the text between the quotes as written (escapes intact), `value` the decoded text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringLiteral {
    pub raw: String,
    pub value: String,
    pub span: Option<Span>,
}

impl StringLiteral {
    /// Build a literal whose raw form needs no escapes.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            raw: value.clone(),
            value,
            span: None,
        }
    }
}

/// `-?[0-9]+(\.[0-9]+)?`, kept as source text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberLiteral {
    pub value: String,
    pub span: Option<Span>,
}

impl NumberLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            span: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageReference {
    pub id: Identifier,
    pub span: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TermReference {
    pub id: Identifier,
    pub span: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableReference {
    pub id: Identifier,
    pub span: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionReference {
    pub id: Identifier,
    pub span: Option<Span>,
}

/// `reference.name`, where the reference is a message or a term.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeExpression {
    pub reference: Box<Expression>,
    pub name: Identifier,
    pub span: Option<Span>,
}

/// `-term[key]`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantExpression {
    pub reference: Box<Expression>,
    pub key: VariantKey,
    pub span: Option<Span>,
}

/// `callee(positional..., name: literal...)`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallExpression {
    pub callee: Box<Expression>,
    pub positional: Vec<Expression>,
    pub named: Vec<NamedArgument>,
    pub span: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectExpression {
    pub selector: Box<Expression>,
    pub variants: Vec<Variant>,
    pub span: Option<Span>,
}

impl SelectExpression {
    pub fn default_variant(&self) -> Option<&Variant> {
        self.variants.iter().find(|variant| variant.default)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variant {
    pub key: VariantKey,
    pub value: Pattern,
    pub default: bool,
    pub span: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum VariantKey {
    Identifier(Identifier),
    NumberLiteral(NumberLiteral),
}

delegate_syntax_node!(VariantKey { Identifier, NumberLiteral });

impl VariantKey {
    /// The key as written between the brackets.
    pub fn as_str(&self) -> &str {
        match self {
            VariantKey::Identifier(id) => &id.name,
            VariantKey::NumberLiteral(number) => &number.value,
        }
    }
}

/// Value of a named argument. Only literals are allowed there.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Literal {
    StringLiteral(StringLiteral),
    NumberLiteral(NumberLiteral),
}

delegate_syntax_node!(Literal { StringLiteral, NumberLiteral });

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::StringLiteral(string) => Expression::StringLiteral(string),
            Literal::NumberLiteral(number) => Expression::NumberLiteral(number),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedArgument {
    pub name: Identifier,
    pub value: Literal,
    pub span: Option<Span>,
}

impl_syntax_node!(
    Document,
    Message,
    Term,
    Comment,
    Junk,
    Annotation,
    Attribute,
    Identifier,
    Pattern,
    TextElement,
    Placeable,
    StringLiteral,
    NumberLiteral,
    MessageReference,
    TermReference,
    VariableReference,
    FunctionReference,
    AttributeExpression,
    VariantExpression,
    CallExpression,
    SelectExpression,
    Variant,
    NamedArgument,
);

/// Error codes travel as their canonical spelling (`"E0003"`).
#[cfg(feature = "serde")]
mod code_serde {
    use ftl_core::ErrorCode;
    use ftl_core::lang::errors;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(code: &ErrorCode, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(errors::as_str(*code))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ErrorCode, D::Error> {
        let spelling = String::deserialize(deserializer)?;
        errors::from_str(&spelling)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown error code {spelling:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_merge() {
        let merged = Span::new(4, 10).merge(Span::new(0, 6));
        assert_eq!(merged, Span::new(0, 10));
        assert_eq!(merged.len(), 10);
    }

    #[test]
    fn test_pattern_is_block() {
        let inline = Pattern::new(vec![PatternElement::TextElement(TextElement::new("one line"))]);
        assert!(!inline.is_block());

        let multiline = Pattern::new(vec![PatternElement::TextElement(TextElement::new("one\ntwo"))]);
        assert!(multiline.is_block());

        let select = Pattern::new(vec![PatternElement::Placeable(Placeable::new(
            Expression::SelectExpression(SelectExpression {
                selector: Box::new(Expression::NumberLiteral(NumberLiteral::new("1"))),
                variants: vec![],
                span: None,
            }),
        ))]);
        assert!(select.is_block());
    }

    #[test]
    fn test_comment_level_depth_roundtrip() {
        for level in [CommentLevel::Comment, CommentLevel::Group, CommentLevel::Resource] {
            assert_eq!(CommentLevel::from_depth(level.depth()), level);
            assert_eq!(level.sigil().len(), level.depth() + 1);
        }
    }

    #[test]
    fn test_entry_span_delegates() {
        let mut entry = Entry::Comment(Comment::new(CommentLevel::Group, "Group"));
        assert_eq!(entry.span(), None);
        *entry.span_mut() = Some(Span::new(0, 8));
        assert_eq!(entry.span(), Some(Span::new(0, 8)));
    }

    #[test]
    fn test_document_lookups() {
        let document = Document::new(vec![
            Entry::Message(Message::new(Identifier::new("hello"), None, vec![])),
            Entry::Term(Term::new(Identifier::new("brand"), Pattern::default(), vec![])),
        ]);
        assert!(document.message("hello").is_some());
        assert!(document.message("brand").is_none());
        assert!(document.term("brand").is_some());
        assert_eq!(document.junk().count(), 0);
    }
}
