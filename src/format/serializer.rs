//! Core serialization logic for Fluent resources
//!
//! Walks the AST and emits canonical Fluent source.

use ftl_syntax::ast::*;

use super::config::FormatConfig;
use super::writer::FormatWriter;

/// Serializer that turns an AST back into Fluent source
pub struct Serializer {
    writer: FormatWriter,
    /// Whether an entry has already been written; standalone comments after it get a separating blank line
    has_entries: bool,
}

impl Serializer {
    /// Create a new serializer with the given config
    pub fn new(config: FormatConfig) -> Self {
        Self {
            writer: FormatWriter::new(config),
            has_entries: false,
        }
    }

    /// Serialize a whole document and return the source
    pub fn serialize_document(mut self, document: &Document) -> String {
        let with_junk = self.writer.config().with_junk;
        for entry in &document.body {
            if entry.is_junk() && !with_junk {
                continue;
            }
            self.write_entry(entry);
            self.has_entries = true;
        }
        self.writer.finish()
    }

    /// Serialize a single entry, as if it were the first of its document
    pub fn serialize_entry(mut self, entry: &Entry) -> String {
        self.write_entry(entry);
        self.writer.finish()
    }

    /// Serialize a single expression
    pub fn serialize_expression(mut self, expression: &Expression) -> String {
        self.write_expression(expression);
        self.writer.finish()
    }

    // ========================================================================
    // Entries
    // ========================================================================

    fn write_entry(&mut self, entry: &Entry) {
        match entry {
            Entry::Message(message) => self.write_message(message),
            Entry::Term(term) => self.write_term(term),
            Entry::Comment(comment) => {
                if self.has_entries {
                    self.writer.newline();
                }
                self.write_comment(comment);
                self.writer.newline();
            }
            Entry::Junk(junk) => self.writer.write_raw(&junk.content),
        }
    }

    fn write_comment(&mut self, comment: &Comment) {
        let sigil = comment.level.sigil();
        for line in comment.content.split('\n') {
            self.writer.write(sigil);
            if !line.is_empty() {
                self.writer.write(" ");
                self.writer.write(line);
            }
            self.writer.newline();
        }
    }

    fn write_message(&mut self, message: &Message) {
        if let Some(comment) = &message.comment {
            self.write_comment(comment);
        }
        self.writer.write(&message.id.name);
        self.writer.write(" =");
        if let Some(value) = &message.value {
            self.write_value(value);
        }
        self.write_attributes(&message.attributes);
        self.writer.newline();
    }

    fn write_term(&mut self, term: &Term) {
        if let Some(comment) = &term.comment {
            self.write_comment(comment);
        }
        self.writer.write("-");
        self.writer.write(&term.id.name);
        self.writer.write(" =");
        self.write_value(&term.value);
        self.write_attributes(&term.attributes);
        self.writer.newline();
    }

    fn write_attributes(&mut self, attributes: &[Attribute]) {
        for attribute in attributes {
            self.writer.newline();
            self.writer.indent();
            self.writer.write(".");
            self.writer.write(&attribute.id.name);
            self.writer.write(" =");
            self.write_value(&attribute.value);
            self.writer.dedent();
        }
    }

    // ========================================================================
    // Patterns
    // ========================================================================

    /// A value after `=` or `]`: on its own indented lines when it is a block, inline otherwise.
    fn write_value(&mut self, pattern: &Pattern) {
        if pattern.elements.is_empty() {
            return;
        }
        if pattern.is_block() {
            self.writer.newline();
            self.writer.indent();
            self.write_pattern(pattern);
            self.writer.dedent();
        } else {
            self.writer.write(" ");
            self.write_pattern(pattern);
        }
    }

    fn write_pattern(&mut self, pattern: &Pattern) {
        for element in &pattern.elements {
            match element {
                PatternElement::TextElement(text) => self.writer.write(&text.value),
                PatternElement::Placeable(placeable) => self.write_placeable(placeable),
            }
        }
    }

    fn write_placeable(&mut self, placeable: &Placeable) {
        match placeable.expression.as_ref() {
            Expression::SelectExpression(select) => {
                self.writer.write("{ ");
                self.write_select(select);
                self.writer.write("}");
            }
            Expression::Placeable(inner) => {
                self.writer.write("{");
                self.write_placeable(inner);
                self.writer.write("}");
            }
            expression => {
                self.writer.write("{ ");
                self.write_expression(expression);
                self.writer.write(" }");
            }
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn write_expression(&mut self, expression: &Expression) {
        match expression {
            Expression::StringLiteral(literal) => self.write_string(literal),
            Expression::NumberLiteral(number) => self.writer.write(&number.value),
            Expression::MessageReference(reference) => self.writer.write(&reference.id.name),
            Expression::TermReference(reference) => {
                self.writer.write("-");
                self.writer.write(&reference.id.name);
            }
            Expression::VariableReference(reference) => {
                self.writer.write("$");
                self.writer.write(&reference.id.name);
            }
            Expression::FunctionReference(reference) => self.writer.write(&reference.id.name),
            Expression::AttributeExpression(attribute) => {
                self.write_expression(&attribute.reference);
                self.writer.write(".");
                self.writer.write(&attribute.name.name);
            }
            Expression::VariantExpression(variant) => {
                self.write_expression(&variant.reference);
                self.writer.write("[");
                self.writer.write(variant.key.as_str());
                self.writer.write("]");
            }
            Expression::CallExpression(call) => self.write_call(call),
            Expression::SelectExpression(select) => self.write_select(select),
            Expression::Placeable(placeable) => self.write_placeable(placeable),
        }
    }

    /// Strings are written from their raw form so escapes survive unchanged.
    fn write_string(&mut self, literal: &StringLiteral) {
        self.writer.write("\"");
        self.writer.write(&literal.raw);
        self.writer.write("\"");
    }

    fn write_call(&mut self, call: &CallExpression) {
        self.write_expression(&call.callee);
        self.writer.write("(");

        let mut first = true;
        for argument in &call.positional {
            if !first {
                self.writer.write(", ");
            }
            self.write_expression(argument);
            first = false;
        }
        for argument in &call.named {
            if !first {
                self.writer.write(", ");
            }
            self.writer.write(&argument.name.name);
            self.writer.write(": ");
            match &argument.value {
                Literal::StringLiteral(literal) => self.write_string(literal),
                Literal::NumberLiteral(number) => self.writer.write(&number.value),
            }
            first = false;
        }

        self.writer.write(")");
    }

    /// `selector ->`, one line per variant, then a line break; the caller closes the brace.
    fn write_select(&mut self, select: &SelectExpression) {
        self.write_expression(&select.selector);
        self.writer.write(" ->");

        self.writer.indent();
        for variant in &select.variants {
            self.writer.newline();
            if variant.default {
                self.writer.write_marked('*');
            }
            self.writer.write("[");
            self.writer.write(variant.key.as_str());
            self.writer.write("]");
            self.write_value(&variant.value);
        }
        self.writer.dedent();

        self.writer.newline();
    }
}
