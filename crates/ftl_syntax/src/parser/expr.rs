/// Expression productions: placeables, references, calls and select expressions.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser`.
/// - Selector and placeable restrictions (E0016–E0019) are checked in [`Parser::expression`], after the inline
///   expression is known, because they depend on whether `->` follows.

/// Positional and named arguments of a call.
struct CallArguments {
    positional: Vec<Expression>,
    named: Vec<NamedArgument>,
}

/// One argument inside `(...)`.
enum CallArgument {
    Positional(Expression),
    Named(NamedArgument),
}

impl SyntaxNode for CallArgument {
    fn span(&self) -> Option<Span> {
        match self {
            CallArgument::Positional(expression) => expression.span(),
            CallArgument::Named(argument) => argument.span(),
        }
    }

    fn span_mut(&mut self) -> &mut Option<Span> {
        match self {
            CallArgument::Positional(expression) => expression.span_mut(),
            CallArgument::Named(argument) => argument.span_mut(),
        }
    }
}

/// Only `[A-Z][A-Z_?-]*` identifiers can be called as functions.
fn is_function_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|ch| ch.is_ascii_uppercase())
        && chars.all(|ch| ch.is_ascii_uppercase() || matches!(ch, '_' | '?' | '-'))
}

impl<'s> Parser<'s> {
    fn placeable(&mut self) -> Result<Placeable, ParseError> {
        self.cursor.expect_char(LBRACE)?;
        self.cursor.skip_blank();
        let expression = self.spanned(Self::expression)?;
        self.cursor.expect_char(RBRACE)?;
        Ok(Placeable::new(expression))
    }

    /// An inline expression, or a select expression if `->` follows it.
    fn expression(&mut self) -> Result<Expression, ParseError> {
        let selector = self.spanned(Self::inline_expression)?;
        self.cursor.skip_blank();

        let mut arrow = ARROW.chars();
        if self.cursor.current_char() == arrow.next() {
            if self.cursor.peek() != arrow.next() {
                self.cursor.reset_peek(0);
                return Ok(selector);
            }
            self.check_selector(&selector)?;

            self.cursor.skip_to_peek();
            self.cursor.next();
            self.cursor.skip_blank_inline();
            self.cursor.expect_line_end()?;

            let variants = self.variants()?;
            return Ok(Expression::SelectExpression(SelectExpression {
                selector: Box::new(selector),
                variants,
                span: None,
            }));
        }

        let calls_term_attribute =
            matches!(&selector, Expression::CallExpression(call) if is_term_attribute(&call.callee));
        if is_term_attribute(&selector) || calls_term_attribute {
            return Err(self.error(ErrorKind::TermAttributeAsPlaceable));
        }

        Ok(selector)
    }

    fn check_selector(&self, selector: &Expression) -> Result<(), ParseError> {
        let kind = match selector {
            Expression::MessageReference(_) => ErrorKind::MessageReferenceAsSelector,
            Expression::AttributeExpression(attribute)
                if matches!(*attribute.reference, Expression::MessageReference(_)) =>
            {
                ErrorKind::MessageAttributeAsSelector
            }
            Expression::TermReference(_) | Expression::VariantExpression(_) => ErrorKind::TermReferenceAsSelector,
            Expression::CallExpression(call) if matches!(*call.callee, Expression::TermReference(_)) => {
                ErrorKind::TermReferenceAsSelector
            }
            _ => return Ok(()),
        };
        Err(self.error(kind))
    }

    fn inline_expression(&mut self) -> Result<Expression, ParseError> {
        let start = self.cursor.index();

        if self.cursor.current_char() == Some(LBRACE) {
            return self.spanned(Self::placeable).map(Expression::Placeable);
        }

        if self.cursor.is_number_start() {
            return self.spanned(Self::number).map(Expression::NumberLiteral);
        }

        match self.cursor.current_char() {
            Some(QUOTE) => return self.spanned(Self::string).map(Expression::StringLiteral),
            Some(DOLLAR) => {
                self.cursor.next();
                let id = self.spanned(Self::identifier)?;
                return Ok(Expression::VariableReference(VariableReference {
                    id,
                    span: self.span_from(start),
                }));
            }
            Some(DASH) => {
                self.cursor.next();
                let id = self.spanned(Self::identifier)?;
                let term = Expression::TermReference(TermReference {
                    id,
                    span: self.span_from(start),
                });
                return self.term_suffixes(term, start);
            }
            _ => {}
        }

        if !self.cursor.is_identifier_start() {
            return Err(self.error(ErrorKind::ExpectedInlineExpression));
        }

        let id = self.spanned(Self::identifier)?;
        match self.cursor.current_char() {
            Some(LPAREN) => {
                if !is_function_name(&id.name) {
                    return Err(self.error(ErrorKind::ForbiddenCallee));
                }
                let callee = Expression::FunctionReference(FunctionReference {
                    span: id.span,
                    id,
                });
                self.call(callee, start)
            }
            Some(DOT) => {
                self.cursor.next();
                let name = self.spanned(Self::identifier)?;
                Ok(Expression::AttributeExpression(AttributeExpression {
                    reference: Box::new(Expression::MessageReference(MessageReference {
                        span: id.span,
                        id,
                    })),
                    name,
                    span: self.span_from(start),
                }))
            }
            Some(LBRACKET) => Err(self.error(ErrorKind::ForbiddenVariantAccessor)),
            _ => Ok(Expression::MessageReference(MessageReference {
                span: id.span,
                id,
            })),
        }
    }

    /// `.attr` or `[key]` after a term reference, then an optional call.
    fn term_suffixes(&mut self, term: Expression, start: usize) -> Result<Expression, ParseError> {
        let reference = match self.cursor.current_char() {
            Some(DOT) => {
                self.cursor.next();
                let name = self.spanned(Self::identifier)?;
                Expression::AttributeExpression(AttributeExpression {
                    reference: Box::new(term),
                    name,
                    span: self.span_from(start),
                })
            }
            Some(LBRACKET) => {
                self.cursor.next();
                let key = self.variant_key()?;
                self.cursor.expect_char(RBRACKET)?;
                Expression::VariantExpression(VariantExpression {
                    reference: Box::new(term),
                    key,
                    span: self.span_from(start),
                })
            }
            _ => term,
        };

        if self.cursor.current_char() == Some(LPAREN) {
            return self.call(reference, start);
        }
        Ok(reference)
    }

    /// `(arguments)` applied to `callee`. The cursor is on the `(`.
    fn call(&mut self, callee: Expression, start: usize) -> Result<Expression, ParseError> {
        let CallArguments { positional, named } = self.call_arguments()?;
        Ok(Expression::CallExpression(CallExpression {
            callee: Box::new(callee),
            positional,
            named,
            span: self.span_from(start),
        }))
    }

    fn call_arguments(&mut self) -> Result<CallArguments, ParseError> {
        let mut positional = Vec::new();
        let mut named: Vec<NamedArgument> = Vec::new();

        self.cursor.expect_char(LPAREN)?;
        self.cursor.skip_blank();

        while self.cursor.current_char() != Some(RPAREN) {
            match self.spanned(Self::call_argument)? {
                CallArgument::Named(argument) => {
                    if named.iter().any(|seen| seen.name.name == argument.name.name) {
                        return Err(self.error(ErrorKind::DuplicatedNamedArgument(argument.name.name)));
                    }
                    named.push(argument);
                }
                CallArgument::Positional(_) if !named.is_empty() => {
                    return Err(self.error(ErrorKind::PositionalArgumentFollowsNamed));
                }
                CallArgument::Positional(expression) => positional.push(expression),
            }

            self.cursor.skip_blank();
            if self.cursor.current_char() != Some(COMMA) {
                break;
            }
            self.cursor.next();
            self.cursor.skip_blank();
        }

        self.cursor.expect_char(RPAREN)?;
        Ok(CallArguments { positional, named })
    }

    fn call_argument(&mut self) -> Result<CallArgument, ParseError> {
        let expression = self.spanned(Self::inline_expression)?;
        self.cursor.skip_blank();

        if self.cursor.current_char() != Some(COLON) {
            return Ok(CallArgument::Positional(expression));
        }

        let Expression::MessageReference(MessageReference { id, .. }) = expression else {
            return Err(self.error(ErrorKind::ForbiddenKey));
        };

        self.cursor.next();
        self.cursor.skip_blank();
        let value = self.spanned(Self::literal)?;
        Ok(CallArgument::Named(NamedArgument {
            name: id,
            value,
            span: None,
        }))
    }

    // ========================================================================
    // Variants
    // ========================================================================

    fn variants(&mut self) -> Result<Vec<Variant>, ParseError> {
        let mut variants: Vec<Variant> = Vec::new();
        let mut has_default = false;

        self.cursor.skip_blank();
        while self.cursor.is_variant_start() {
            let variant = self.spanned(|parser| parser.variant(has_default))?;
            has_default |= variant.default;
            variants.push(variant);
            self.cursor.expect_line_end()?;
            self.cursor.skip_blank();
        }

        if variants.is_empty() {
            return Err(self.error(ErrorKind::MissingVariants));
        }
        if !has_default {
            return Err(self.error(ErrorKind::MissingDefaultVariant));
        }
        Ok(variants)
    }

    fn variant(&mut self, has_default: bool) -> Result<Variant, ParseError> {
        let mut default = false;
        if self.cursor.current_char() == Some(ASTERISK) {
            if has_default {
                return Err(self.error(ErrorKind::MultipleDefaultVariants));
            }
            self.cursor.next();
            default = true;
        }

        self.cursor.expect_char(LBRACKET)?;
        self.cursor.skip_blank();
        let key = self.variant_key()?;
        self.cursor.skip_blank();
        self.cursor.expect_char(RBRACKET)?;

        let Some(value) = self.maybe_pattern()? else {
            return Err(self.error(ErrorKind::MissingValue));
        };

        Ok(Variant {
            key,
            value,
            default,
            span: None,
        })
    }

    fn variant_key(&mut self) -> Result<VariantKey, ParseError> {
        match self.cursor.current_char() {
            None => Err(self.error(ErrorKind::MissingVariantKey)),
            Some(ch) if ch.is_ascii_digit() || ch == DASH => self.spanned(Self::number).map(VariantKey::NumberLiteral),
            Some(_) => self.spanned(Self::identifier).map(VariantKey::Identifier),
        }
    }
}

fn is_term_attribute(expression: &Expression) -> bool {
    matches!(
        expression,
        Expression::AttributeExpression(attribute) if matches!(*attribute.reference, Expression::TermReference(_))
    )
}
