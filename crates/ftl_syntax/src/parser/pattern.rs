/// Pattern productions and indentation handling.
///
/// Patterns are collected as a flat token list first, with the whitespace between lines kept as `Indent` tokens.
/// Once the whole pattern is known, `dedent` strips the indentation common to all continuation lines and folds the
/// remaining whitespace into the surrounding text.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser`.

/// Pattern element before dedenting.
enum PatternToken {
    Text(TextElement),
    Placeable(Placeable),
    /// Line ends plus the indentation of the line that follows them.
    Indent { value: String, span: Span },
}

impl<'s> Parser<'s> {
    /// Parse a pattern if one follows: inline after the `=`, or as a block on the following indented lines.
    fn maybe_pattern(&mut self) -> Result<Option<Pattern>, ParseError> {
        self.cursor.peek_blank_inline();
        if self.cursor.is_value_start() {
            self.cursor.skip_to_peek();
            return self.spanned(|parser| parser.pattern(false)).map(Some);
        }

        self.cursor.peek_blank_block();
        if self.cursor.is_value_continuation() {
            self.cursor.skip_to_peek();
            return self.spanned(|parser| parser.pattern(true)).map(Some);
        }

        self.cursor.reset_peek(0);
        Ok(None)
    }

    fn pattern(&mut self, is_block: bool) -> Result<Pattern, ParseError> {
        let mut tokens = Vec::new();

        let mut common_indent = if is_block {
            let blank_start = self.cursor.index();
            let first_indent = self.cursor.skip_blank_inline();
            tokens.push(self.indent(first_indent.to_string(), blank_start));
            first_indent.len()
        } else {
            usize::MAX
        };

        while let Some(ch) = self.cursor.current_char() {
            match ch {
                EOL => {
                    let blank_start = self.cursor.index();
                    let blank_lines = self.cursor.peek_blank_block();
                    if !self.cursor.is_value_continuation() {
                        self.cursor.reset_peek(0);
                        break;
                    }
                    self.cursor.skip_to_peek();
                    let indent = self.cursor.skip_blank_inline();
                    common_indent = common_indent.min(indent.len());
                    tokens.push(self.indent(blank_lines + indent, blank_start));
                }
                LBRACE => tokens.push(PatternToken::Placeable(self.spanned(Self::placeable)?)),
                RBRACE => return Err(self.error(ErrorKind::UnbalancedClosingBrace)),
                _ => tokens.push(PatternToken::Text(self.spanned(Self::text_element)?)),
            }
        }

        Ok(Pattern::new(self.dedent(tokens, common_indent)))
    }

    fn indent(&self, value: String, start: usize) -> PatternToken {
        PatternToken::Indent {
            value,
            span: Span::new(start, self.cursor.index()),
        }
    }

    /// Text up to the next `{`, `}` or line end.
    fn text_element(&mut self) -> Result<TextElement, ParseError> {
        let mut value = String::new();
        while let Some(ch) = self.cursor.current_char() {
            if matches!(ch, LBRACE | RBRACE | EOL) {
                break;
            }
            value.push(ch);
            self.cursor.next();
        }
        Ok(TextElement::new(value))
    }

    /// Strip `common_indent` spaces from every indent, then merge text runs.
    ///
    /// An indent token is its line ends followed by the next line's indentation, so stripping removes trailing
    /// spaces and keeps the line ends. Trailing whitespace of the final text element is trimmed.
    fn dedent(&self, tokens: Vec<PatternToken>, common_indent: usize) -> Vec<PatternElement> {
        let mut trimmed: Vec<PatternElement> = Vec::with_capacity(tokens.len());

        for token in tokens {
            let element = match token {
                PatternToken::Placeable(placeable) => {
                    trimmed.push(PatternElement::Placeable(placeable));
                    continue;
                }
                PatternToken::Text(text) => text,
                PatternToken::Indent { mut value, span } => {
                    value.truncate(value.len().saturating_sub(common_indent));
                    if value.is_empty() {
                        continue;
                    }
                    TextElement {
                        value,
                        span: self.options.with_spans.then_some(span),
                    }
                }
            };

            if let Some(PatternElement::TextElement(prev)) = trimmed.last_mut() {
                prev.value.push_str(&element.value);
                prev.span = match (prev.span, element.span) {
                    (Some(prev_span), Some(span)) => Some(Span::new(prev_span.start, span.end)),
                    _ => None,
                };
                continue;
            }

            trimmed.push(PatternElement::TextElement(element));
        }

        if let Some(PatternElement::TextElement(last)) = trimmed.last_mut() {
            let kept = last.value.trim_end_matches([' ', '\t', '\n', '\r']).len();
            last.value.truncate(kept);
            if last.value.is_empty() {
                trimmed.pop();
            }
        }

        trimmed
    }
}
