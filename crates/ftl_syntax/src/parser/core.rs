/// Parser core types and entrypoints.
///
/// This chunk defines [`ParseOptions`], the [`Parser`] type, its document and single-entry loops, and the span
/// helpers shared by every production.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Attach byte-offset spans to every node.
    pub with_spans: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { with_spans: true }
    }
}

impl ParseOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable span tracking
    pub fn with_spans(mut self, with_spans: bool) -> Self {
        self.with_spans = with_spans;
        self
    }
}

/// Parser state.
///
/// ## Notes
/// - Productions return `Result<_, ParseError>`; errors are caught once per top-level entry in
///   [`Parser::entry_or_junk`] and never escape the parser.
/// - Most productions are implemented on `Parser` but split across multiple files.
pub struct Parser<'s> {
    cursor: Cursor<'s>,
    options: ParseOptions,
}

impl<'s> Parser<'s> {
    pub fn new(source: &'s str, options: ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            options,
        }
    }

    /// Parse the whole source into a [`Document`].
    ///
    /// A `#` comment directly followed (no blank line) by a message or term is attached to it. Otherwise comments,
    /// including group and resource comments, stay standalone entries.
    pub fn parse(mut self) -> Document {
        self.cursor.skip_blank_block();

        let mut body = Vec::new();
        let mut last_comment: Option<Comment> = None;

        while self.cursor.current_char().is_some() {
            let entry = self.entry_or_junk();
            let blank_lines = self.cursor.skip_blank_block();

            let entry = match entry {
                Entry::Comment(comment)
                    if comment.level == CommentLevel::Comment
                        && blank_lines.is_empty()
                        && self.cursor.current_char().is_some() =>
                {
                    last_comment = Some(comment);
                    continue;
                }
                entry => entry,
            };

            let entry = match last_comment.take() {
                Some(comment) => match Self::attach_comment(entry, comment) {
                    Ok(entry) => entry,
                    Err((entry, comment)) => {
                        body.push(Entry::Comment(comment));
                        entry
                    }
                },
                None => entry,
            };
            body.push(entry);
        }

        let span = self.span_from(0);
        Document { body, span }
    }

    /// Parse the first message or term, skipping leading comments.
    ///
    /// A `#` comment immediately preceding the entry is attached to it. Junk is returned as soon as a comment or the
    /// entry fails to parse.
    pub fn parse_entry(mut self) -> Entry {
        self.cursor.skip_blank_block();

        let mut last_comment: Option<Comment> = None;
        while self.cursor.current_char() == Some(HASH) {
            match self.entry_or_junk() {
                Entry::Junk(junk) => return Entry::Junk(junk),
                Entry::Comment(comment) => {
                    let blank_lines = self.cursor.skip_blank_block();
                    last_comment =
                        (comment.level == CommentLevel::Comment && blank_lines.is_empty()).then_some(comment);
                }
                _ => {
                    self.cursor.skip_blank_block();
                    last_comment = None;
                }
            }
        }

        let entry = self.entry_or_junk();
        match last_comment {
            Some(comment) => Self::attach_comment(entry, comment).unwrap_or_else(|(entry, _)| entry),
            None => entry,
        }
    }

    /// Attach `comment` to a message or term, widening its span to start at the comment.
    fn attach_comment(entry: Entry, comment: Comment) -> Result<Entry, (Entry, Comment)> {
        fn widen(span: &mut Option<Span>, comment: &Comment) {
            if let (Some(span), Some(comment_span)) = (span.as_mut(), comment.span) {
                span.start = comment_span.start;
            }
        }

        match entry {
            Entry::Message(mut message) => {
                widen(&mut message.span, &comment);
                message.comment = Some(comment);
                Ok(Entry::Message(message))
            }
            Entry::Term(mut term) => {
                widen(&mut term.span, &comment);
                term.comment = Some(comment);
                Ok(Entry::Term(term))
            }
            other => Err((other, comment)),
        }
    }

    // ========================================================================
    // Spans
    // ========================================================================

    /// Run `production` and give its node the span of the text it consumed, unless it already has one.
    fn spanned<T: SyntaxNode>(
        &mut self,
        production: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let start = self.cursor.index();
        let mut node = production(self)?;
        if self.options.with_spans && node.span().is_none() {
            *node.span_mut() = Some(Span::new(start, self.cursor.index()));
        }
        Ok(node)
    }

    /// Span from `start` to the cursor, if spans are enabled.
    fn span_from(&self, start: usize) -> Option<Span> {
        self.options.with_spans.then(|| Span::new(start, self.cursor.index()))
    }

    fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.cursor.index())
    }
}
