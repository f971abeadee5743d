/// Entry productions: junk recovery, comments, messages, terms and attributes.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser`.
impl<'s> Parser<'s> {
    /// Parse one entry followed by a line end, or recover the failed text as [`Junk`].
    fn entry_or_junk(&mut self) -> Entry {
        let entry_start = self.cursor.index();
        let error = match self.entry().and_then(|entry| self.cursor.expect_line_end().map(|()| entry)) {
            Ok(entry) => return entry,
            Err(error) => error,
        };

        self.cursor.skip_to_next_entry_start(entry_start);
        let next_entry_start = self.cursor.index();
        let error_index = error.position.min(next_entry_start);

        let annotation_span = self.options.with_spans.then(|| Span::new(error_index, error_index));
        tracing::debug!(
            code = %error.code(),
            start = entry_start,
            end = next_entry_start,
            "recovered entry as junk"
        );

        Entry::Junk(Junk {
            content: self.cursor.slice(entry_start, next_entry_start).to_string(),
            annotations: vec![error.into_annotation(annotation_span)],
            span: self.options.with_spans.then(|| Span::new(entry_start, next_entry_start)),
        })
    }

    fn entry(&mut self) -> Result<Entry, ParseError> {
        match self.cursor.current_char() {
            Some(HASH) => self.spanned(Self::comment).map(Entry::Comment),
            Some(DASH) => self.spanned(Self::term).map(Entry::Term),
            _ if self.cursor.is_identifier_start() => self.spanned(Self::message).map(Entry::Message),
            _ => Err(self.error(ErrorKind::ExpectedEntry)),
        }
    }

    fn comment(&mut self) -> Result<Comment, ParseError> {
        let mut level: Option<usize> = None;
        let mut content = String::new();

        loop {
            // The first line decides the level (up to three `#`); later lines were already checked by
            // `is_next_line_comment` to carry the same number.
            let max_hashes = level.map_or(3, |level| level + 1);
            let mut hashes = 0;
            while hashes < max_hashes && self.cursor.current_char() == Some(HASH) {
                self.cursor.next();
                hashes += 1;
            }
            let depth = *level.get_or_insert(hashes - 1);

            if !matches!(self.cursor.current_char(), Some(EOL) | None) {
                self.cursor.expect_char(' ')?;
                while let Some(ch) = self.cursor.take_char(|ch| ch != EOL) {
                    content.push(ch);
                }
            }

            if self.cursor.is_next_line_comment(depth) {
                content.push(EOL);
                self.cursor.next();
            } else {
                break;
            }
        }

        Ok(Comment {
            level: CommentLevel::from_depth(level.unwrap_or_default()),
            content,
            span: None,
        })
    }

    fn message(&mut self) -> Result<Message, ParseError> {
        let id = self.spanned(Self::identifier)?;
        self.cursor.skip_blank_inline();
        self.cursor.expect_char(EQUALS)?;

        let value = self.maybe_pattern()?;
        let attributes = self.attributes()?;

        if value.is_none() && attributes.is_empty() {
            return Err(self.error(ErrorKind::ExpectedMessageField(id.name)));
        }

        Ok(Message::new(id, value, attributes))
    }

    fn term(&mut self) -> Result<Term, ParseError> {
        self.cursor.expect_char(DASH)?;
        let id = self.spanned(Self::identifier)?;
        self.cursor.skip_blank_inline();
        self.cursor.expect_char(EQUALS)?;

        let Some(value) = self.maybe_pattern()? else {
            return Err(self.error(ErrorKind::ExpectedTermField(id.name)));
        };
        let attributes = self.attributes()?;

        Ok(Term::new(id, value, attributes))
    }

    fn attribute(&mut self) -> Result<Attribute, ParseError> {
        self.cursor.expect_char(DOT)?;
        let id = self.spanned(Self::identifier)?;
        self.cursor.skip_blank_inline();
        self.cursor.expect_char(EQUALS)?;

        match self.maybe_pattern()? {
            Some(value) => Ok(Attribute::new(id, value)),
            None => Err(self.error(ErrorKind::MissingValue)),
        }
    }

    fn attributes(&mut self) -> Result<Vec<Attribute>, ParseError> {
        let mut attributes = Vec::new();
        self.cursor.peek_blank();
        while self.cursor.is_attribute_start() {
            self.cursor.skip_to_peek();
            attributes.push(self.spanned(Self::attribute)?);
            self.cursor.peek_blank();
        }
        self.cursor.reset_peek(0);
        Ok(attributes)
    }

    fn identifier(&mut self) -> Result<Identifier, ParseError> {
        let mut name = String::new();
        name.push(self.cursor.take_id_start()?);
        while let Some(ch) = self.cursor.take_id_char() {
            name.push(ch);
        }
        Ok(Identifier::new(name))
    }
}
