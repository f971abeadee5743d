/// Literal productions: numbers, strings and their escape sequences.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser`.

impl<'s> Parser<'s> {
    /// A string or number; the only values allowed for named arguments.
    fn literal(&mut self) -> Result<Literal, ParseError> {
        if self.cursor.is_number_start() {
            return self.spanned(Self::number).map(Literal::NumberLiteral);
        }
        if self.cursor.current_char() == Some(QUOTE) {
            return self.spanned(Self::string).map(Literal::StringLiteral);
        }
        Err(self.error(ErrorKind::MissingLiteral))
    }

    /// `-?[0-9]+(\.[0-9]+)?`
    fn number(&mut self) -> Result<NumberLiteral, ParseError> {
        let mut value = String::new();
        if self.cursor.current_char() == Some(DASH) {
            self.cursor.next();
            value.push(DASH);
        }
        self.digits(&mut value)?;

        if self.cursor.current_char() == Some(DOT) {
            self.cursor.next();
            value.push(DOT);
            self.digits(&mut value)?;
        }

        Ok(NumberLiteral::new(value))
    }

    fn digits(&mut self, into: &mut String) -> Result<(), ParseError> {
        let before = into.len();
        while let Some(digit) = self.cursor.take_digit() {
            into.push(digit);
        }
        if into.len() == before {
            return Err(self.error(ErrorKind::ExpectedCharRange("0-9")));
        }
        Ok(())
    }

    /// A quoted string on a single line. Escapes are kept verbatim in `raw` and decoded into `value`.
    fn string(&mut self) -> Result<StringLiteral, ParseError> {
        let mut raw = String::new();
        let mut value = String::new();

        self.cursor.expect_char(QUOTE)?;
        while let Some(ch) = self.cursor.take_char(|ch| ch != QUOTE && ch != EOL) {
            if ch == BACKSLASH {
                let (escaped_raw, decoded) = self.escape_sequence()?;
                raw.push_str(&escaped_raw);
                value.push(decoded);
            } else {
                raw.push(ch);
                value.push(ch);
            }
        }

        if self.cursor.current_char() == Some(EOL) {
            return Err(self.error(ErrorKind::UnterminatedStringExpression));
        }
        self.cursor.expect_char(QUOTE)?;

        Ok(StringLiteral {
            raw,
            value,
            span: None,
        })
    }

    /// Called after a backslash. Returns the escape as written (with its backslash) and the decoded character.
    fn escape_sequence(&mut self) -> Result<(String, char), ParseError> {
        match self.cursor.current_char() {
            Some(ch @ (BACKSLASH | QUOTE)) => {
                self.cursor.next();
                Ok((format!("\\{ch}"), ch))
            }
            Some('u') => self.unicode_escape_sequence('u', 4),
            Some('U') => self.unicode_escape_sequence('U', 6),
            other => Err(self.error(ErrorKind::UnknownEscapeSequence(
                other.map(String::from).unwrap_or_default(),
            ))),
        }
    }

    /// `\uXXXX` or `\UXXXXXX`. Code points that are not Unicode scalar values (surrogates, values above U+10FFFF)
    /// decode to U+FFFD.
    fn unicode_escape_sequence(&mut self, u: char, digits: usize) -> Result<(String, char), ParseError> {
        self.cursor.expect_char(u)?;

        let mut sequence = String::with_capacity(digits);
        for _ in 0..digits {
            match self.cursor.take_hex_digit() {
                Some(digit) => sequence.push(digit),
                None => {
                    let found = self.cursor.current_char().map(String::from).unwrap_or_default();
                    return Err(self.error(ErrorKind::InvalidUnicodeEscapeSequence(format!(
                        "\\{u}{sequence}{found}"
                    ))));
                }
            }
        }

        let decoded = u32::from_str_radix(&sequence, 16)
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Ok((format!("\\{u}{sequence}"), decoded))
    }
}
