/// Parse Fluent source into a [`Document`], with spans.
///
/// This is the main public entrypoint for parsing. It never fails: malformed entries are returned as
/// [`Entry::Junk`] with an annotation describing the error.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Document {
    parse_with_options(source, ParseOptions::default())
}

/// Parse Fluent source into a [`Document`] with custom options.
pub fn parse_with_options(source: &str, options: ParseOptions) -> Document {
    let document = Parser::new(source, options).parse();
    tracing::trace!(
        entry_count = document.body.len(),
        junk_count = document.junk().count(),
        "parsed document"
    );
    document
}

/// Parse the first message or term of `source`, skipping (or attaching) leading comments.
///
/// Useful for editors that validate a single translation at a time.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_entry(source: &str) -> Entry {
    Parser::new(source, ParseOptions::default()).parse_entry()
}

/// [`parse_entry`] with custom options.
pub fn parse_entry_with_options(source: &str, options: ParseOptions) -> Entry {
    Parser::new(source, options).parse_entry()
}
