//! Cursor and parser properties that hold for any input, plus a few outline snapshots.

use ftl_syntax::ast::{Document, Entry, Expression, PatternElement};
use ftl_syntax::cursor::Cursor;
use ftl_syntax::{ParseOptions, parse_with_options};
use proptest::prelude::*;

/// Compact one-line-per-entry outline of a document.
fn outline(document: &Document) -> String {
    let mut lines = Vec::new();
    for entry in &document.body {
        let line = match entry {
            Entry::Message(message) => {
                let elements = message.value.as_ref().map(|v| elements(&v.elements)).unwrap_or_default();
                let attributes: Vec<_> = message.attributes.iter().map(|a| a.id.name.as_str()).collect();
                format!("message {} [{}] attrs={:?}", message.id.name, elements, attributes)
            }
            Entry::Term(term) => format!("term -{} [{}]", term.id.name, elements(&term.value.elements)),
            Entry::Comment(comment) => format!("comment {:?} {:?}", comment.level, comment.content),
            Entry::Junk(junk) => format!("junk {} {:?}", junk.annotations[0].code, junk.content),
        };
        lines.push(line);
    }
    lines.join("\n")
}

fn elements(elements: &[PatternElement]) -> String {
    elements
        .iter()
        .map(|element| match element {
            PatternElement::TextElement(text) => format!("{:?}", text.value),
            PatternElement::Placeable(placeable) => match placeable.expression.as_ref() {
                Expression::SelectExpression(select) => format!("select({})", select.variants.len()),
                Expression::VariableReference(variable) => format!("${}", variable.id.name),
                _ => "placeable".to_string(),
            },
        })
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Snapshots
// ============================================================================

#[test]
fn test_outline_mixed_document() {
    let document = ftl_syntax::parse(
        "### Resource\n\n# Note\nhello = Hi { $name }\n    .title = T\n-brand = B\nbad = {\nkey =\n    { $n ->\n       *[x] X\n    }\n",
    );
    insta::assert_snapshot!(outline(&document), @r#"
comment Resource "Resource"
message hello ["Hi ", $name] attrs=["title"]
term -brand ["B"]
junk E0003 "bad = {\n"
message key [select(1)] attrs=[]
"#);
}

#[test]
fn test_outline_multiline_text() {
    let document = ftl_syntax::parse("poem =\n    one\n      two\n\n    three\n");
    insta::assert_snapshot!(outline(&document), @r#"message poem ["one\n  two\n\nthree"] attrs=[]"#);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: stepping the cursor visits every logical character once and ends at the source length
    #[test]
    fn cursor_walks_whole_source(source in "[a-z \n\r{}é★]{0,40}") {
        let mut cursor = Cursor::new(&source);
        let mut steps = 0;
        while cursor.current_char().is_some() {
            let before = cursor.index();
            cursor.next();
            prop_assert!(cursor.index() > before);
            steps += 1;
        }
        prop_assert_eq!(cursor.index(), source.len());
        prop_assert_eq!(steps, source.chars().count() - source.matches("\r\n").count());
    }

    /// Property: CRLF and LF line ends produce the same entries and error codes
    #[test]
    fn crlf_parses_like_lf(source in "[a-z#=\\-{}\\[\\]*.$ \n]{0,60}") {
        let options = ParseOptions::new().with_spans(false);
        let lf = parse_with_options(&source, options);
        let crlf = parse_with_options(&source.replace('\n', "\r\n"), options);

        let kinds = |document: &Document| -> Vec<String> {
            document
                .body
                .iter()
                .map(|entry| match entry {
                    Entry::Junk(junk) => format!("junk {}", junk.annotations[0].code),
                    Entry::Message(message) => format!("message {}", message.id.name),
                    Entry::Term(term) => format!("term {}", term.id.name),
                    Entry::Comment(comment) => format!("comment {:?}", comment.content),
                })
                .collect()
        };
        prop_assert_eq!(kinds(&lf), kinds(&crlf));
    }
}
