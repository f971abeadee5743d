//! Inline snapshot tests for serializer output
//!
//! Review changes: `cargo insta review`

use ftl::ast::Entry;

fn format(source: &str) -> String {
    ftl::serialize(&ftl::parse(source))
}

/// One line per junk entry: `code line:col message`.
fn junk_summary(source: &str) -> String {
    let document = ftl::parse(source);
    document
        .junk()
        .flat_map(|junk| junk.annotations.iter())
        .map(|annotation| {
            let offset = annotation.span.map(|span| span.start).unwrap_or(0);
            let (line, column) = ftl::diagnostics::line_col(source, offset);
            format!("{} {}:{} {}", annotation.code, line, column, annotation.message)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_inline_select_becomes_block() {
    insta::assert_snapshot!(format("key = { $n ->\n [one] One\n *[other] Many\n}\n"), @r"
key =
    { $n ->
        [one] One
       *[other] Many
    }
");
}

#[test]
fn test_attributes_and_multiline_values() {
    insta::assert_snapshot!(format("login = Log in\n  .title = Enter\n    your email\n  .accesskey=L\n"), @r"
login = Log in
    .title =
        Enter
        your email
    .accesskey = L
");
}

#[test]
fn test_call_expressions() {
    insta::assert_snapshot!(format("key = {NUMBER($n,style:\"percent\")} {DATETIME( $d , month : \"long\" )}\n"), @r#"key = { NUMBER($n, style: "percent") } { DATETIME($d, month: "long") }"#);
}

#[test]
fn test_comments_layout() {
    insta::assert_snapshot!(format("### Resource\n## Group\n# Attached\nkey = Value\n# Dangling\n"), @r"
### Resource

## Group

# Attached
key = Value

# Dangling
");
}

#[test]
fn test_junk_annotations() {
    insta::assert_snapshot!(junk_summary("ok = Fine\nbroken =\nkey = { $n ->\n  [one] One\n}\nlower = { lower() }\n"), @r#"
E0005 2:9 Expected message "broken" to have a value or attributes
E0010 5:1 Expected one of the variants to be marked as default (*)
E0008 6:16 The callee has to be an upper-case identifier or a term
"#);
}

#[test]
fn test_serialize_entry_and_expression() {
    let Entry::Term(term) = ftl::parse_entry("-brand = { $case ->\n *[nom] Firefox\n [gen] Firefoksa\n}\n") else {
        panic!("expected a term");
    };
    insta::assert_snapshot!(ftl::serialize_entry(&Entry::Term(term)), @r"
-brand =
    { $case ->
       *[nom] Firefox
        [gen] Firefoksa
    }
");
}
