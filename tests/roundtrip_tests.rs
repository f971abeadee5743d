//! Round-trip tests over fixture files
//!
//! Every file under `tests/fixtures/canonical` is already in canonical form, so parsing and serializing it must
//! reproduce it byte for byte. Files under `tests/fixtures/messy` are compared against their `.expected.ftl`
//! neighbour instead.

use std::fs;
use std::path::{Path, PathBuf};

use ftl::ast::Entry;

fn fixtures(dir: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(Path::new("tests/fixtures").join(dir))
        .unwrap_or_else(|e| panic!("Failed to read fixtures dir {}: {}", dir, e))
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "ftl"))
        .collect();
    files.sort();
    files
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|_| panic!("Failed to read fixture: {}", path.display()))
}

#[test]
fn test_canonical_fixtures_round_trip() {
    let files = fixtures("canonical");
    assert!(!files.is_empty(), "no canonical fixtures found");

    for path in files {
        let source = read(&path);
        let document = ftl::parse(&source);

        let junk: Vec<_> = document.junk().collect();
        assert!(junk.is_empty(), "{} produced junk: {:?}", path.display(), junk);
        assert_eq!(ftl::serialize(&document), source, "{} did not round trip", path.display());
    }
}

#[test]
fn test_canonical_fixtures_are_formatted() {
    for path in fixtures("canonical") {
        let source = read(&path);
        assert_eq!(ftl::check_formatted(&source), Ok(true), "{}", path.display());
        assert_eq!(ftl::format_diff(&source), Ok(None), "{}", path.display());
    }
}

#[test]
fn test_round_trip_without_spans() {
    for path in fixtures("canonical") {
        let source = read(&path);
        let document = ftl::parse_with_options(&source, ftl::ParseOptions::new().with_spans(false));
        assert_eq!(document.span, None);
        assert_eq!(ftl::serialize(&document), source, "{}", path.display());
    }
}

#[test]
fn test_messy_fixtures_normalize() {
    let inputs: Vec<PathBuf> = fixtures("messy")
        .into_iter()
        .filter(|path| !path.to_string_lossy().ends_with(".expected.ftl"))
        .collect();
    assert!(!inputs.is_empty(), "no messy fixtures found");

    for input in inputs {
        let expected_path = input.with_extension("expected.ftl");
        let formatted = ftl::format_source(&read(&input)).expect("messy fixture should parse cleanly");
        let expected = read(&expected_path);

        assert_eq!(formatted, expected, "{} did not normalize", input.display());
        // Normal form is a fixed point
        assert_eq!(ftl::format_source(&formatted), Ok(formatted.clone()));
    }
}

#[test]
fn test_serialized_output_parses_to_same_tree() {
    for path in fixtures("messy") {
        let options = ftl::ParseOptions::new().with_spans(false);
        let first = ftl::parse_with_options(&read(&path), options);
        let second = ftl::parse_with_options(&ftl::serialize(&first), options);
        assert_eq!(first, second, "{}", path.display());
    }
}

#[test]
fn test_fixture_entry_counts() {
    let document = ftl::parse(&read(Path::new("tests/fixtures/canonical/basic.ftl")));
    assert_eq!(document.messages().count(), 6);
    assert_eq!(document.terms().count(), 1);

    let comments = document.body.iter().filter(|entry| matches!(entry, Entry::Comment(_))).count();
    assert_eq!(comments, 2, "resource and group comments stay standalone");

    let download = document.message("download").expect("download message");
    assert_eq!(
        download.comment.as_ref().map(|c| c.content.as_str()),
        Some("Shown next to the download button.")
    );
}
