use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use ftl_core::lang::errors;
use ftl_core::lang::punctuation;

/// Guardrail against reintroducing stringly-typed vocabulary checks.
///
/// This is a **coarse** safety net. It looks for patterns like `== "E0005"` or `"E0005" => ...` in Rust sources
/// where callers should go through `ftl_core::lang` registries (`ErrorCode`, `PunctuationId`) instead.
///
/// Notes:
/// - Occurrences in `crates/ftl_core/src/lang/**` (the registries themselves) and in tests are allowed.
#[test]
fn no_new_stringly_vocab_checks_in_rust_sources() {
    let root = repo_root();
    let spellings = vocab_spellings();
    let mut offenders: Vec<(PathBuf, usize, String)> = Vec::new();

    let targets = [root.join("src"), root.join("crates")];
    for dir in targets {
        if dir.exists() {
            scan_dir(&root, &dir, &spellings, &mut offenders);
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::new();
        msg.push_str("Found potential stringly-typed vocabulary checks. Prefer ftl_core registries.\n\n");
        for (path, line_no, line) in offenders.into_iter().take(80) {
            msg.push_str(&format!(
                "- {}:{}: {}\n",
                path.strip_prefix(&root).unwrap_or(&path).display(),
                line_no,
                line.trim()
            ));
        }
        panic!("{msg}");
    }
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn vocab_spellings() -> Vec<&'static str> {
    // Error codes, plus multi-character punctuation (single characters are compared as `char`s).
    let mut set: BTreeSet<&'static str> = BTreeSet::new();

    for info in errors::ERROR_CODES {
        set.insert(info.canonical);
        for &alias in info.aliases {
            set.insert(alias);
        }
    }

    for info in punctuation::PUNCTUATION {
        if info.canonical.chars().count() > 1 {
            set.insert(info.canonical);
        }
    }

    set.into_iter().collect()
}

fn is_allowed_file(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
    if !rel.ends_with(".rs") {
        return true;
    }
    // Registries define the spellings; allow them.
    if rel.starts_with("crates/ftl_core/src/lang/") {
        return true;
    }
    // Tests can mention spellings directly.
    if rel.starts_with("tests/") || rel.contains("/tests/") || rel.ends_with("/tests.rs") {
        return true;
    }
    false
}

fn scan_dir(root: &Path, dir: &Path, spellings: &[&'static str], offenders: &mut Vec<(PathBuf, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            scan_dir(root, &path, spellings, offenders);
            continue;
        }
        if is_allowed_file(root, &path) {
            continue;
        }
        let Ok(contents) = fs::read_to_string(&path) else {
            continue;
        };
        for (idx, line) in contents.lines().enumerate() {
            if is_suspicious_line(line, spellings) {
                offenders.push((path.clone(), idx + 1, line.to_string()));
            }
        }
    }
}

fn is_suspicious_line(line: &str, spellings: &[&'static str]) -> bool {
    // Avoid false positives in comments/docstrings.
    let trimmed = line.trim_start();
    if trimmed.starts_with("//") {
        return false;
    }

    // Only flag explicit equality checks or match arms for known vocabulary spellings:
    // - `... == "Spelling"`
    // - `"Spelling" => ...`
    for s in spellings {
        let eq = format!("== \"{s}\"");
        let arm = format!("\"{s}\" =>");
        if line.contains(&eq) || line.contains(&arm) {
            return true;
        }
    }

    false
}

#[test]
fn suspicious_line_detection() {
    let spellings = ["E0005", "->"];
    assert!(is_suspicious_line(r#"if code == "E0005" {"#, &spellings));
    assert!(is_suspicious_line(r#"    "->" => select(),"#, &spellings));
    assert!(!is_suspicious_line(r#"// matches "E0005" => ..."#, &spellings));
    assert!(!is_suspicious_line(r#"let code = ErrorCode::E0005;"#, &spellings));
}
