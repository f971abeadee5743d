//! Layering guardrails for the workspace crates.
//!
//! - `ftl_core` is a vocabulary crate and must keep an empty `[dependencies]` table.
//! - `ftl_syntax` must not pull in CLI or logging-backend crates; those belong to the `ftl` binary.

/// Crate names listed in the `[dependencies]` table of `manifest`.
fn main_dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            if line == "[dependencies]" {
                in_dependencies = true;
                continue;
            }
            // Any new section after `[dependencies]` ends the scan window.
            if in_dependencies {
                break;
            }
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }

    names
}

#[test]
fn core_has_no_dependencies() {
    let deps = main_dependencies(include_str!("../crates/ftl_core/Cargo.toml"));
    assert!(deps.is_empty(), "`ftl_core` must stay dependency-free, found {:?}", deps);
}

#[test]
fn syntax_does_not_depend_on_cli_stack() {
    let deps = main_dependencies(include_str!("../crates/ftl_syntax/Cargo.toml"));
    for forbidden in ["ftl", "clap", "tracing-subscriber", "serde_json"] {
        assert!(
            !deps.iter().any(|dep| dep == forbidden),
            "`{}` must not appear in ftl_syntax [dependencies]",
            forbidden
        );
    }
    assert!(deps.iter().any(|dep| dep == "ftl_core"));
}

#[test]
fn root_depends_on_both_library_crates() {
    let deps = main_dependencies(include_str!("../Cargo.toml"));
    assert!(deps.iter().any(|dep| dep == "ftl_core"));
    assert!(deps.iter().any(|dep| dep == "ftl_syntax"));
}
