//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Path, PathBuf};

use ftl_syntax::ast::Document;
use ftl_syntax::diagnostics::{self, JunkReport};
use ftl_syntax::parser::{self, ParseOptions};

use crate::format::{FormatConfig, FormatError, format_document, line_diff};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (10 MiB)
///
/// Files larger than this are rejected before they are read.
const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

/// File extension of Fluent resources.
const FTL_EXTENSION: &str = "ftl";

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (10 MiB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    // Check file size before reading
    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path.display(), e)))
}

// ============================================================================
// parse
// ============================================================================

/// Print the syntax tree of a file.
pub fn parse_file(file_path: &Path, json: bool, with_spans: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let document = parser::parse_with_options(&source, ParseOptions::new().with_spans(with_spans));

    if json {
        println!("{}", to_json(&document)?);
    } else {
        println!("{:#?}", document);
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(feature = "serde")]
fn to_json(document: &Document) -> CliResult<String> {
    serde_json::to_string_pretty(document).map_err(|e| CliError::failure(format!("Error serializing AST: {}", e)))
}

#[cfg(not(feature = "serde"))]
fn to_json(_document: &Document) -> CliResult<String> {
    Err(CliError::failure("JSON output requires the `serde` feature"))
}

// ============================================================================
// fmt
// ============================================================================

/// Format Fluent files (single file or directory)
pub fn format_files(path: &Path, check_mode: bool, diff_mode: bool, keep_junk: bool) -> CliResult<ExitCode> {
    let files = collect_ftl_files(path);

    if files.is_empty() {
        return Err(CliError::failure("No .ftl files found"));
    }

    let config = FormatConfig::new().with_junk(keep_junk);
    let mut needs_formatting = false;
    let mut formatted_count = 0;
    let mut error_count = 0;

    for file_path in &files {
        let source = match read_source(file_path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{}", e);
                error_count += 1;
                continue;
            }
        };

        let document = parser::parse(&source);
        match format_document(&document, config.clone()) {
            Ok(formatted) => {
                let changed = source != formatted;

                if diff_mode && changed {
                    println!("--- {}", file_path.display());
                    if let Some(diff) = line_diff(&source, &formatted) {
                        print!("{}", diff);
                    }
                    println!();
                }

                if check_mode {
                    if changed {
                        println!("Would reformat: {}", file_path.display());
                        needs_formatting = true;
                    }
                } else if diff_mode {
                    if changed {
                        needs_formatting = true;
                    }
                } else if changed {
                    if let Err(e) = fs::write(file_path, &formatted) {
                        eprintln!("Error writing {}: {}", file_path.display(), e);
                        error_count += 1;
                    } else {
                        println!("Formatted: {}", file_path.display());
                        formatted_count += 1;
                    }
                }
            }
            Err(e @ FormatError::ContainsJunk { .. }) => {
                let (line, column) = first_junk_position(&source, &document);
                tracing::warn!(
                    file = %file_path.display(),
                    line,
                    column,
                    "skipping file: {e} (use --keep-junk to format it anyway)"
                );
                error_count += 1;
            }
        }
    }

    if check_mode || diff_mode {
        if needs_formatting {
            let msg = if diff_mode {
                "need formatting"
            } else {
                "would be reformatted"
            };
            return Err(CliError::failure(format!("\n{} file(s) {}", files.len(), msg)));
        } else {
            println!("✓ {} file(s) already formatted", files.len());
        }
    } else {
        println!("\n✓ {} file(s) formatted, {} error(s)", formatted_count, error_count);
    }

    if error_count > 0 {
        return Err(CliError::new("", ExitCode::FAILURE));
    }

    Ok(ExitCode::SUCCESS)
}

/// 1-based line and column of the first junk entry, or `(1, 1)` if there is none.
fn first_junk_position(source: &str, document: &Document) -> (usize, usize) {
    let offset = document
        .junk()
        .next()
        .and_then(|junk| junk.span)
        .map(|span| span.start)
        .unwrap_or(0);
    diagnostics::line_col(source, offset)
}

// ============================================================================
// check
// ============================================================================

/// Report every junk annotation in a file or directory.
pub fn check_files(path: &Path) -> CliResult<ExitCode> {
    let files = collect_ftl_files(path);

    if files.is_empty() {
        return Err(CliError::failure("No .ftl files found"));
    }

    let mut problem_count = 0;
    let mut error_count = 0;

    for file_path in &files {
        let source = match read_source(file_path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{}", e);
                error_count += 1;
                continue;
            }
        };

        let reports = check_source(&file_path.to_string_lossy(), &source);
        problem_count += reports.len();
        for report in reports {
            eprintln!("{:?}", miette::Report::new(report));
        }
    }

    if problem_count > 0 || error_count > 0 {
        return Err(CliError::failure(format!(
            "\n{} problem(s) in {} file(s), {} error(s)",
            problem_count,
            files.len(),
            error_count
        )));
    }

    println!("✓ {} file(s) parsed cleanly", files.len());
    Ok(ExitCode::SUCCESS)
}

/// Parse `source` and package each junk annotation for rendering.
pub fn check_source(file_name: &str, source: &str) -> Vec<JunkReport> {
    let document = parser::parse(source);
    diagnostics::junk_reports(file_name, source, &document)
}

// ============================================================================
// File discovery
// ============================================================================

/// Collect `.ftl` files under `path`, skipping hidden directories and `target`.
pub fn collect_ftl_files(path: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if path.is_file() {
        if path.extension().is_some_and(|ext| ext == FTL_EXTENSION) {
            files.push(path.to_path_buf());
        }
    } else if path.is_dir() {
        match fs::read_dir(path) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let entry_path = entry.path();
                    if entry_path.is_dir() {
                        let name = entry_path.file_name().and_then(|n| n.to_str()).unwrap_or("");
                        if !name.starts_with('.') && name != "target" {
                            files.extend(collect_ftl_files(&entry_path));
                        }
                    } else if entry_path.extension().is_some_and(|ext| ext == FTL_EXTENSION) {
                        files.push(entry_path);
                    }
                }
            }
            Err(e) => tracing::warn!(path = %path.display(), "cannot read directory: {e}"),
        }
    }

    files.sort();
    files
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ftl_core::ErrorCode;

    #[test]
    fn test_check_source_clean() {
        assert!(check_source("app.ftl", "hello = Hi\n").is_empty());
    }

    #[test]
    fn test_check_source_reports_each_junk() {
        let reports = check_source("app.ftl", "a =\nb = { $x\nc = C\n");
        let codes: Vec<_> = reports.iter().map(|r| r.code()).collect();
        assert_eq!(codes, vec![ErrorCode::E0005, ErrorCode::E0003]);
    }

    #[test]
    fn test_first_junk_position() {
        let source = "ok = Fine\n\nbroken =\n";
        assert_eq!(first_junk_position(source, &parser::parse(source)), (3, 1));
        assert_eq!(first_junk_position("ok = Fine\n", &parser::parse("ok = Fine\n")), (1, 1));
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("definitely/not/here.ftl")).unwrap_err();
        assert!(err.message.starts_with("Cannot access file"));
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_collect_ftl_files_ignores_other_extensions() {
        assert!(collect_ftl_files(Path::new("Cargo.toml")).is_empty());
        assert!(collect_ftl_files(Path::new("no-such-dir")).is_empty());
    }
}
