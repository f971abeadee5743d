//! CLI module for the `ftl` tool
//!
//! This module provides the command-line interface over the parser and serializer.
//!
//! ## Commands
//!
//! - `parse <file>` - Print the AST of a Fluent file
//! - `fmt <file|dir>` - Rewrite Fluent files in canonical form
//! - `check <file|dir>` - Report entries that fail to parse
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create an error with a custom exit code.
    pub fn with_code(message: impl Into<String>, code: i32) -> Self {
        Self::new(message, ExitCode(code))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Parser, formatter and checker for Fluent localization files
#[derive(Parser, Debug)]
#[command(name = "ftl")]
#[command(version = VERSION)]
#[command(about = "Parse, format and check Fluent (.ftl) files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the syntax tree of a Fluent file
    Parse {
        /// Fluent file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print JSON instead of the debug representation
        #[arg(long)]
        json: bool,

        /// Leave spans out of the tree
        #[arg(long)]
        no_spans: bool,
    },

    /// Rewrite Fluent files in canonical form
    Fmt {
        /// File or directory to format (default: current directory)
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,

        /// Check if files are formatted without modifying them (exit 1 if not)
        #[arg(long)]
        check: bool,

        /// Show diff of changes without modifying files
        #[arg(long)]
        diff: bool,

        /// Format files that contain unparsable entries, copying those entries verbatim
        #[arg(long)]
        keep_junk: bool,
    },

    /// Report every entry that fails to parse (exit 1 if any)
    Check {
        /// File or directory to check (default: current directory)
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Parse { file, json, no_spans } => commands::parse_file(&file, json, !no_spans),
        Command::Fmt {
            path,
            check,
            diff,
            keep_junk,
        } => commands::format_files(&path, check, diff, keep_junk),
        Command::Check { path } => commands::check_files(&path),
    }
}

// ============================================================================
// Tests
// ============================================================================
