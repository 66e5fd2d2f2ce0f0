//! Command handlers for the `lox` CLI.
//!
//! Each submodule implements one command (`lex`, `check`, `explain`).
//! Handlers return a process exit status instead of exiting, so `main` is
//! the only place that calls `std::process::exit`. Shared utilities like
//! `read_file` live here in the module root.

use lox_diagnostic::emitter::ColorMode;
use lox_diagnostic::queue::DiagnosticConfig;

mod check;
mod explain;
mod lex;

pub use check::{check_file, check_source};
pub use explain::{explain_error, lookup_docs, ExplainError};
pub use lex::{format_token, lex_file, lex_source, write_tokens};

/// Exit status for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status for usage and I/O failures.
pub const EXIT_FAILURE: i32 = 1;
/// Exit status for source with lexical errors (sysexits `EX_DATAERR`).
pub const EXIT_DATA_ERR: i32 = 65;

/// Failure to load a source file.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },
    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Read a source file, mapping I/O failures to a user-facing [`ReadError`].
pub fn read_file(path: &str) -> Result<String, ReadError> {
    std::fs::read_to_string(path).map_err(|e| {
        let path = path.to_string();
        match e.kind() {
            std::io::ErrorKind::NotFound => ReadError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => ReadError::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => ReadError::InvalidUtf8 { path },
            _ => ReadError::Io { path, source: e },
        }
    })
}

/// Options for `lox check`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckOptions {
    pub color: ColorMode,
    pub diagnostics: DiagnosticConfig,
}

/// A command-line flag that could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    #[error("invalid --color value '{0}' (expected auto, always, or never)")]
    Color(String),
    #[error("invalid --error-limit value '{0}' (expected a non-negative integer)")]
    ErrorLimit(String),
    #[error("unknown option '{0}'")]
    Unknown(String),
}

/// Parse `lox check` flags, skipping positional arguments.
///
/// Accepts `--color=<auto|always|never>`, `--error-limit=<n>` (0 means
/// unlimited), and `--no-dedup`.
pub fn parse_check_options(args: &[String]) -> Result<CheckOptions, OptionError> {
    let mut options = CheckOptions::default();
    for arg in args.iter().filter(|a| a.starts_with('-')) {
        if let Some(value) = arg.strip_prefix("--color=") {
            options.color = value
                .parse()
                .map_err(|()| OptionError::Color(value.to_string()))?;
        } else if let Some(value) = arg.strip_prefix("--error-limit=") {
            options.diagnostics.error_limit = value
                .parse()
                .map_err(|_| OptionError::ErrorLimit(value.to_string()))?;
        } else if arg == "--no-dedup" {
            options.diagnostics.deduplicate = false;
        } else {
            return Err(OptionError::Unknown(arg.clone()));
        }
    }
    Ok(options)
}

/// The first positional argument, if any.
pub fn first_positional(args: &[String]) -> Option<&str> {
    args.iter()
        .find(|a| !a.starts_with('-'))
        .map(String::as_str)
}
