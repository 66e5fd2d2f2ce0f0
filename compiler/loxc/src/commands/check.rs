//! The `check` command: lex a file and report every error as a diagnostic.

use std::io::IsTerminal;

use lox_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use lox_diagnostic::queue::{DiagnosticConfig, DiagnosticQueue};
use lox_diagnostic::ErrorGuaranteed;
use tracing::{debug, trace};

use super::{read_file, CheckOptions, EXIT_DATA_ERR, EXIT_FAILURE, EXIT_SUCCESS};
use crate::problem::render_lex_error;

/// Lex `source` and emit its errors through `emitter`.
///
/// Returns the number of tokens (including `EOF`) when the source is clean.
/// Errors past `config.error_limit` and folded repeats are counted in the
/// summary but not shown.
#[tracing::instrument(level = "debug", skip_all)]
pub fn check_source<E: DiagnosticEmitter>(
    source: &str,
    config: DiagnosticConfig,
    emitter: &mut E,
) -> Result<usize, ErrorGuaranteed> {
    let output = lox_lexer::lex(source);

    let mut queue = DiagnosticQueue::with_config(config);
    for err in &output.errors {
        if let Err(reason) = queue.push(render_lex_error(err)) {
            trace!(?reason, line = err.line, "diagnostic not shown");
        }
    }

    let Some(guarantee) = queue.has_errors() else {
        return Ok(output.tokens.len());
    };

    let (diagnostics, stats) = queue.into_sorted();
    debug!(
        errors = stats.total(),
        shown = stats.shown,
        repeated = stats.repeated,
        "lexical errors found"
    );
    emitter.emit_all(&diagnostics);
    emitter.emit_summary(stats.total());
    emitter.flush();
    Err(guarantee)
}

/// Check a file, writing diagnostics to stderr.
pub fn check_file(path: &str, options: &CheckOptions) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            return EXIT_FAILURE;
        }
    };

    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(options.color, is_tty);

    match check_source(&source, options.diagnostics.clone(), &mut emitter) {
        Ok(token_count) => {
            println!("{path}: ok ({token_count} tokens)");
            EXIT_SUCCESS
        }
        Err(_) => EXIT_DATA_ERR,
    }
}
