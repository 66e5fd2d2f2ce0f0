//! Lex-time problem rendering.
//!
//! Lexer errors carry their own user-facing message; this module attaches
//! an error code and a short fix-it note so they can flow through the
//! diagnostic queue and emitter.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_lexer::{LexError, LexErrorKind};

/// The error code for a lexer error.
pub fn error_code(kind: &LexErrorKind) -> ErrorCode {
    match kind {
        LexErrorKind::UnterminatedString => ErrorCode::E0001,
        LexErrorKind::UnexpectedCharacter { .. } => ErrorCode::E0002,
        LexErrorKind::UnterminatedComment => ErrorCode::E0003,
        LexErrorKind::MalformedCommentClose => ErrorCode::E0004,
    }
}

/// Render a `LexError` into a `Diagnostic`.
///
/// The message is the lexer's own text, unchanged.
#[cold]
pub fn render_lex_error(err: &LexError) -> Diagnostic {
    let diag = Diagnostic::error(error_code(&err.kind))
        .with_message(err.to_string())
        .at_line(err.line);

    match &err.kind {
        LexErrorKind::UnexpectedCharacter { found } if !found.is_ascii() => diag
            .with_note("identifiers and operators are ASCII only")
            .with_note(format!("`{found}` is U+{:04X}", u32::from(*found))),
        LexErrorKind::UnexpectedCharacter { .. } => {
            diag.with_note("this character does not start any Lox token")
        }
        LexErrorKind::UnterminatedString => {
            diag.with_note("add a closing `\"`; strings may span lines but must be closed")
        }
        LexErrorKind::UnterminatedComment => {
            diag.with_note("close the block comment with `*/`")
        }
        LexErrorKind::MalformedCommentClose => {
            diag.with_note("a block comment is closed by `*/`, not a lone `*`")
        }
    }
}
