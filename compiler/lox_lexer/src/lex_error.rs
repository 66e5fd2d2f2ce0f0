//! Lexer error types.
//!
//! Lexical errors never abort a scan. Each one is recorded as a
//! [`LexError`], forwarded to the caller's [`Reporter`](crate::Reporter),
//! and the offending lexeme simply contributes no token.

/// A lexer error: the line it was detected on and what went wrong.
///
/// `Display` renders the bare message (e.g. `Unterminated string.`); the
/// line is kept separate so reporters can format it their own way.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    /// Line the scanner was on when the error was detected.
    pub line: u32,
    /// What went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A character outside the lexical grammar.
    #[error("Unexpected character '{found}'.")]
    UnexpectedCharacter { found: char },
    /// Missing closing `"` for a string literal.
    #[error("Unterminated string.")]
    UnterminatedString,
    /// Missing closing `*/` for a block comment.
    #[error("Unterminated comment.")]
    UnterminatedComment,
    /// Block comment ending in a `*` with no `/` after it.
    #[error("Expected '/' after '*' to close comment.")]
    MalformedCommentClose,
}

impl LexError {
    /// Create an unexpected character error.
    #[cold]
    pub fn unexpected_character(line: u32, found: char) -> Self {
        Self {
            line,
            kind: LexErrorKind::UnexpectedCharacter { found },
        }
    }

    /// Create an unterminated string error.
    #[cold]
    pub fn unterminated_string(line: u32) -> Self {
        Self {
            line,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    /// Create an unterminated block comment error.
    #[cold]
    pub fn unterminated_comment(line: u32) -> Self {
        Self {
            line,
            kind: LexErrorKind::UnterminatedComment,
        }
    }

    /// Create a malformed block comment close error.
    #[cold]
    pub fn malformed_comment_close(line: u32) -> Self {
        Self {
            line,
            kind: LexErrorKind::MalformedCommentClose,
        }
    }
}

#[cfg(test)]
mod tests;
