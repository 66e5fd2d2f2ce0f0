//! Lexer for Lox.
//!
//! Converts source text into the token sequence consumed by the parser.
//! Scanning is split in two layers:
//!
//! ```text
//! source → lox_lexer_core::RawScanner → (RawTag, len, line)
//!        → TokenCooker → Token
//! ```
//!
//! Lexical errors are recoverable: they are forwarded to a [`Reporter`],
//! collected in [`LexOutput::errors`], and the offending lexeme produces no
//! token. A token sequence terminated by `EOF` is always returned.

mod cooker;
pub mod keywords;
pub mod lex_error;
mod reporter;
mod scanner;
mod token;

pub use lex_error::{LexError, LexErrorKind};
pub use reporter::{Reporter, SilentReporter};
pub use scanner::{LexOutput, Scanner};
pub use token::{Literal, Token, TokenKind};

/// Lex source code, collecting errors without reporting them.
pub fn lex(source: &str) -> LexOutput<'_> {
    Scanner::new(source).scan_tokens(&mut SilentReporter)
}

/// Lex source code, forwarding each error to `reporter` as it is found.
pub fn lex_with_reporter<'src, R>(source: &'src str, reporter: &mut R) -> LexOutput<'src>
where
    R: Reporter + ?Sized,
{
    Scanner::new(source).scan_tokens(reporter)
}
