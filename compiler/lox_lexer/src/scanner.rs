//! The scanner: drives the raw scanner and the cooker to completion.

use lox_lexer_core::{Cursor, RawScanner, RawTag};
use tracing::{debug, trace};

use crate::cooker::TokenCooker;
use crate::lex_error::LexError;
use crate::reporter::Reporter;
use crate::token::Token;

/// Result of scanning one source: the token sequence plus every lexical
/// error found along the way.
///
/// `tokens` always ends with exactly one `EOF` token, even when `errors`
/// is non-empty.
#[derive(Clone, Debug, PartialEq)]
pub struct LexOutput<'src> {
    pub tokens: Vec<Token<'src>>,
    pub errors: Vec<LexError>,
}

impl LexOutput<'_> {
    /// Returns `true` if any lexical error was found.
    ///
    /// Callers should check this before handing `tokens` to a parser.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Single-pass scanner over a borrowed source.
///
/// A scanner is consumed by [`scan_tokens`](Self::scan_tokens); scanning
/// the same source again (e.g. one REPL line after another) uses a fresh
/// instance.
pub struct Scanner<'src> {
    source: &'src str,
    raw: RawScanner<'src>,
    cooker: TokenCooker<'src>,
    tokens: Vec<Token<'src>>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Scanner {
            source,
            raw: RawScanner::new(Cursor::new(source)),
            cooker: TokenCooker::new(source),
            tokens: Vec::new(),
        }
    }

    /// Scan the whole source.
    ///
    /// Every lexical error is passed to `reporter` as soon as it is found
    /// and also collected into [`LexOutput::errors`]. Scanning never stops
    /// early.
    #[tracing::instrument(level = "debug", skip_all, fields(source_len = self.source.len()))]
    pub fn scan_tokens<R>(mut self, reporter: &mut R) -> LexOutput<'src>
    where
        R: Reporter + ?Sized,
    {
        loop {
            let start = self.raw.pos();
            let raw = self.raw.next_token();
            let token = self.cooker.cook(raw, start);

            if let Some(err) = self.cooker.last_cook_error() {
                trace!(line = err.line, kind = ?err.kind, "lexical error");
                reporter.report(err.line, &err.to_string());
            }
            if let Some(token) = token {
                self.tokens.push(token);
            }
            if raw.tag == RawTag::Eof {
                break;
            }
        }

        let errors = self.cooker.into_errors();
        debug!(
            tokens = self.tokens.len(),
            errors = errors.len(),
            "scan complete"
        );
        LexOutput {
            tokens: self.tokens,
            errors,
        }
    }
}
