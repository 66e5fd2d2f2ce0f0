//! Token cooking layer.
//!
//! Transforms raw tokens from `lox_lexer_core` into parser-ready [`Token`]s:
//!
//! ```text
//! source → RawScanner → (RawTag, len, line) → TokenCooker → Token
//! ```
//!
//! Each `RawTag` category has a dedicated cooking path:
//! - **Operators/delimiters**: direct 1:1 mapping
//! - **Identifiers**: keyword lookup, otherwise `IDENTIFIER`
//! - **Numbers**: parse to `f64`
//! - **Strings**: strip the quotes
//! - **Trivia**: dropped
//! - **Errors**: push a `LexError`, produce no token

use lox_lexer_core::{RawTag, RawToken};

use crate::keywords;
use crate::lex_error::LexError;
use crate::token::{Literal, Token, TokenKind};

/// Cooks raw tokens into [`Token`] values.
///
/// Stateless with respect to individual tokens; each `cook()` call is
/// independent. Accumulates errors for the entire source.
pub(crate) struct TokenCooker<'src> {
    source: &'src str,
    errors: Vec<LexError>,
    /// Number of errors before the current `cook()` call.
    errors_before_cook: usize,
}

impl<'src> TokenCooker<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            source,
            errors: Vec::new(),
            errors_before_cook: 0,
        }
    }

    /// Consume the cooker, returning accumulated errors.
    pub(crate) fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    /// The error added by the most recent `cook()` call, if any.
    ///
    /// Used by the driver loop to forward the error to the reporter.
    pub(crate) fn last_cook_error(&self) -> Option<&LexError> {
        if self.errors.len() > self.errors_before_cook {
            self.errors.last()
        } else {
            None
        }
    }

    /// Cook a single raw token that starts at byte `offset`.
    ///
    /// Returns `None` for trivia and for lexical errors.
    pub(crate) fn cook(&mut self, raw: RawToken, offset: usize) -> Option<Token<'src>> {
        self.errors_before_cook = self.errors.len();
        let lexeme = &self.source[offset..offset + raw.len];
        let line = raw.line;
        if raw.tag.is_trivia() {
            return None;
        }
        if raw.tag.is_error() {
            if let Some(error) = lex_error(raw.tag, lexeme, line) {
                self.errors.push(error);
            }
            return None;
        }
        let kind = match raw.tag {
            // Delimiters
            RawTag::LeftParen => TokenKind::LeftParen,
            RawTag::RightParen => TokenKind::RightParen,
            RawTag::LeftBrace => TokenKind::LeftBrace,
            RawTag::RightBrace => TokenKind::RightBrace,
            RawTag::Comma => TokenKind::Comma,
            RawTag::Dot => TokenKind::Dot,
            RawTag::Semicolon => TokenKind::Semicolon,

            // Operators
            RawTag::Minus => TokenKind::Minus,
            RawTag::Plus => TokenKind::Plus,
            RawTag::Star => TokenKind::Star,
            RawTag::Slash => TokenKind::Slash,
            RawTag::Bang => TokenKind::Bang,
            RawTag::BangEqual => TokenKind::BangEqual,
            RawTag::Equal => TokenKind::Equal,
            RawTag::EqualEqual => TokenKind::EqualEqual,
            RawTag::Less => TokenKind::Less,
            RawTag::LessEqual => TokenKind::LessEqual,
            RawTag::Greater => TokenKind::Greater,
            RawTag::GreaterEqual => TokenKind::GreaterEqual,

            RawTag::Ident => keywords::lookup(lexeme).unwrap_or(TokenKind::Identifier),
            RawTag::Number => {
                let literal = Literal::Number(parse_number(lexeme));
                return Some(Token::new(TokenKind::Number, lexeme, Some(literal), line));
            }
            RawTag::String => {
                let literal = Literal::Str(&lexeme[1..lexeme.len() - 1]);
                return Some(Token::new(TokenKind::String, lexeme, Some(literal), line));
            }

            RawTag::Eof => return Some(Token::eof(line)),

            // Trivia and error tags returned above.
            _ => return None,
        };
        Some(Token::new(kind, lexeme, None, line))
    }
}

/// Map an error tag to its [`LexError`]. Non-error tags map to `None`.
fn lex_error(tag: RawTag, lexeme: &str, line: u32) -> Option<LexError> {
    match tag {
        RawTag::InvalidChar => {
            let found = lexeme.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
            Some(LexError::unexpected_character(line, found))
        }
        RawTag::UnterminatedString => Some(LexError::unterminated_string(line)),
        RawTag::UnterminatedBlockComment => Some(LexError::unterminated_comment(line)),
        RawTag::MalformedBlockComment => Some(LexError::malformed_comment_close(line)),
        _ => None,
    }
}

/// Parse a number lexeme (`digits` or `digits.digits`).
///
/// Such text always parses; overlong digit runs round or saturate to
/// infinity rather than fail.
fn parse_number(text: &str) -> f64 {
    debug_assert!(
        text.parse::<f64>().is_ok(),
        "raw scanner produced unparsable number {text:?}"
    );
    text.parse().unwrap_or(f64::NAN)
}
