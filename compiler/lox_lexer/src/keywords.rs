//! Reserved-word table.
//!
//! Every identifier-shaped lexeme is looked up exactly once. The table is a
//! `match` bucketed by length, so it is read-only, process-wide and needs
//! no synchronization.

use crate::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns the keyword's `TokenKind`, or `None` for a plain identifier.
/// Lexemes outside the 2–6 byte keyword range are rejected without any
/// string comparison.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "if" => Some(TokenKind::If),
            "or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "for" => Some(TokenKind::For),
            "fun" => Some(TokenKind::Fun),
            "nil" => Some(TokenKind::Nil),
            "var" => Some(TokenKind::Var),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "class" => Some(TokenKind::Class),
            "false" => Some(TokenKind::False),
            "print" => Some(TokenKind::Print),
            "super" => Some(TokenKind::Super),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    }
}
