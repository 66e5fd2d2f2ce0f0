//! Raw token tags produced by the [`RawScanner`](crate::RawScanner).
//!
//! Tags classify lexemes without decoding them: identifiers are not yet
//! resolved to keywords and numeric/string values are not yet extracted.
//! Trivia and lexical errors are tags too, so the scanner never fails.
//!
//! Discriminants are grouped into semantic ranges:
//!
//! | Range     | Category                         |
//! |-----------|----------------------------------|
//! | 0–15      | Identifiers & literals           |
//! | 32–63     | Operators & punctuation          |
//! | 112–127   | Trivia                           |
//! | 240–254   | Errors                           |
//! | 255       | EOF                              |

/// Classification of a raw lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Identifiers & Literals ===
    /// `[A-Za-z_][A-Za-z0-9_]*` (keywords included).
    Ident = 0,
    /// Digit run with optional `.digits` fraction.
    Number = 1,
    /// Terminated `"..."` string, quotes included.
    String = 2,

    // === Operators & Punctuation ===
    LeftParen = 32,
    RightParen = 33,
    LeftBrace = 34,
    RightBrace = 35,
    Comma = 36,
    Dot = 37,
    Minus = 38,
    Plus = 39,
    Semicolon = 40,
    Star = 41,
    Slash = 42,
    Bang = 43,
    BangEqual = 44,
    Equal = 45,
    EqualEqual = 46,
    Less = 47,
    LessEqual = 48,
    Greater = 49,
    GreaterEqual = 50,

    // === Trivia ===
    /// Run of spaces, tabs and carriage returns.
    Whitespace = 112,
    /// A single `\n`.
    Newline = 113,
    /// `//` up to, but excluding, the next newline.
    LineComment = 114,
    /// `/* ... */`, delimiters included.
    BlockComment = 115,

    // === Errors ===
    /// A character outside the lexical grammar (one whole UTF-8 char).
    InvalidChar = 240,
    /// `"` with no closing quote before EOF.
    UnterminatedString = 241,
    /// `/*` with no closing `*/` before EOF.
    UnterminatedBlockComment = 242,
    /// `/*` whose body ends in a lone `*` at EOF.
    MalformedBlockComment = 243,

    /// End of input. Always has length 0.
    Eof = 255,
}

impl RawTag {
    /// Returns `true` for whitespace, newlines and comments.
    #[inline]
    pub fn is_trivia(self) -> bool {
        (112..=127).contains(&(self as u8))
    }

    /// Returns `true` for tags that represent a lexical error.
    #[inline]
    pub fn is_error(self) -> bool {
        (240..=254).contains(&(self as u8))
    }
}

/// A raw token: tag, byte length and the line the cursor was on after the
/// lexeme was consumed.
///
/// The token's start offset is implicit: it is the sum of the lengths of
/// all preceding raw tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: usize,
    pub line: u32,
}

#[cfg(test)]
mod tests;
