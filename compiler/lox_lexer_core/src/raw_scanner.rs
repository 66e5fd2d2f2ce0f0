//! Hand-written raw scanner producing `(RawTag, len, line)` triples.
//!
//! The scanner operates on a [`Cursor`] and produces [`RawToken`] values
//! with zero heap allocation. It does not resolve keywords or decode
//! numeric and string values; those are deferred to the cooking layer.
//!
//! # Design
//!
//! Main dispatch is a single `match` on the first byte of the lexeme. Each
//! arm calls a focused method that advances the cursor and returns a
//! `RawToken`. Lexical errors are encoded as error tags rather than
//! `Result::Err`, so scanning always runs to EOF.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner.
///
/// Produces one token at a time. The lexeme of each token starts where the
/// previous one ended; after [`RawTag::Eof`] every further call returns
/// `Eof` again.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Byte offset where the next token will start.
    #[inline]
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Current line of the underlying cursor.
    #[inline]
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Produce the next raw token.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return self.token(start, RawTag::Eof);
        }
        match self.cursor.current() {
            b' ' | b'\t' | b'\r' => self.whitespace(start),
            b'\n' => self.newline(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string(start),
            b'/' => self.slash_or_comment(start),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b',' => self.single(start, RawTag::Comma),
            b'.' => self.single(start, RawTag::Dot),
            b'-' => self.single(start, RawTag::Minus),
            b'+' => self.single(start, RawTag::Plus),
            b';' => self.single(start, RawTag::Semicolon),
            b'*' => self.single(start, RawTag::Star),
            b'!' => self.one_or_two(start, RawTag::Bang, RawTag::BangEqual),
            b'=' => self.one_or_two(start, RawTag::Equal, RawTag::EqualEqual),
            b'<' => self.one_or_two(start, RawTag::Less, RawTag::LessEqual),
            b'>' => self.one_or_two(start, RawTag::Greater, RawTag::GreaterEqual),
            _ => self.invalid_char(start),
        }
    }

    #[inline]
    fn token(&self, start: usize, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
            line: self.cursor.line(),
        }
    }

    // ─── Whitespace & Newlines ─────────────────────────────────────

    fn whitespace(&mut self, start: usize) -> RawToken {
        self.cursor
            .eat_while(|b| b == b' ' || b == b'\t' || b == b'\r');
        self.token(start, RawTag::Whitespace)
    }

    fn newline(&mut self, start: usize) -> RawToken {
        self.cursor.advance(); // bumps the line
        self.token(start, RawTag::Newline)
    }

    // ─── Comments ──────────────────────────────────────────────────

    fn slash_or_comment(&mut self, start: usize) -> RawToken {
        self.cursor.advance(); // consume '/'
        if self.cursor.eat(b'/') {
            self.cursor.eat_until_newline_or_eof();
            self.token(start, RawTag::LineComment)
        } else if self.cursor.eat(b'*') {
            self.block_comment(start)
        } else {
            self.token(start, RawTag::Slash)
        }
    }

    /// Block comment body, after the opening `/*`.
    ///
    /// Terminates at the first `*/` pair. A `*` that is not immediately
    /// followed by `/` is ordinary content. Comments do not nest.
    fn block_comment(&mut self, start: usize) -> RawToken {
        let trailing_star = self.cursor.rest().last() == Some(&b'*');
        if self.cursor.eat_until_pair(b'*', b'/') {
            self.cursor.advance(); // '*'
            self.cursor.advance(); // '/'
            self.token(start, RawTag::BlockComment)
        } else if trailing_star {
            self.token(start, RawTag::MalformedBlockComment)
        } else {
            self.token(start, RawTag::UnterminatedBlockComment)
        }
    }

    // ─── Identifiers ───────────────────────────────────────────────

    fn identifier(&mut self, start: usize) -> RawToken {
        self.cursor.advance(); // first char already validated
        self.cursor.eat_while(is_ident_continue);
        self.token(start, RawTag::Ident)
    }

    // ─── Literals ──────────────────────────────────────────────────

    fn number(&mut self, start: usize) -> RawToken {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        // A fraction needs at least one digit after the dot; `12.` leaves
        // the dot for the next token.
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance(); // '.'
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        self.token(start, RawTag::Number)
    }

    fn string(&mut self, start: usize) -> RawToken {
        self.cursor.advance(); // opening '"'
        if self.cursor.eat_until(b'"') {
            self.cursor.advance(); // closing '"'
            self.token(start, RawTag::String)
        } else {
            self.token(start, RawTag::UnterminatedString)
        }
    }

    // ─── Operators ─────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: usize, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    /// `op` or `op=`: one byte of lookahead, consumed only on `=`.
    fn one_or_two(&mut self, start: usize, one: RawTag, two: RawTag) -> RawToken {
        self.cursor.advance();
        let tag = if self.cursor.eat(b'=') { two } else { one };
        self.token(start, tag)
    }

    // ─── Errors ────────────────────────────────────────────────────

    fn invalid_char(&mut self, start: usize) -> RawToken {
        self.cursor.advance_char();
        self.token(start, RawTag::InvalidChar)
    }
}

/// Returns `true` for bytes that may continue an identifier.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
