//! Byte cursor over a borrowed source string.
//!
//! The cursor advances through the source byte-by-byte and keeps the
//! current line number. Reads past the end return the sentinel
//! [`EOF_BYTE`] (`0x00`), so lookahead never needs explicit bounds checks
//! at the call site.
//!
//! # Line Tracking
//!
//! The line counter is driven solely by consumed `\n` bytes. Every method
//! that moves the cursor forward over a newline (single-step or bulk)
//! increments it, so callers never adjust the line themselves.
//!
//! # Interior Null Bytes
//!
//! A null byte inside the source also reads as `0x00`. The cursor
//! distinguishes it from EOF by comparing `pos` against the source length;
//! use [`is_eof()`](Cursor::is_eof) rather than comparing bytes.

/// Byte returned by [`Cursor::current()`] and [`Cursor::peek()`] past the
/// end of the source.
pub const EOF_BYTE: u8 = 0;

/// Forward-only cursor over a borrowed source.
///
/// The cursor is [`Copy`], enabling cheap state snapshots in tests.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source being scanned.
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: usize,
    /// 1-based line of the current position.
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0, line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
        }
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.source
            .as_bytes()
            .get(index)
            .copied()
            .unwrap_or(EOF_BYTE)
    }

    /// Returns the byte at the current position.
    ///
    /// Returns [`EOF_BYTE`] at EOF. Interior null bytes also return `0x00`;
    /// use [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe to call at any position: reads past the end yield [`EOF_BYTE`].
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Consume the current byte and return it.
    ///
    /// At EOF this is a no-op returning [`EOF_BYTE`].
    #[inline]
    pub fn advance(&mut self) -> u8 {
        if self.is_eof() {
            return EOF_BYTE;
        }
        let byte = self.current();
        self.pos += 1;
        if byte == b'\n' {
            self.line += 1;
        }
        byte
    }

    /// Consume the current byte only if it equals `expected`.
    ///
    /// Returns `true` when the byte was consumed; otherwise the cursor is
    /// left untouched.
    #[inline]
    pub fn eat(&mut self, expected: u8) -> bool {
        if self.is_eof() || self.current() != expected {
            return false;
        }
        self.advance();
        true
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Current 1-based line.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Unconsumed source bytes (empty at EOF).
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.source.as_bytes()[self.pos.min(self.source.len())..]
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` so the sentinel terminates the loop.
    /// This holds for all ASCII classification predicates used by the
    /// scanner. `pred` must also reject `\n`; newline runs go through
    /// [`advance()`](Self::advance).
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance the cursor past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        if self.current() == b'\n' {
            self.advance();
            return;
        }
        let width = Self::utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source.len());
    }

    /// Advance to the next `\n` byte or EOF using SIMD-accelerated search.
    ///
    /// The newline itself is not consumed, so the line counter is unchanged.
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr(b'\n', self.rest()) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }

    /// Advance until `byte` is found or EOF is reached.
    ///
    /// The cursor stops *on* the found byte. Newlines skipped along the way
    /// are added to the line counter. Returns `true` if `byte` was found.
    pub fn eat_until(&mut self, byte: u8) -> bool {
        let rest = self.rest();
        let (skipped, found) = match memchr::memchr(byte, rest) {
            Some(offset) => (offset, true),
            None => (rest.len(), false),
        };
        self.skip_counting_lines(skipped);
        found
    }

    /// Advance until the two-byte sequence `first second` is found or EOF.
    ///
    /// The cursor stops on `first`. A `first` not immediately followed by
    /// `second` is skipped like any other byte. Newlines skipped along the
    /// way are added to the line counter. Returns `true` if the pair was
    /// found.
    pub fn eat_until_pair(&mut self, first: u8, second: u8) -> bool {
        let rest = self.rest();
        let (skipped, found) = match memchr::memmem::find(rest, &[first, second]) {
            Some(offset) => (offset, true),
            None => (rest.len(), false),
        };
        self.skip_counting_lines(skipped);
        found
    }

    fn skip_counting_lines(&mut self, n: usize) {
        let skipped = &self.rest()[..n];
        let newlines = memchr::memchr_iter(b'\n', skipped).count();
        self.line = self
            .line
            .saturating_add(u32::try_from(newlines).unwrap_or(u32::MAX));
        self.pos += n;
    }
}
