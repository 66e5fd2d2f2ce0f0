//! Low-level tokenizer for Lox.
//!
//! This crate has no `lox_*` dependencies. It turns source text into a
//! stream of [`RawToken`]s: a [`RawTag`] plus byte length and line. Keyword
//! resolution, literal decoding and diagnostics live in `lox_lexer`.
//!
//! ```text
//! &str → Cursor → RawScanner → (RawTag, len, line)
//! ```

mod cursor;
mod raw_scanner;
mod tag;

pub use cursor::{Cursor, EOF_BYTE};
pub use raw_scanner::RawScanner;
pub use tag::{RawTag, RawToken};
