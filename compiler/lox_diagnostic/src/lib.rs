//! Diagnostic system for Lox error reporting.
//!
//! - Error codes for searchability (`lox explain E0002`)
//! - Clear messages (what went wrong)
//! - Source line (where it went wrong)
//! - Notes (how to fix it)
//!
//! # Error Guarantees
//!
//! `ErrorGuaranteed` is type-level proof that at least one error was
//! emitted. Outside this crate it comes from [`queue::DiagnosticQueue::has_errors`].
//!
//! ```text
//! let Some(guarantee) = queue.has_errors() else { return Ok(tokens) };
//! fn check(source: &str) -> Result<Tokens, ErrorGuaranteed> { ... }
//! ```

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
mod guarantee;
pub mod queue;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
pub use guarantee::ErrorGuaranteed;
