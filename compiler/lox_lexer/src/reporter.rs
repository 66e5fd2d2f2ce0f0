//! Error-reporting capability injected into the scanner.

/// Receives lexical errors as they are found.
///
/// The scanner only calls `report`; it never inspects any result and never
/// stops early because of it. Any `FnMut(u32, &str)` closure is a reporter.
pub trait Reporter {
    /// Called once per lexical error, in source order.
    fn report(&mut self, line: u32, message: &str);
}

impl<F> Reporter for F
where
    F: FnMut(u32, &str),
{
    fn report(&mut self, line: u32, message: &str) {
        self(line, message);
    }
}

/// Reporter that discards everything.
///
/// Errors are still available afterwards in
/// [`LexOutput::errors`](crate::LexOutput::errors).
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&mut self, _line: u32, _message: &str) {}
}
