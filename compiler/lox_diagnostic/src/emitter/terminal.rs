//! Terminal Emitter
//!
//! Writes `[line N] error[CODE]: message` lines, one `= note:` line per
//! note, with optional ANSI color.

use std::borrow::Cow;
use std::io::{self, Write};
use std::str::FromStr;

use crate::Diagnostic;

use super::DiagnosticEmitter;

const RED_BOLD: &str = "\x1b[1;31m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` is consulted only for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Parses the `--color` flag value: `auto`, `always`, or `never`.
impl FromStr for ColorMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(()),
        }
    }
}

/// The closing line's text after `error: `, or `None` when clean.
fn abort_message(error_count: usize) -> Option<Cow<'static, str>> {
    match error_count {
        0 => None,
        1 => Some(Cow::Borrowed("aborting due to previous error")),
        n => Some(Cow::Owned(format!("aborting due to {n} previous errors"))),
    }
}

/// Terminal emitter with optional color support.
///
/// Write errors are ignored.
pub struct TerminalEmitter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(out: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            out,
            color: mode.should_use_colors(is_tty),
        }
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint<'a>(&self, text: &'a str, style: &str) -> Cow<'a, str> {
        if self.color {
            Cow::Owned(format!("{style}{text}{RESET}"))
        } else {
            Cow::Borrowed(text)
        }
    }

    fn write_diagnostic(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        let location = match diagnostic.line {
            Some(line) => format!("{} ", self.paint(&format!("[line {line}]"), DIM)),
            None => String::new(),
        };
        let code = format!("[{}]", diagnostic.code);
        let header = format!(
            "{location}{}{}",
            self.paint("error", RED_BOLD),
            self.paint(&code, BOLD),
        );
        writeln!(self.out, "{header}: {}", diagnostic.message)?;

        let note = self.paint("note", BOLD).into_owned();
        for text in &diagnostic.notes {
            writeln!(self.out, "  = {note}: {text}")?;
        }
        Ok(())
    }
}

impl TerminalEmitter<io::Stderr> {
    /// `is_tty` is whether stderr is a TTY (used for `ColorMode::Auto`).
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let _ = self.write_diagnostic(diagnostic);
    }

    fn flush(&mut self) {
        let _ = self.out.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if let Some(message) = abort_message(error_count) {
            let label = self.paint("error", RED_BOLD).into_owned();
            let _ = writeln!(self.out, "{label}: {message}");
        }
    }
}

#[cfg(test)]
mod tests;
