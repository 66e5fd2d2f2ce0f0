//! The `lex` command: print the token stream of a Lox source file.

use std::io::{self, Write};

use lox_lexer::Token;

use super::{read_file, EXIT_DATA_ERR, EXIT_FAILURE, EXIT_SUCCESS};

/// Format one token as `KIND 'lexeme' [literal] @ line`.
pub fn format_token(token: &Token<'_>) -> String {
    match token.literal {
        Some(literal) => format!(
            "{} '{}' {} @ {}",
            token.kind, token.lexeme, literal, token.line
        ),
        None => format!("{} '{}' @ {}", token.kind, token.lexeme, token.line),
    }
}

/// Write one formatted token per line.
pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token<'_>]) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{}", format_token(token))?;
    }
    Ok(())
}

/// Lex `source`, streaming errors to `err` as they are found and then
/// writing the tokens to `out`.
///
/// Returns whether any lexical error was found.
pub fn lex_source<O: Write, E: Write>(source: &str, out: &mut O, err: &mut E) -> io::Result<bool> {
    let mut write_failed = None;
    let output = lox_lexer::lex_with_reporter(source, &mut |line: u32, message: &str| {
        if write_failed.is_none() {
            if let Err(e) = writeln!(err, "[line {line}] Error: {message}") {
                write_failed = Some(e);
            }
        }
    });
    if let Some(e) = write_failed {
        return Err(e);
    }

    write_tokens(out, &output.tokens)?;
    Ok(output.has_errors())
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            return EXIT_FAILURE;
        }
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    match lex_source(&source, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(false) => EXIT_SUCCESS,
        Ok(true) => EXIT_DATA_ERR,
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("error: failed to write tokens: {e}");
            EXIT_FAILURE
        }
    }
}
