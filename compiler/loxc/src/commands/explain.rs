//! The `explain` command: display documentation for error codes.

use lox_diagnostic::{ErrorCode, ErrorDocs};

use super::{EXIT_FAILURE, EXIT_SUCCESS};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExplainError {
    #[error("unknown error code: {0}")]
    UnknownCode(String),
    #[error("no documentation available for {0}")]
    Undocumented(ErrorCode),
}

/// Look up the documentation for an error code string such as `E0002`.
pub fn lookup_docs(code_str: &str) -> Result<&'static str, ExplainError> {
    let code: ErrorCode = code_str
        .parse()
        .map_err(|()| ExplainError::UnknownCode(code_str.to_string()))?;
    ErrorDocs::get(code).ok_or(ExplainError::Undocumented(code))
}

/// Print the documentation for an error code.
pub fn explain_error(code_str: &str) -> i32 {
    match lookup_docs(code_str) {
        Ok(doc) => {
            println!("{doc}");
            EXIT_SUCCESS
        }
        Err(e @ ExplainError::UnknownCode(_)) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("Codes have the format EXXXX where X is a digit.");
            let known: Vec<&str> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
            eprintln!("Known codes: {}", known.join(", "));
            EXIT_FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            EXIT_FAILURE
        }
    }
}
