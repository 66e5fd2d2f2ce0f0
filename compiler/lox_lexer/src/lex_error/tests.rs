use super::*;

#[test]
fn unexpected_character_message() {
    let err = LexError::unexpected_character(3, '@');
    assert_eq!(err.line, 3);
    assert_eq!(err.to_string(), "Unexpected character '@'.");
}

#[test]
fn unterminated_string_message() {
    let err = LexError::unterminated_string(1);
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.to_string(), "Unterminated string.");
}

#[test]
fn comment_messages() {
    assert_eq!(
        LexError::unterminated_comment(2).to_string(),
        "Unterminated comment."
    );
    assert_eq!(
        LexError::malformed_comment_close(2).to_string(),
        "Expected '/' after '*' to close comment."
    );
}

#[test]
fn non_ascii_found_char_is_preserved() {
    let err = LexError::unexpected_character(1, '\u{00E9}');
    assert_eq!(err.to_string(), "Unexpected character '\u{00E9}'.");
}

#[test]
fn lex_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&LexError::unterminated_string(1));
}
