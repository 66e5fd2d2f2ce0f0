use super::*;

// === RawTag discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    // Identifiers & Literals: 0-15
    assert_eq!(RawTag::Ident as u8, 0);
    assert_eq!(RawTag::Number as u8, 1);
    assert_eq!(RawTag::String as u8, 2);

    // Operators: 32-63
    assert_eq!(RawTag::LeftParen as u8, 32);
    assert_eq!(RawTag::GreaterEqual as u8, 50);

    // Trivia: 112-127
    assert_eq!(RawTag::Whitespace as u8, 112);
    assert_eq!(RawTag::BlockComment as u8, 115);

    // Errors: 240-254
    assert_eq!(RawTag::InvalidChar as u8, 240);
    assert_eq!(RawTag::MalformedBlockComment as u8, 243);

    assert_eq!(RawTag::Eof as u8, 255);
}

#[test]
fn trivia_classification() {
    for tag in [
        RawTag::Whitespace,
        RawTag::Newline,
        RawTag::LineComment,
        RawTag::BlockComment,
    ] {
        assert!(tag.is_trivia(), "{tag:?} should be trivia");
        assert!(!tag.is_error(), "{tag:?} should not be an error");
    }
    assert!(!RawTag::Ident.is_trivia());
    assert!(!RawTag::Slash.is_trivia());
    assert!(!RawTag::Eof.is_trivia());
}

#[test]
fn error_classification() {
    for tag in [
        RawTag::InvalidChar,
        RawTag::UnterminatedString,
        RawTag::UnterminatedBlockComment,
        RawTag::MalformedBlockComment,
    ] {
        assert!(tag.is_error(), "{tag:?} should be an error");
        assert!(!tag.is_trivia(), "{tag:?} should not be trivia");
    }
    assert!(!RawTag::String.is_error());
    assert!(!RawTag::Eof.is_error());
}
