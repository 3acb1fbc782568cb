use super::*;
use pretty_assertions::assert_eq;

#[test]
fn field_token_borrows_bytes() {
    let source = b"hello\nworld";
    let token = Token::field(&source[6..11], Span::new(6, 11), 1);
    assert_eq!(token.kind, TokenKind::Field);
    assert_eq!(token.bytes(), b"world");
    assert_eq!(token.as_str(), Some("world"));
    assert_eq!(token.len(), 5);
    assert_eq!(token.extra, 0);
    assert!(!token.is_eof());
}

#[test]
fn eof_token_is_zero_length() {
    let token = Token::eof(42, 3);
    assert!(token.is_eof());
    assert!(token.is_empty());
    assert_eq!(token.span, Span::empty_at(42));
    assert_eq!(token.line, 3);
    assert_eq!(token.bytes(), b"");
}

#[test]
fn invalid_utf8_has_no_str_view() {
    let source = [0xFF, 0xFE, b'a'];
    let token = Token::field(&source, Span::new(0, 3), 0);
    assert_eq!(token.as_str(), None);
    assert_eq!(token.bytes(), &source[..]);
}

#[test]
fn span_display() {
    assert_eq!(Span::new(3, 7).to_string(), "3..7");
}
