use super::Cursor;
use pretty_assertions::assert_eq;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::over(b"abc");
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::over(b"abc");
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.consumed(), 1);
}

#[test]
fn advance_n_saturates_at_end() {
    let mut cursor = Cursor::over(b"abc");
    cursor.advance_n(10);
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eof());
}

#[test]
fn current_at_end_returns_zero() {
    let mut cursor = Cursor::over(b"ab");
    cursor.advance_n(2);
    assert_eq!(cursor.current(), 0);
}

// === Ranges ===

#[test]
fn sub_range_starts_at_begin() {
    let cursor = Cursor::new(b"xxabcxx", 2, 5);
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.len(), 3);
    assert_eq!(cursor.consumed(), 0);
}

#[test]
fn sub_range_eof_ignores_trailing_bytes() {
    let mut cursor = Cursor::new(b"xxabcxx", 2, 5);
    cursor.advance_n(3);
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.consumed(), 3);
}

#[test]
fn empty_range_is_eof() {
    let cursor = Cursor::new(b"abc", 1, 1);
    assert!(cursor.is_empty());
    assert!(cursor.is_eof());
}

// === EOF Detection ===

#[test]
fn interior_null_is_not_eof() {
    let mut cursor = Cursor::over(b"a\0b");
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
}

// === Slice ===

#[test]
fn slice_uses_absolute_offsets() {
    let cursor = Cursor::new(b"hello world", 6, 11);
    assert_eq!(cursor.slice(6, 11), b"world");
}

#[test]
fn slice_from_extracts_to_current() {
    let mut cursor = Cursor::over(b"abcdef");
    cursor.advance_n(3);
    assert_eq!(cursor.slice_from(0), b"abc");
    assert_eq!(cursor.slice_from(1), b"bc");
}

// === Line Breaks ===

#[test]
fn eat_until_line_break_stops_on_lf() {
    let mut cursor = Cursor::over(b"abc\ndef");
    assert_eq!(cursor.eat_until_line_break(), Some(b'\n'));
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_until_line_break_stops_on_cr() {
    let mut cursor = Cursor::over(b"ab\rcd\n");
    assert_eq!(cursor.eat_until_line_break(), Some(b'\r'));
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn eat_until_line_break_reaches_eof() {
    let mut cursor = Cursor::over(b"no terminator");
    assert_eq!(cursor.eat_until_line_break(), None);
    assert!(cursor.is_eof());
}

#[test]
fn eat_until_line_break_respects_range_end() {
    let mut cursor = Cursor::new(b"abc\n", 0, 3);
    assert_eq!(cursor.eat_until_line_break(), None);
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_line_break_lf() {
    let mut cursor = Cursor::over(b"\nx");
    assert_eq!(cursor.eat_line_break(), 1);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn eat_line_break_crlf_is_one_terminator() {
    let mut cursor = Cursor::over(b"\r\nx");
    assert_eq!(cursor.eat_line_break(), 2);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn eat_line_break_lone_cr() {
    let mut cursor = Cursor::over(b"\rx");
    assert_eq!(cursor.eat_line_break(), 1);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn eat_line_break_lf_cr_is_two_terminators() {
    let mut cursor = Cursor::over(b"\n\r");
    assert_eq!(cursor.eat_line_break(), 1);
    assert_eq!(cursor.eat_line_break(), 1);
    assert!(cursor.is_eof());
}

#[test]
fn eat_line_break_does_not_cross_range_end() {
    // The LF of a CRLF pair lies outside the range.
    let mut cursor = Cursor::new(b"a\r\n", 0, 2);
    cursor.advance();
    assert_eq!(cursor.eat_line_break(), 1);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn eat_line_break_off_terminator_is_noop() {
    let mut cursor = Cursor::over(b"abc");
    assert_eq!(cursor.eat_line_break(), 0);
    assert_eq!(cursor.pos(), 0);
}
