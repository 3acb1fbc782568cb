//! Tokens produced by the tokenizers.
//!
//! A [`Token`] never owns bytes: it borrows its span straight out of the
//! source buffer, so the buffer must outlive every token derived from it.

use std::fmt;

/// Kind of token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A field: for the line tokenizer, one line without its terminator.
    Field,
    /// Input exhausted. Always zero-length.
    Eof,
}

/// Half-open byte range `begin..end` into the source buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub begin: usize,
    pub end: usize,
}

impl Span {
    pub fn new(begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end, "span begin {begin} exceeds end {end}");
        Self { begin, end }
    }

    /// Zero-length span at `pos`.
    pub fn empty_at(pos: usize) -> Self {
        Self {
            begin: pos,
            end: pos,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.begin, self.end)
    }
}

/// A delimited span of the source buffer.
///
/// `line` is zero-based. `extra` is a spare slot for tokenizer-specific
/// data; the line tokenizer always sets it to 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub span: Span,
    pub line: u64,
    pub extra: u32,
    bytes: &'a [u8],
}

impl<'a> Token<'a> {
    /// A field token over `bytes`, which must be the contents of `span`.
    pub fn field(bytes: &'a [u8], span: Span, line: u64) -> Self {
        debug_assert_eq!(bytes.len(), span.len(), "token bytes must match span");
        Self {
            kind: TokenKind::Field,
            span,
            line,
            extra: 0,
            bytes,
        }
    }

    /// A zero-length EOF token positioned at `pos`.
    pub fn eof(pos: usize, line: u64) -> Self {
        Self {
            kind: TokenKind::Eof,
            span: Span::empty_at(pos),
            line,
            extra: 0,
            bytes: &[],
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// The token's bytes, borrowed from the source buffer.
    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The token's bytes as UTF-8, or `None` if they are not valid UTF-8.
    pub fn as_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.bytes).ok()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

#[cfg(test)]
mod tests;
