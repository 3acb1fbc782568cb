//! Bounded cursor over a byte range.
//!
//! The cursor walks a half-open range `begin..end` of a borrowed byte
//! slice. Reading at or past `end` yields `0x00`, the same value an
//! interior null byte has; [`Cursor::is_eof`] tells the two apart by
//! comparing the position against `end`.
//!
//! Line-break search is delegated to `memchr`, so scanning a line costs a
//! single SIMD pass regardless of its length.

/// Bounded cursor over `buf[begin..end]`.
///
/// The cursor is [`Copy`], so a caller can snapshot it before a scan and
/// restore it afterwards.
///
/// # Invariant
///
/// `begin <= pos <= end <= buf.len()`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Whole borrowed buffer. Offsets are absolute into this slice.
    buf: &'a [u8],
    /// Current read position.
    pos: usize,
    /// Start of the scanned range.
    begin: usize,
    /// Exclusive end of the scanned range.
    end: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at `begin` over `buf[begin..end]`.
    ///
    /// Out-of-range bounds are a caller bug: they trip a debug assertion
    /// and are clamped to the buffer in release builds.
    pub fn new(buf: &'a [u8], begin: usize, end: usize) -> Self {
        debug_assert!(
            begin <= end && end <= buf.len(),
            "cursor range {begin}..{end} outside buffer of {} bytes",
            buf.len()
        );
        let end = end.min(buf.len());
        let begin = begin.min(end);
        Self {
            buf,
            pos: begin,
            begin,
            end,
        }
    }

    /// Create a cursor over the whole of `buf`.
    pub fn over(buf: &'a [u8]) -> Self {
        Self::new(buf, 0, buf.len())
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        if pos < self.end {
            self.buf[pos]
        } else {
            0
        }
    }

    /// Advance the cursor by one byte. Saturates at the end of the range.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes. Saturates at the end of the range.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.end);
    }

    /// Returns `true` once every byte of the range has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.end
    }

    /// Current absolute byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Absolute offset where the range starts.
    #[inline]
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// Absolute offset where the range ends (exclusive).
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length of the range in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    /// Returns `true` if the range holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Bytes consumed since `begin`.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.pos - self.begin
    }

    /// Borrow `buf[start..end]`.
    ///
    /// # Contract
    ///
    /// `start..end` must lie inside the cursor's range. Token boundaries
    /// produced by the tokenizer always do.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        debug_assert!(
            self.begin <= start && start <= end && end <= self.end,
            "slice {start}..{end} outside range {}..{}",
            self.begin,
            self.end
        );
        &self.buf[start..end]
    }

    /// Borrow the bytes from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Advance to the next `\n` or `\r`, or to EOF.
    ///
    /// Returns the terminator byte found, leaving the cursor on it, or
    /// `None` with the cursor at EOF.
    pub fn eat_until_line_break(&mut self) -> Option<u8> {
        let remaining = &self.buf[self.pos..self.end];
        match memchr::memchr2(b'\n', b'\r', remaining) {
            Some(offset) => {
                self.pos += offset;
                Some(self.buf[self.pos])
            }
            None => {
                self.pos = self.end;
                None
            }
        }
    }

    /// Consume one line terminator at the current position.
    ///
    /// `\n`, `\r` and `\r\n` each count as a single terminator. Returns
    /// the number of bytes consumed (0 if the cursor is not on a
    /// terminator).
    pub fn eat_line_break(&mut self) -> usize {
        let start = self.pos;
        match self.current() {
            b'\n' => self.advance(),
            b'\r' => {
                self.advance();
                if self.current() == b'\n' {
                    self.advance();
                }
            }
            _ => {}
        }
        self.pos - start
    }
}

#[cfg(test)]
mod tests;
