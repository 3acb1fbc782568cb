//! Line tokenizer.
//!
//! Splits a byte range into one [`Token`] per line. `\n`, `\r` and `\r\n`
//! all end a line; the terminator is never part of the token. The last
//! line does not need a terminator.
//!
//! # States
//!
//! ```text
//!            tokenize()
//!               |
//!               v
//!   Armed --next_token()--> Scanning --last byte consumed--> Exhausted
//!     |                                                        ^   |
//!     +-------------- empty range (reports EOF) ---------------+   |
//!                                                              +---+
//!                                                         EOF forever
//! ```
//!
//! A fired cancellation check also moves the tokenizer to `Exhausted`.

use crate::cancel::{CancellationCheck, NeverCancel};
use crate::cursor::Cursor;
use crate::error::TokenizeError;
use crate::token::{Span, Token};

/// Lines scanned between two cancellation polls.
pub const DEFAULT_INTERRUPT_EVERY_LINES: u64 = 100_000;

/// Tokenizer tuning knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TokenizerConfig {
    /// Poll the cancellation check once every this many lines. `0` never polls.
    ///
    /// Polls happen only at line starts: a single unterminated line is
    /// scanned to its end without a poll, whatever its length.
    pub interrupt_every_lines: u64,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            interrupt_every_lines: DEFAULT_INTERRUPT_EVERY_LINES,
        }
    }
}

/// How far a scan has come.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    /// Bytes consumed divided by range length, in `[0, 1]`.
    pub fraction: f64,
    /// Bytes consumed since the start of the range.
    pub bytes: usize,
}

/// Common interface of the tokenizers driven by a parsing loop.
pub trait Tokenizer<'a> {
    /// Restart over `begin..end` (absolute offsets into the buffer).
    fn tokenize(&mut self, begin: usize, end: usize);

    /// Produce the next token. Once EOF has been reported, every later
    /// call reports EOF again with the same line number.
    fn next_token(&mut self) -> Result<Token<'a>, TokenizeError>;

    /// How much of the current range has been consumed.
    fn progress(&self) -> Progress;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    Armed,
    Scanning,
    Exhausted,
}

/// Splits a byte range into line tokens.
pub struct LineTokenizer<'a, C = NeverCancel> {
    buf: &'a [u8],
    cursor: Cursor<'a>,
    line: u64,
    state: ScanState,
    config: TokenizerConfig,
    check: C,
}

impl<'a> LineTokenizer<'a, NeverCancel> {
    /// Tokenizer over all of `buf` that cannot be cancelled.
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_check(buf, NeverCancel)
    }
}

impl<'a, C: CancellationCheck> LineTokenizer<'a, C> {
    /// Tokenizer over all of `buf`, polling `check` at the default cadence.
    pub fn with_check(buf: &'a [u8], check: C) -> Self {
        Self::with_config(buf, TokenizerConfig::default(), check)
    }

    /// Tokenizer over all of `buf` with explicit configuration.
    pub fn with_config(buf: &'a [u8], config: TokenizerConfig, check: C) -> Self {
        Self {
            buf,
            cursor: Cursor::over(buf),
            line: 0,
            state: ScanState::Armed,
            config,
            check,
        }
    }

    /// Number of lines emitted so far (the line number of the next token).
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Returns `true` once EOF has been (or will next be) reported.
    pub fn is_exhausted(&self) -> bool {
        self.state == ScanState::Exhausted
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Poll the cancellation check if `line` falls on the cadence.
    fn poll_cancellation(&mut self) -> Result<(), TokenizeError> {
        let every = self.config.interrupt_every_lines;
        if every == 0 || (self.line + 1) % every != 0 {
            return Ok(());
        }
        tracing::trace!(line = self.line, offset = self.cursor.pos(), "polling cancellation");
        if self.check.is_cancelled() {
            let offset = self.cursor.pos();
            tracing::warn!(line = self.line, offset, "line scan cancelled");
            self.state = ScanState::Exhausted;
            return Err(TokenizeError::Cancelled {
                line: self.line,
                offset,
            });
        }
        Ok(())
    }
}

impl<'a, C: CancellationCheck> Tokenizer<'a> for LineTokenizer<'a, C> {
    fn tokenize(&mut self, begin: usize, end: usize) {
        self.cursor = Cursor::new(self.buf, begin, end);
        self.line = 0;
        self.state = ScanState::Armed;
    }

    fn next_token(&mut self) -> Result<Token<'a>, TokenizeError> {
        if self.state == ScanState::Exhausted || self.cursor.is_eof() {
            self.state = ScanState::Exhausted;
            return Ok(Token::eof(self.cursor.pos(), self.line));
        }
        self.state = ScanState::Scanning;
        self.poll_cancellation()?;

        let line = self.line;
        let start = self.cursor.pos();
        if self.cursor.eat_until_line_break().is_some() {
            let end = self.cursor.pos();
            self.cursor.eat_line_break();
            self.finish_line();
            return Ok(Token::field(
                self.cursor.slice(start, end),
                Span::new(start, end),
                line,
            ));
        }

        // Unterminated final line.
        self.finish_line();
        Ok(Token::field(
            self.cursor.slice_from(start),
            Span::new(start, self.cursor.pos()),
            line,
        ))
    }

    #[allow(
        clippy::cast_precision_loss,
        reason = "progress is a display ratio; sub-byte precision is irrelevant"
    )]
    fn progress(&self) -> Progress {
        let bytes = self.cursor.consumed();
        let total = self.cursor.len();
        let fraction = if total == 0 {
            if self.state == ScanState::Exhausted {
                1.0
            } else {
                0.0
            }
        } else {
            bytes as f64 / total as f64
        };
        Progress { fraction, bytes }
    }
}

impl<C> LineTokenizer<'_, C> {
    fn finish_line(&mut self) {
        self.line += 1;
        if self.cursor.is_eof() {
            self.state = ScanState::Exhausted;
        }
    }
}

/// Yields field tokens until EOF. A cancellation is yielded once as an
/// error, after which the iterator is fused.
impl<'a, C: CancellationCheck> Iterator for LineTokenizer<'a, C> {
    type Item = Result<Token<'a>, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            other => Some(other),
        }
    }
}
