//! Read path of `fastread`: source buffers and the line tokenizer.
//!
//! A [`SourceBuffer`] owns the raw bytes. A [`LineTokenizer`] borrows them
//! and hands out zero-copy [`Token`]s, one per line, until it reports EOF.
//! Long scans poll an injected [`CancellationCheck`] so the host can abort
//! them.
//!
//! ```
//! use fastread_source::{NeverCancel, SourceBuffer, Tokenizer};
//!
//! let source = SourceBuffer::new("a,b\r\nc,d\n");
//! let mut tokenizer = source.tokenizer(NeverCancel);
//! let first = tokenizer.next_token()?;
//! assert_eq!(first.bytes(), b"a,b");
//! # Ok::<(), fastread_source::TokenizeError>(())
//! ```

mod cancel;
mod cursor;
mod error;
mod source_buffer;
mod token;
mod tokenizer;

pub use cancel::{CancelFlag, CancellationCheck, NeverCancel};
pub use cursor::Cursor;
pub use error::{SourceError, TokenizeError};
pub use source_buffer::{SourceBuffer, DEFAULT_CHUNK_SIZE};
pub use token::{Span, Token, TokenKind};
pub use tokenizer::{
    LineTokenizer, Progress, Tokenizer, TokenizerConfig, DEFAULT_INTERRUPT_EVERY_LINES,
};
