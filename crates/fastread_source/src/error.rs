//! Error types for the read path.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while producing tokens.
///
/// Tokenization itself accepts every byte sequence; the only failure is
/// a cancellation requested by the host.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// The cancellation check fired before scanning `line`.
    #[error("tokenization cancelled before line {line} (byte offset {offset})")]
    Cancelled { line: u64, offset: usize },
}

/// Failure while materializing a [`SourceBuffer`](crate::SourceBuffer).
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot open source `{}`: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read failed after {bytes_read} bytes: {source}")]
    Read {
        bytes_read: usize,
        #[source]
        source: io::Error,
    },
}
