//! Error types for the write path.

use std::{fmt, io};

use thiserror::Error;

/// Failure while building or encoding a table.
///
/// Every variant is fatal to the enclosing call; nothing is retried.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// A column kind has no CSV rendering.
    #[error("don't know how to handle vector of type {type_name}")]
    UnsupportedType { type_name: &'static str },

    #[error("column `{column}` has {found} values, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("row {row} is out of range for a column of {len} values")]
    RowOutOfRange { row: usize, len: usize },

    /// The destination could not be opened, written, or finalized.
    #[error("cannot write to {target}: {source}")]
    Sink {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to format cell")]
    Format(#[from] fmt::Error),
}
