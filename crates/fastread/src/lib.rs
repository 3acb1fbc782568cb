//! `fastread`: streaming line tokenization and typed CSV writing.
//!
//! The read path lives in [`fastread_source`] and the write path in
//! [`fastread_write`]; both are re-exported here. Text produced by
//! [`write_csv`] tokenizes back into exactly one line per record with
//! [`LineTokenizer`].
//!
//! ```
//! use fastread::{write_csv, Column, Destination, NeverCancel, SourceBuffer, Table, WriteOptions};
//!
//! let table = Table::new([("n", Column::from(vec![Some(1), None, Some(3)]))])?;
//! let text = write_csv(&table, &Destination::Memory, &WriteOptions::default())?;
//!
//! let source = SourceBuffer::new(text);
//! let lines = source.tokenizer(NeverCancel).collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(lines.len(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::sync::Once;

pub use fastread_source::{
    CancelFlag, CancellationCheck, Cursor, LineTokenizer, NeverCancel, Progress, SourceBuffer,
    SourceError, Span, Token, TokenKind, TokenizeError, Tokenizer, TokenizerConfig,
    DEFAULT_CHUNK_SIZE, DEFAULT_INTERRUPT_EVERY_LINES,
};
pub use fastread_write::{
    encode_cell, write_csv, Column, ColumnKind, Complex, Destination, EncodeError, FileSink,
    MemorySink, NamedColumn, RowEncoder, Sink, Table, TableEncoder, WriteMode, WriteOptions,
    WriterSink,
};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber driven by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once;
/// only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A host may already own the global subscriber.
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init()
                .is_ok();
            tracing::debug!(installed, "fastread tracing initialized");
        }
    });
}
