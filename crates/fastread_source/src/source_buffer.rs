//! Owned source bytes, materialized from memory, a reader, or a file.
//!
//! Any byte sequence is accepted: the tokenizers never reject input. The
//! only inspection done at construction is UTF-8 byte order mark
//! detection, so parsers can start tokenizing after it.
//!
//! # Read Channel
//!
//! [`SourceBuffer::from_reader`] drains a blocking, partial-read-capable
//! byte source in bounded chunks until a read returns 0. Files go through
//! the same path via [`SourceBuffer::from_path`].

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::ops::Range;
use std::path::Path;

use crate::cancel::CancellationCheck;
use crate::cursor::Cursor;
use crate::error::SourceError;
use crate::tokenizer::{LineTokenizer, Tokenizer, TokenizerConfig};

/// Bytes requested per read when draining a reader.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// UTF-8 byte order mark.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Immutable source bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceBuffer {
    bytes: Vec<u8>,
    /// Length of a leading UTF-8 BOM (0 or 3).
    bom_len: usize,
}

impl SourceBuffer {
    /// Take ownership of (or copy) `bytes`.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        let bom_len = if bytes.starts_with(UTF8_BOM) {
            UTF8_BOM.len()
        } else {
            0
        };
        Self { bytes, bom_len }
    }

    /// Drain `reader` in reads of at most `chunk_size` bytes.
    ///
    /// Interrupted reads are retried; any other read error aborts with
    /// the number of bytes collected so far.
    #[tracing::instrument(level = "debug", skip(reader))]
    pub fn from_reader<R: Read>(mut reader: R, chunk_size: usize) -> Result<Self, SourceError> {
        let mut bytes = Vec::new();
        let mut chunk = vec![0u8; chunk_size.max(1)];
        let mut reads = 0usize;
        loop {
            match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => {
                    bytes.extend_from_slice(&chunk[..n]);
                    reads += 1;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(source) => {
                    return Err(SourceError::Read {
                        bytes_read: bytes.len(),
                        source,
                    })
                }
            }
        }
        tracing::debug!(bytes = bytes.len(), reads, "source materialized");
        Ok(Self::new(bytes))
    }

    /// Read the whole file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, DEFAULT_CHUNK_SIZE)
    }

    /// All source bytes, including any BOM.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Length of the leading UTF-8 BOM: 3 if present, else 0.
    pub fn bom_len(&self) -> usize {
        self.bom_len
    }

    /// Byte range after any BOM.
    pub fn content_range(&self) -> Range<usize> {
        self.bom_len..self.bytes.len()
    }

    /// Cursor over [`content_range`](Self::content_range).
    pub fn cursor(&self) -> Cursor<'_> {
        let range = self.content_range();
        Cursor::new(&self.bytes, range.start, range.end)
    }

    /// Line tokenizer armed over [`content_range`](Self::content_range).
    pub fn tokenizer<C: CancellationCheck>(&self, check: C) -> LineTokenizer<'_, C> {
        self.tokenizer_with_config(TokenizerConfig::default(), check)
    }

    /// Like [`tokenizer`](Self::tokenizer) with explicit configuration.
    pub fn tokenizer_with_config<C: CancellationCheck>(
        &self,
        config: TokenizerConfig,
        check: C,
    ) -> LineTokenizer<'_, C> {
        let mut tokenizer = LineTokenizer::with_config(&self.bytes, config, check);
        let range = self.content_range();
        tokenizer.tokenize(range.start, range.end);
        tokenizer
    }
}
