//! Output sinks for encoded text.
//!
//! A [`Sink`] accepts text and is finalized exactly once. Three
//! implementations cover the destinations the encoder writes to:
//!
//! - [`MemorySink`]: growable in-memory buffer, returned as a `String`
//! - [`FileSink`]: buffered file opened in truncate or append mode
//! - [`WriterSink`]: any blocking [`std::io::Write`] channel
//!
//! File sinks flush on drop, so an encode that fails part-way still
//! releases the file with everything written so far.

use std::borrow::Cow;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Destination for encoded text.
pub trait Sink {
    /// What [`finish`](Sink::finish) hands back.
    type Output;

    /// Append `text`.
    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// Flush and release the destination.
    fn finish(self) -> io::Result<Self::Output>;

    /// Human-readable destination, used in error messages.
    fn describe(&self) -> Cow<'_, str>;
}

/// How an existing file destination is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace any existing contents.
    #[default]
    Truncate,
    /// Keep existing contents and write after them.
    Append,
}

impl WriteMode {
    pub fn from_append(append: bool) -> Self {
        if append {
            WriteMode::Append
        } else {
            WriteMode::Truncate
        }
    }
}

/// Accumulates text in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    buf: String,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl Sink for MemorySink {
    type Output = String;

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.buf.push_str(text);
        Ok(())
    }

    fn finish(self) -> io::Result<String> {
        Ok(self.buf)
    }

    fn describe(&self) -> Cow<'_, str> {
        Cow::Borrowed("memory buffer")
    }
}

/// Buffered file destination.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileSink {
    /// Open `path` for writing, creating it if needed.
    pub fn open(path: impl AsRef<Path>, mode: WriteMode) -> io::Result<Self> {
        let path = path.as_ref();
        let mut options = OpenOptions::new();
        options.create(true);
        match mode {
            WriteMode::Truncate => options.write(true).truncate(true),
            WriteMode::Append => options.append(true),
        };
        let file = options.open(path)?;
        tracing::debug!(path = %path.display(), ?mode, "opened file sink");
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    type Output = ();

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    fn finish(mut self) -> io::Result<()> {
        self.writer.flush()?;
        // Dropping the flushed writer closes the file.
        Ok(())
    }

    fn describe(&self) -> Cow<'_, str> {
        Cow::Owned(format!("`{}`", self.path.display()))
    }
}

/// Write channel: forwards text to any [`Write`] implementation.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Sink for WriterSink<W> {
    type Output = W;

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn describe(&self) -> Cow<'_, str> {
        Cow::Borrowed("writer")
    }
}
