//! Write path of `fastread`: typed columns encoded as CSV.
//!
//! A [`Table`] holds equally long named [`Column`]s. [`write_csv`] renders
//! it as comma-separated text, either returned in memory or streamed to a
//! file. Missing values print as a bare `NA`, strings are always quoted,
//! and doubles use the shortest text that parses back to the same value.
//!
//! ```
//! use fastread_write::{write_csv, Column, Destination, Table, WriteOptions};
//!
//! let table = Table::new([
//!     ("id", Column::from(vec![Some(1), None])),
//!     ("name", Column::from(vec![Some("x"), Some("y \"z\"")])),
//! ])?;
//! let text = write_csv(&table, &Destination::Memory, &WriteOptions::default())?;
//! assert_eq!(text, "\"id\",\"name\"\n1,\"x\"\nNA,\"y \"\"z\"\"\"\n");
//! # Ok::<(), fastread_write::EncodeError>(())
//! ```

mod cell;
mod column;
mod encoder;
mod error;
mod options;
mod sink;
mod table;

pub use cell::{encode_cell, write_double, write_quoted, INF, NA, NAN, NEG_INF};
pub use column::{Column, ColumnKind, Complex};
pub use encoder::{RowEncoder, TableEncoder, FIELD_SEPARATOR, RECORD_SEPARATOR};
pub use error::EncodeError;
pub use options::{Destination, WriteOptions};
pub use sink::{FileSink, MemorySink, Sink, WriteMode, WriterSink};
pub use table::{NamedColumn, Table};

/// Encode `table` as CSV.
///
/// With [`Destination::Memory`] (or an empty path) the text is returned.
/// With a file path the text is streamed to the file and an empty string
/// is returned; the file is opened before any row is rendered, truncated
/// unless `options.append` is set. Unsupported column kinds are rejected
/// before the destination is touched.
///
/// # Errors
///
/// [`EncodeError::UnsupportedType`] for a column with no CSV rendering,
/// [`EncodeError::Sink`] when the file cannot be opened, written, or
/// flushed.
#[tracing::instrument(
    level = "debug",
    skip(table, options),
    fields(n_rows = table.n_rows(), n_cols = table.n_cols())
)]
pub fn write_csv(
    table: &Table,
    destination: &Destination,
    options: &WriteOptions,
) -> Result<String, EncodeError> {
    let encoder = TableEncoder::new(table, *options)?;

    let Some(path) = destination.file_path() else {
        let mut sink = MemorySink::new();
        encoder.encode_to(&mut sink)?;
        return Ok(sink.into_string());
    };

    let target = || format!("`{}`", path.display());
    let mut sink = FileSink::open(path, WriteMode::from_append(options.append)).map_err(
        |source| EncodeError::Sink {
            target: target(),
            source,
        },
    )?;
    encoder.encode_to(&mut sink)?;
    sink.finish().map_err(|source| EncodeError::Sink {
        target: target(),
        source,
    })?;
    Ok(String::new())
}
