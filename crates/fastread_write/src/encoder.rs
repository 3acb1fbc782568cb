//! Row and table encoding.
//!
//! [`RowEncoder`] renders one record at a time into a reusable buffer;
//! [`TableEncoder`] drives it over a whole table and streams every record
//! into a [`Sink`].

use crate::cell::{write_cell, write_quoted};
use crate::error::EncodeError;
use crate::options::WriteOptions;
use crate::sink::Sink;
use crate::table::Table;

/// Separator between fields of a record.
pub const FIELD_SEPARATOR: char = ',';
/// Terminator of every record, the last one included.
pub const RECORD_SEPARATOR: char = '\n';

/// Renders records of one table.
///
/// The returned `&str` borrows an internal buffer that is reused by the
/// next call.
#[derive(Debug)]
pub struct RowEncoder<'t> {
    table: &'t Table,
    buf: String,
}

impl<'t> RowEncoder<'t> {
    pub fn new(table: &'t Table) -> Self {
        Self {
            table,
            buf: String::new(),
        }
    }

    /// The header record: every column name, always quoted.
    pub fn header(&mut self) -> Result<&str, EncodeError> {
        self.buf.clear();
        for (j, named) in self.table.columns().iter().enumerate() {
            if j > 0 {
                self.buf.push(FIELD_SEPARATOR);
            }
            write_quoted(&mut self.buf, &named.name)?;
        }
        self.buf.push(RECORD_SEPARATOR);
        Ok(&self.buf)
    }

    /// The data record at `row`.
    pub fn row(&mut self, row: usize) -> Result<&str, EncodeError> {
        self.buf.clear();
        for (j, named) in self.table.columns().iter().enumerate() {
            if j > 0 {
                self.buf.push(FIELD_SEPARATOR);
            }
            write_cell(&mut self.buf, &named.column, row)?;
        }
        self.buf.push(RECORD_SEPARATOR);
        Ok(&self.buf)
    }
}

/// Streams a whole table as CSV.
#[derive(Clone, Copy, Debug)]
pub struct TableEncoder<'t> {
    table: &'t Table,
    options: WriteOptions,
}

impl<'t> TableEncoder<'t> {
    /// Encoder for `table`, failing on the first column kind with no CSV
    /// rendering. No sink is involved yet, so a rejected table never
    /// produces partial output.
    pub fn new(table: &'t Table, options: WriteOptions) -> Result<Self, EncodeError> {
        table.check_encodable()?;
        Ok(Self { table, options })
    }

    /// Write the table to `sink`, returning the number of bytes written.
    ///
    /// A table without columns writes nothing, whatever its row count.
    pub fn encode_to<S: Sink>(&self, sink: &mut S) -> Result<usize, EncodeError> {
        if self.table.n_cols() == 0 {
            tracing::debug!(n_rows = self.table.n_rows(), "table has no columns, nothing to write");
            return Ok(0);
        }

        let mut rows = RowEncoder::new(self.table);
        let mut written = 0;
        if self.options.col_names {
            written += emit(sink, rows.header()?)?;
        }
        for row in 0..self.table.n_rows() {
            written += emit(sink, rows.row(row)?)?;
        }
        tracing::debug!(
            n_rows = self.table.n_rows(),
            n_cols = self.table.n_cols(),
            bytes = written,
            "table encoded"
        );
        Ok(written)
    }
}

fn emit<S: Sink>(sink: &mut S, record: &str) -> Result<usize, EncodeError> {
    sink.write_str(record).map_err(|source| EncodeError::Sink {
        target: sink.describe().into_owned(),
        source,
    })?;
    Ok(record.len())
}

#[cfg(test)]
mod tests;
