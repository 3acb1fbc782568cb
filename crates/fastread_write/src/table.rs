//! Named, equal-length columns.

use crate::column::Column;
use crate::error::EncodeError;

/// A column together with its header name.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedColumn {
    pub name: String,
    pub column: Column,
}

/// An ordered set of named columns sharing one row count.
///
/// Column order is emission order. The encoder only ever reads a table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<NamedColumn>,
    n_rows: usize,
}

impl Table {
    /// Build a table, taking the row count from the first column.
    ///
    /// A table without columns has zero rows.
    pub fn new<I, S>(columns: I) -> Result<Self, EncodeError>
    where
        I: IntoIterator<Item = (S, Column)>,
        S: Into<String>,
    {
        let columns: Vec<NamedColumn> = columns
            .into_iter()
            .map(|(name, column)| NamedColumn {
                name: name.into(),
                column,
            })
            .collect();
        let n_rows = columns.first().map_or(0, |c| c.column.len());
        Self::from_parts(columns, n_rows)
    }

    /// Build a table with a declared row count.
    ///
    /// Every column must have exactly `n_rows` values. A table without
    /// columns may declare any row count.
    pub fn with_row_count<I, S>(columns: I, n_rows: usize) -> Result<Self, EncodeError>
    where
        I: IntoIterator<Item = (S, Column)>,
        S: Into<String>,
    {
        let columns = columns
            .into_iter()
            .map(|(name, column)| NamedColumn {
                name: name.into(),
                column,
            })
            .collect();
        Self::from_parts(columns, n_rows)
    }

    fn from_parts(columns: Vec<NamedColumn>, n_rows: usize) -> Result<Self, EncodeError> {
        if let Some(bad) = columns.iter().find(|c| c.column.len() != n_rows) {
            return Err(EncodeError::LengthMismatch {
                column: bad.name.clone(),
                expected: n_rows,
                found: bad.column.len(),
            });
        }
        Ok(Self { columns, n_rows })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[NamedColumn] {
        &self.columns
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// First column called `name`.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.column)
    }

    /// Fail on the first column whose kind has no CSV rendering.
    pub fn check_encodable(&self) -> Result<(), EncodeError> {
        for named in &self.columns {
            let kind = named.column.kind();
            if !kind.is_encodable() {
                tracing::debug!(column = %named.name, kind = kind.type_name(), "unsupported column");
                return Err(EncodeError::UnsupportedType {
                    type_name: kind.type_name(),
                });
            }
        }
        Ok(())
    }
}
