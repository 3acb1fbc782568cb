//! Typed columns.
//!
//! Each variant is a dense sequence of values where `None` is the
//! variant's missing (NA) sentinel. For doubles, `None` (NA) and
//! `Some(NaN)` are distinct values and encode differently.
//!
//! `Complex` and `Raw` exist so host tables can be represented as-is; they
//! have no CSV rendering and fail encoding with
//! [`EncodeError::UnsupportedType`](crate::EncodeError::UnsupportedType).

/// A complex number, as stored by hosts with a native complex vector type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

/// One column of a [`Table`](crate::Table).
#[derive(Clone, Debug, PartialEq)]
pub enum Column {
    Logical(Vec<Option<bool>>),
    Integer(Vec<Option<i32>>),
    Double(Vec<Option<f64>>),
    String(Vec<Option<String>>),
    Complex(Vec<Option<Complex>>),
    Raw(Vec<u8>),
}

/// Value kind of a [`Column`], without its data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Logical,
    Integer,
    Double,
    String,
    Complex,
    Raw,
}

impl ColumnKind {
    /// Host type name, used in error messages.
    pub fn type_name(self) -> &'static str {
        match self {
            ColumnKind::Logical => "logical",
            ColumnKind::Integer => "integer",
            ColumnKind::Double => "double",
            ColumnKind::String => "character",
            ColumnKind::Complex => "complex",
            ColumnKind::Raw => "raw",
        }
    }

    /// Returns `true` if cells of this kind have a CSV rendering.
    pub fn is_encodable(self) -> bool {
        match self {
            ColumnKind::Logical | ColumnKind::Integer | ColumnKind::Double | ColumnKind::String => {
                true
            }
            ColumnKind::Complex | ColumnKind::Raw => false,
        }
    }
}

impl Column {
    pub fn kind(&self) -> ColumnKind {
        match self {
            Column::Logical(_) => ColumnKind::Logical,
            Column::Integer(_) => ColumnKind::Integer,
            Column::Double(_) => ColumnKind::Double,
            Column::String(_) => ColumnKind::String,
            Column::Complex(_) => ColumnKind::Complex,
            Column::Raw(_) => ColumnKind::Raw,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Logical(v) => v.len(),
            Column::Integer(v) => v.len(),
            Column::Double(v) => v.len(),
            Column::String(v) => v.len(),
            Column::Complex(v) => v.len(),
            Column::Raw(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the cell at `row` holds the missing sentinel.
    ///
    /// Raw bytes have no missing sentinel. Out-of-range rows return `false`.
    pub fn is_missing(&self, row: usize) -> bool {
        match self {
            Column::Logical(v) => matches!(v.get(row), Some(None)),
            Column::Integer(v) => matches!(v.get(row), Some(None)),
            Column::Double(v) => matches!(v.get(row), Some(None)),
            Column::String(v) => matches!(v.get(row), Some(None)),
            Column::Complex(v) => matches!(v.get(row), Some(None)),
            Column::Raw(_) => false,
        }
    }
}

impl From<Vec<Option<bool>>> for Column {
    fn from(values: Vec<Option<bool>>) -> Self {
        Column::Logical(values)
    }
}

impl From<Vec<Option<i32>>> for Column {
    fn from(values: Vec<Option<i32>>) -> Self {
        Column::Integer(values)
    }
}

impl From<Vec<Option<f64>>> for Column {
    fn from(values: Vec<Option<f64>>) -> Self {
        Column::Double(values)
    }
}

impl From<Vec<Option<String>>> for Column {
    fn from(values: Vec<Option<String>>) -> Self {
        Column::String(values)
    }
}

impl From<Vec<Option<&str>>> for Column {
    fn from(values: Vec<Option<&str>>) -> Self {
        Column::String(values.into_iter().map(|v| v.map(str::to_owned)).collect())
    }
}
