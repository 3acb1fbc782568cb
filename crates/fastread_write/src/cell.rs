//! Per-cell text rendering.
//!
//! All output is locale-independent and uses `.` as the decimal
//! separator:
//!
//! | kind      | value            | text                          |
//! |-----------|------------------|-------------------------------|
//! | logical   | true / false     | `TRUE` / `FALSE`              |
//! | integer   | `n`              | decimal digits                |
//! | double    | NaN / ±Inf       | `NaN` / `Inf` / `-Inf`        |
//! | double    | finite `x`       | shortest round-trip decimal   |
//! | character | `s`              | `"s"` with `"` doubled        |
//! | any       | missing          | `NA`, never quoted            |
//!
//! Doubles with `1e-5 <= |x| < 1e15` (and zero) print in plain notation;
//! anything else prints in exponent notation (`1e300`, `2.5e-7`). Both
//! forms parse back to the identical `f64`.

use std::fmt::Write;

use crate::column::Column;
use crate::error::EncodeError;

pub const NA: &str = "NA";
pub const TRUE: &str = "TRUE";
pub const FALSE: &str = "FALSE";
pub const NAN: &str = "NaN";
pub const INF: &str = "Inf";
pub const NEG_INF: &str = "-Inf";
pub const QUOTE: char = '"';

/// Smallest magnitude printed in plain notation.
const PLAIN_MIN: f64 = 1e-5;
/// Magnitudes from here up print in exponent notation.
const PLAIN_MAX: f64 = 1e15;

/// Render the cell at `row` of `column`.
pub fn encode_cell(column: &Column, row: usize) -> Result<String, EncodeError> {
    let mut out = String::new();
    write_cell(&mut out, column, row)?;
    Ok(out)
}

/// Append the cell at `row` of `column` to `out`.
pub fn write_cell<W: Write>(out: &mut W, column: &Column, row: usize) -> Result<(), EncodeError> {
    let out_of_range = || EncodeError::RowOutOfRange {
        row,
        len: column.len(),
    };
    match column {
        Column::Logical(values) => {
            let value = values.get(row).ok_or_else(out_of_range)?;
            out.write_str(match value {
                Some(true) => TRUE,
                Some(false) => FALSE,
                None => NA,
            })?;
        }
        Column::Integer(values) => match values.get(row).ok_or_else(out_of_range)? {
            Some(value) => write!(out, "{value}")?,
            None => out.write_str(NA)?,
        },
        Column::Double(values) => {
            write_double(out, *values.get(row).ok_or_else(out_of_range)?)?;
        }
        Column::String(values) => match values.get(row).ok_or_else(out_of_range)? {
            Some(value) => write_quoted(out, value)?,
            None => out.write_str(NA)?,
        },
        Column::Complex(_) | Column::Raw(_) => {
            return Err(EncodeError::UnsupportedType {
                type_name: column.kind().type_name(),
            })
        }
    }
    Ok(())
}

/// Append a double (or its NA / special-value literal) to `out`.
pub fn write_double<W: Write>(out: &mut W, value: Option<f64>) -> std::fmt::Result {
    let Some(value) = value else {
        return out.write_str(NA);
    };
    if value.is_nan() {
        return out.write_str(NAN);
    }
    if value.is_infinite() {
        return out.write_str(if value > 0.0 { INF } else { NEG_INF });
    }
    let magnitude = value.abs();
    if magnitude == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        write!(out, "{value}")
    } else {
        write!(out, "{value:e}")
    }
}

/// Append `text` wrapped in double quotes, doubling embedded quotes.
///
/// Nothing else is escaped: delimiters, newlines and control bytes pass
/// through inside the quotes.
pub fn write_quoted<W: Write>(out: &mut W, text: &str) -> std::fmt::Result {
    out.write_char(QUOTE)?;
    let mut parts = text.split(QUOTE);
    if let Some(first) = parts.next() {
        out.write_str(first)?;
    }
    for part in parts {
        out.write_str("\"\"")?;
        out.write_str(part)?;
    }
    out.write_char(QUOTE)
}
