// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::borrow::Cow;
use std::io;

use super::*;
use crate::column::{Column, Complex};
use crate::sink::MemorySink;
use pretty_assertions::assert_eq;

fn mixed_table() -> Table {
    Table::new([
        ("flag", Column::from(vec![Some(true), None, Some(false)])),
        ("count", Column::from(vec![Some(1), Some(-2), None])),
        ("score", Column::from(vec![Some(0.5), Some(f64::NAN), None])),
        ("label", Column::from(vec![Some("a \"b\""), None, Some("")])),
    ])
    .unwrap()
}

fn encode(table: &Table, options: WriteOptions) -> String {
    let mut sink = MemorySink::new();
    TableEncoder::new(table, options)
        .unwrap()
        .encode_to(&mut sink)
        .unwrap();
    sink.into_string()
}

// === RowEncoder ===

#[test]
fn header_quotes_every_name() {
    let table = Table::new([
        ("plain", Column::from(vec![Some(1)])),
        ("has \"quote\"", Column::from(vec![Some(2)])),
    ])
    .unwrap();
    let mut rows = RowEncoder::new(&table);
    assert_eq!(rows.header().unwrap(), "\"plain\",\"has \"\"quote\"\"\"\n");
}

#[test]
fn row_joins_cells() {
    let table = mixed_table();
    let mut rows = RowEncoder::new(&table);
    assert_eq!(rows.row(0).unwrap(), "TRUE,1,0.5,\"a \"\"b\"\"\"\n");
    assert_eq!(rows.row(1).unwrap(), "NA,-2,NaN,NA\n");
    assert_eq!(rows.row(2).unwrap(), "FALSE,NA,NA,\"\"\n");
}

#[test]
fn single_column_row_has_no_separator() {
    let table = Table::new([("x", Column::from(vec![Some(7)]))]).unwrap();
    let mut rows = RowEncoder::new(&table);
    assert_eq!(rows.row(0).unwrap(), "7\n");
}

// === TableEncoder ===

#[test]
fn table_with_header() {
    assert_eq!(
        encode(&mixed_table(), WriteOptions::default()),
        concat!(
            "\"flag\",\"count\",\"score\",\"label\"\n",
            "TRUE,1,0.5,\"a \"\"b\"\"\"\n",
            "NA,-2,NaN,NA\n",
            "FALSE,NA,NA,\"\"\n",
        )
    );
}

#[test]
fn table_without_header_has_one_line_per_row() {
    let options = WriteOptions {
        col_names: false,
        ..WriteOptions::default()
    };
    let text = encode(&mixed_table(), options);
    assert_eq!(text.lines().count(), 3);
    assert!(text.starts_with("TRUE,"));
    assert!(text.ends_with("\"\"\n"));
    assert!(!text.ends_with("\n\n"));
}

#[test]
fn zero_columns_write_nothing() {
    let table = Table::with_row_count(Vec::<(String, Column)>::new(), 5).unwrap();
    assert_eq!(encode(&table, WriteOptions::default()), "");
}

#[test]
fn zero_rows_write_only_header() {
    let table = Table::new([("a", Column::Integer(Vec::new()))]).unwrap();
    assert_eq!(encode(&table, WriteOptions::default()), "\"a\"\n");
}

#[test]
fn byte_count_matches_output() {
    let table = mixed_table();
    let mut sink = MemorySink::new();
    let written = TableEncoder::new(&table, WriteOptions::default())
        .unwrap()
        .encode_to(&mut sink)
        .unwrap();
    assert_eq!(written, sink.as_str().len());
}

#[test]
fn unsupported_column_is_rejected_at_construction() {
    let table = Table::new([
        ("ok", Column::from(vec![Some(1)])),
        ("c", Column::Complex(vec![Some(Complex { re: 1.0, im: 1.0 })])),
    ])
    .unwrap();
    let err = TableEncoder::new(&table, WriteOptions::default()).unwrap_err();
    assert!(matches!(err, EncodeError::UnsupportedType { type_name: "complex" }));
}

#[test]
fn raw_column_is_rejected_at_construction() {
    let table = Table::new([("bytes", Column::Raw(vec![0, 1, 2]))]).unwrap();
    let err = TableEncoder::new(&table, WriteOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "don't know how to handle vector of type raw");
}

/// Sink that accepts `capacity` records and then fails.
struct FailingSink {
    accepted: Vec<String>,
    capacity: usize,
}

impl Sink for FailingSink {
    type Output = Vec<String>;

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        if self.accepted.len() == self.capacity {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "disk full"));
        }
        self.accepted.push(text.to_owned());
        Ok(())
    }

    fn finish(self) -> io::Result<Vec<String>> {
        Ok(self.accepted)
    }

    fn describe(&self) -> Cow<'_, str> {
        Cow::Borrowed("failing sink")
    }
}

#[test]
fn sink_failure_aborts_and_keeps_partial_output() {
    let table = mixed_table();
    let mut sink = FailingSink {
        accepted: Vec::new(),
        capacity: 2,
    };
    let err = TableEncoder::new(&table, WriteOptions::default())
        .unwrap()
        .encode_to(&mut sink)
        .unwrap_err();
    match &err {
        EncodeError::Sink { target, source } => {
            assert_eq!(target, "failing sink");
            assert_eq!(source.kind(), io::ErrorKind::WriteZero);
        }
        other => panic!("expected sink error, got {other:?}"),
    }
    assert_eq!(err.to_string(), "cannot write to failing sink: disk full");
    // Header and first row made it out; no rollback.
    assert_eq!(sink.finish().unwrap().len(), 2);
}
