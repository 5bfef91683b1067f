//! Header-addressed CSV parsing.
//!
//! RFC 4180 style records: comma separators, double-quoted cells that may
//! hold commas, line breaks and `""` escapes, `\n` or `\r\n` row ends.
//! The first record is the header; blank lines are skipped.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Point;

const BOM: char = '\u{feff}';

/// Header names of the latitude and longitude columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnNames {
    pub lat: String,
    pub lng: String,
}

impl ColumnNames {
    pub fn new(lat: impl Into<String>, lng: impl Into<String>) -> Self {
        Self {
            lat: lat.into(),
            lng: lng.into(),
        }
    }
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self::new("lat", "lng")
    }
}

/// Parses CSV text into points, in row order.
///
/// # Errors
///
/// [`Error::EmptyInput`] without a header line, [`Error::MissingColumn`]
/// when a configured column is absent from the header, and
/// [`Error::MissingField`] / [`Error::InvalidNumber`] for bad rows (line
/// numbers are 1-based).
///
/// # Examples
///
/// ```
/// use u_route_nn::ingest::{parse_points, ColumnNames};
/// use u_route_nn::models::Point;
///
/// let csv = "name,lng,lat\nA,2.5,1.0\nB,4.0,3.0\n";
/// let points = parse_points(csv, &ColumnNames::default()).unwrap();
/// assert_eq!(points, vec![Point::new(1.0, 2.5), Point::new(3.0, 4.0)]);
/// ```
pub fn parse_points(input: &str, columns: &ColumnNames) -> Result<Vec<Point>> {
    let input = input.strip_prefix(BOM).unwrap_or(input);
    let mut records = split_records(input).into_iter();

    let header = records.next().ok_or(Error::EmptyInput)?;
    let lat_idx = column_index(&header.cells, &columns.lat)?;
    let lng_idx = column_index(&header.cells, &columns.lng)?;

    let mut points = Vec::new();
    for record in records {
        let lat = field(&record, lat_idx, &columns.lat)?;
        let lng = field(&record, lng_idx, &columns.lng)?;
        points.push(Point::new(lat, lng));
    }

    Ok(points)
}

/// Reads all of `reader` as UTF-8 and parses it with [`parse_points`].
pub fn read_points<R: Read>(mut reader: R, columns: &ColumnNames) -> Result<Vec<Point>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes)?;
    parse_points(&text, columns)
}

/// One CSV record and the 1-based line it starts on.
#[derive(Debug, PartialEq)]
struct Record {
    line: usize,
    cells: Vec<String>,
}

#[derive(Default)]
struct CellBuf {
    text: String,
    quoted: bool,
}

impl CellBuf {
    /// Unquoted cells are trimmed; quoted cells keep their content as is.
    fn finish(&mut self) -> String {
        let text = std::mem::take(&mut self.text);
        if std::mem::take(&mut self.quoted) {
            text
        } else {
            text.trim().to_owned()
        }
    }
}

fn split_records(input: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut cells = Vec::new();
    let mut cell = CellBuf::default();
    let mut in_quotes = false;
    let mut line = 1;
    let mut start_line = 1;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.text.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    cell.text.push(c);
                }
                _ => cell.text.push(c),
            }
            continue;
        }

        match c {
            '"' if !cell.quoted && cell.text.trim().is_empty() => {
                cell.text.clear();
                cell.quoted = true;
                in_quotes = true;
            }
            ',' => cells.push(cell.finish()),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                cells.push(cell.finish());
                push_record(&mut records, start_line, std::mem::take(&mut cells));
                line += 1;
                start_line = line;
            }
            c if cell.quoted && c.is_whitespace() => {}
            _ => cell.text.push(c),
        }
    }

    if !cells.is_empty() || cell.quoted || !cell.text.trim().is_empty() {
        cells.push(cell.finish());
        push_record(&mut records, start_line, cells);
    }
    records
}

fn push_record(records: &mut Vec<Record>, line: usize, cells: Vec<String>) {
    let blank = cells.len() == 1 && cells[0].is_empty();
    if !blank {
        records.push(Record { line, cells });
    }
}

fn column_index(header: &[String], name: &str) -> Result<usize> {
    header
        .iter()
        .position(|h| *h == name)
        .ok_or_else(|| Error::MissingColumn(name.to_owned()))
}

fn field(record: &Record, idx: usize, column: &str) -> Result<f64> {
    let raw = match record.cells.get(idx).map(|c| c.trim()) {
        Some(raw) if !raw.is_empty() => raw,
        _ => {
            return Err(Error::MissingField {
                line: record.line,
                column: column.to_owned(),
            })
        }
    };
    raw.parse().map_err(|_| Error::InvalidNumber {
        line: record.line,
        column: column.to_owned(),
        value: raw.to_owned(),
    })
}
