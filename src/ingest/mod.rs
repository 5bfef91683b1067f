//! Tabular point ingestion.
//!
//! Reads comma-separated text with a header row and two numeric columns
//! (`lat` and `lng` by default) into [`Point`](crate::models::Point)s.
//! Malformed input is reported here; the optimizer never sees it.

mod csv;

pub use csv::{parse_points, read_points, ColumnNames};
