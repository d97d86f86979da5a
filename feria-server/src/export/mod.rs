//! Collection export
//!
//! CSV files in the layout the spreadsheet users already rely on: BOM,
//! bare header line, every value quoted, CRLF between lines.

pub mod csv;

pub use csv::{ExportError, export_filename, to_csv};
