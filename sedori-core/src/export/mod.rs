//! Spreadsheet export of a session ledger.
//!
//! [`ExportTable`] is the format-neutral sheet: a header row, one row per
//! ledger entry and a cash-profit summary cell. A [`TableWriter`] turns it
//! into file bytes for one [`ExportFormat`]; [`WriterRegistry`] picks the
//! writer and wraps the bytes in a downloadable [`ExportArtifact`].

mod artifact;
mod cell;
mod column;
mod csv_writer;
mod error;
mod format;
mod registry;
mod table;
mod xlsx_writer;

pub use artifact::{DEFAULT_BASE_NAME, ExportArtifact};
pub use cell::Cell;
pub use column::{Column, column_letter};
pub use csv_writer::CsvTableWriter;
pub use error::ExportError;
pub use format::{ExportFormat, FormulaSupport};
pub use registry::{TableWriter, WriterRegistry};
pub use table::{ExportTable, SUMMARY_LABEL, SummaryCell};
pub use xlsx_writer::{SHEET_NAME, XlsxTableWriter};
