use rust_decimal::Decimal;
use thiserror::Error;

use super::ExportFormat;

/// Failures while building or saving an export file.
///
/// None of these touch the ledger the table was built from.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("no writer registered for format '{0}'")]
    UnsupportedFormat(ExportFormat),

    #[error("unknown export format '{0}' (expected csv or xlsx)")]
    UnknownFormat(String),

    #[error("value {0} cannot be stored as a spreadsheet number")]
    NumberConversion(Decimal),

    #[error("row {0} is beyond the sheet size limit")]
    SheetLimit(usize),
}
