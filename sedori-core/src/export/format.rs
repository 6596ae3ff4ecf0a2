use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ExportError;

/// Whether a target format can store live formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormulaSupport {
    /// Formulas are written as formulas and recompute when the file is edited.
    Live,
    /// Formulas are replaced by their precomputed values.
    NumericOnly,
}

/// Spreadsheet file formats an export can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Csv, ExportFormat::Xlsx]
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    pub fn formula_support(&self) -> FormulaSupport {
        match self {
            ExportFormat::Csv => FormulaSupport::NumericOnly,
            ExportFormat::Xlsx => FormulaSupport::Live,
        }
    }

    /// `base_name` with this format's extension appended.
    pub fn file_name(
        &self,
        base_name: &str,
    ) -> String {
        format!("{base_name}.{}", self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    /// Case-insensitive; surrounding whitespace and a leading dot are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" => Ok(ExportFormat::Xlsx),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}
