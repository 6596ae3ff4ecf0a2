use std::collections::HashMap;

use tracing::{error, info};

use super::{
    CsvTableWriter, ExportArtifact, ExportError, ExportFormat, ExportTable, XlsxTableWriter,
};

/// One implementation per spreadsheet format. Each writer is registered
/// with a [`WriterRegistry`] at startup.
pub trait TableWriter: Send + Sync {
    /// The format this writer produces.
    fn format(&self) -> ExportFormat;

    /// Serialize `table` into the bytes of a complete file.
    fn write(
        &self,
        table: &ExportTable,
    ) -> Result<Vec<u8>, ExportError>;
}

/// Registry of [`TableWriter`] instances, keyed by format.
///
/// Typical lifetime:
/// 1. Create with `WriterRegistry::with_defaults()` (or `new()` + `register`).
/// 2. Call `export` whenever a download is requested.
pub struct WriterRegistry {
    writers: HashMap<ExportFormat, Box<dyn TableWriter>>,
}

impl WriterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            writers: HashMap::new(),
        }
    }

    /// A registry with the CSV and XLSX writers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(CsvTableWriter));
        registry.register(Box::new(XlsxTableWriter));
        registry
    }

    /// Register a writer.
    ///
    /// If a writer for the same [`TableWriter::format`] is already present it
    /// is silently replaced.
    pub fn register(
        &mut self,
        writer: Box<dyn TableWriter>,
    ) {
        self.writers.insert(writer.format(), writer);
    }

    /// Every registered format, in extension order.
    pub fn available_formats(&self) -> Vec<ExportFormat> {
        let mut formats: Vec<_> = self.writers.keys().copied().collect();
        formats.sort_unstable_by_key(|f| f.extension());
        formats
    }

    /// Dispatch to the writer for `format` and wrap its output.
    ///
    /// # Errors
    /// * [`ExportError::UnsupportedFormat`]: no writer is registered for
    ///   `format`.
    /// * Any error the writer itself returns.
    pub fn export(
        &self,
        format: ExportFormat,
        table: &ExportTable,
        base_name: &str,
    ) -> Result<ExportArtifact, ExportError> {
        let writer = self
            .writers
            .get(&format)
            .ok_or(ExportError::UnsupportedFormat(format))?;

        let bytes = writer.write(table).inspect_err(|e| {
            error!(%format, error = %e, "export failed");
        })?;
        info!(%format, rows = table.row_count(), bytes = bytes.len(), "export built");

        Ok(ExportArtifact::new(format, base_name, bytes))
    }
}

impl Default for WriterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
