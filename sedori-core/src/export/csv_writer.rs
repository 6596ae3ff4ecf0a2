use super::{Cell, ExportError, ExportFormat, ExportTable, TableWriter};

/// Writes the table as comma-separated values.
///
/// CSV cannot hold formulas, so the summary cell carries its precomputed
/// total. Numbers are written without trailing zeros. Text that a
/// spreadsheet would read as a formula is prefixed with `'`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvTableWriter;

impl TableWriter for CsvTableWriter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn write(
        &self,
        table: &ExportTable,
    ) -> Result<Vec<u8>, ExportError> {
        let mut buf = Vec::new();
        let mut writer = csv::Writer::from_writer(&mut buf);

        for row in table.grid(self.format().formula_support()) {
            writer.write_record(row.iter().map(field))?;
        }
        writer.flush()?;
        drop(writer);

        Ok(buf)
    }
}

/// Leading characters that make Excel and friends evaluate a cell.
const FORMULA_TRIGGERS: [char; 6] = ['=', '+', '-', '@', '\t', '\r'];

fn field(cell: &Cell) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Text(text) if text.starts_with(FORMULA_TRIGGERS) => format!("'{text}"),
        Cell::Text(text) => text.clone(),
        Cell::Number(value) | Cell::Formula { value, .. } => value.normalize().to_string(),
    }
}
