use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{ColNum, Format, Formula, RowNum, Workbook};

use super::{Cell, ExportError, ExportFormat, ExportTable, TableWriter};

/// Name of the single worksheet in an XLSX export.
pub const SHEET_NAME: &str = "ProfitData";

/// Writes the table as an Excel workbook.
///
/// The summary cell is a live `SUM` formula, so the total follows edits made
/// to the CashProfit column after download. The precomputed total is stored
/// as the formula's cached result for readers that do not recalculate.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxTableWriter;

impl TableWriter for XlsxTableWriter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Xlsx
    }

    fn write(
        &self,
        table: &ExportTable,
    ) -> Result<Vec<u8>, ExportError> {
        let bold = Format::new().set_bold();
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (r, row) in table.grid(self.format().formula_support()).iter().enumerate() {
            let row_num = RowNum::try_from(r).map_err(|_| ExportError::SheetLimit(r))?;
            for (c, cell) in row.iter().enumerate() {
                let col_num = ColNum::try_from(c).map_err(|_| ExportError::SheetLimit(r))?;
                match cell {
                    Cell::Empty => {}
                    Cell::Text(text) if r == 0 => {
                        worksheet.write_string_with_format(row_num, col_num, text, &bold)?;
                    }
                    Cell::Text(text) => {
                        worksheet.write_string(row_num, col_num, text)?;
                    }
                    Cell::Number(value) => {
                        let number = value
                            .to_f64()
                            .ok_or(ExportError::NumberConversion(*value))?;
                        worksheet.write_number(row_num, col_num, number)?;
                    }
                    Cell::Formula { expression, value } => {
                        let formula =
                            Formula::new(expression).set_result(value.normalize().to_string());
                        worksheet.write_formula(row_num, col_num, formula)?;
                    }
                }
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use zip::ZipArchive;

    use super::*;
    use crate::calculations::ProfitCalculator;
    use crate::models::{LedgerEntry, TransactionInput};

    fn entry(selling_price: i64) -> LedgerEntry {
        let input = TransactionInput {
            item_name: format!("Item {selling_price}"),
            selling_price,
            cost_price: 1500,
            shipping_cost: 215,
            platform_fee_percent: dec!(10),
            shop_point_percent: dec!(10),
            card_point_percent: dec!(7),
        };
        let result = ProfitCalculator::compute(&input);
        let at = NaiveDate::from_ymd_opt(2025, 6, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap();
        LedgerEntry::new(input, result, at)
    }

    /// Reads one part of the workbook package as text.
    fn part(
        bytes: &[u8],
        name: &str,
    ) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut text = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut text)
            .unwrap();
        text
    }

    fn three_entry_workbook() -> Vec<u8> {
        let table = ExportTable::from_entries(&[entry(3000), entry(4000), entry(5000)]);
        XlsxTableWriter.write(&table).unwrap()
    }

    #[test]
    fn writes_a_zip_container() {
        let bytes = three_entry_workbook();

        // XLSX files are zip archives.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn sheet_is_named_profit_data() {
        let workbook = part(&three_entry_workbook(), "xl/workbook.xml");

        assert!(workbook.contains(r#"<sheet name="ProfitData""#), "{workbook}");
    }

    #[test]
    fn header_row_is_bold_text() {
        let bytes = three_entry_workbook();
        let sheet = part(&bytes, "xl/worksheets/sheet1.xml");
        let strings = part(&bytes, "xl/sharedStrings.xml");
        let styles = part(&bytes, "xl/styles.xml");

        assert!(sheet.contains(r#"<c r="A1" s="1" t="s">"#), "{sheet}");
        assert!(sheet.contains(r#"<c r="L1" s="1" t="s">"#), "{sheet}");
        assert!(strings.contains("<t>InputTimestamp</t>"));
        assert!(strings.contains("<t>TotalProfitRatePercent</t>"));
        assert!(styles.contains("<b/>"), "{styles}");
    }

    #[test]
    fn data_cells_are_numbers() {
        let sheet = part(&three_entry_workbook(), "xl/worksheets/sheet1.xml");

        assert!(sheet.contains(r#"<c r="C2"><v>3000</v></c>"#), "{sheet}");
        assert!(sheet.contains(r#"<c r="H2"><v>985</v></c>"#), "{sheet}");
        assert!(sheet.contains(r#"<c r="H4"><v>2785</v></c>"#), "{sheet}");
    }

    #[test]
    fn summary_is_live_sum_with_cached_total() {
        let bytes = three_entry_workbook();
        let sheet = part(&bytes, "xl/worksheets/sheet1.xml");
        let strings = part(&bytes, "xl/sharedStrings.xml");

        // 985 + 1885 + 2785
        assert!(
            sheet.contains(r#"<c r="I6"><f>SUM(H2:H4)</f><v>5655</v></c>"#),
            "{sheet}"
        );
        assert!(sheet.contains(r#"<c r="H6" t="s">"#), "{sheet}");
        assert!(strings.contains("<t>CashProfitTotal</t>"));
        assert!(!sheet.contains(r#"r="A5""#));
    }

    #[test]
    fn empty_table_still_produces_workbook() {
        let bytes = XlsxTableWriter
            .write(&ExportTable::from_entries(&[]))
            .unwrap();
        let sheet = part(&bytes, "xl/worksheets/sheet1.xml");

        assert!(sheet.contains(r#"<c r="A1" s="1" t="s">"#));
        assert!(!sheet.contains("<f>"));
    }
}
