use rust_decimal::Decimal;

use super::{Cell, Column, FormulaSupport};
use crate::models::LedgerEntry;

/// Text placed beside the cash-profit total.
pub const SUMMARY_LABEL: &str = "CashProfitTotal";

/// The cash-profit total placed below the data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCell {
    /// Zero-based sheet row (the header is row 0).
    pub row: usize,
    /// Zero-based sheet column of the value cell.
    pub column: usize,
    pub label: String,
    /// A `SUM` formula over the CashProfit column with its precomputed value.
    pub cell: Cell,
}

impl SummaryCell {
    /// Column holding the label, directly left of the value.
    pub fn label_column(&self) -> usize {
        self.column - 1
    }
}

/// Format-neutral sheet built from a ledger snapshot.
///
/// Layout (zero-based rows):
///
/// | Row          | Content                                    |
/// |--------------|--------------------------------------------|
/// | 0            | column headers                             |
/// | 1 ..= n      | one row per ledger entry                   |
/// | n + 1        | blank                                      |
/// | n + 2        | label under CashProfit, total to its right |
///
/// With no entries the table is the header row alone and has no summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    header: Vec<String>,
    rows: Vec<Vec<Cell>>,
    summary: Option<SummaryCell>,
}

impl ExportTable {
    pub fn from_entries(entries: &[LedgerEntry]) -> Self {
        let header = Column::ALL.iter().map(|c| c.header().to_string()).collect();
        let rows: Vec<Vec<Cell>> = entries.iter().map(data_row).collect();
        let summary = cash_profit_summary(entries);

        Self {
            header,
            rows,
            summary,
        }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows only, in ledger order.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn summary(&self) -> Option<&SummaryCell> {
        self.summary.as_ref()
    }

    /// Header plus data rows; the summary row is not counted.
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// The full sheet as rectangular rows, with cells resolved for `support`.
    ///
    /// Includes the blank spacer row and the summary row when present.
    pub fn grid(
        &self,
        support: FormulaSupport,
    ) -> Vec<Vec<Cell>> {
        let width = self.column_count();
        let mut grid: Vec<Vec<Cell>> = Vec::with_capacity(self.row_count() + 2);

        grid.push(self.header.iter().cloned().map(Cell::Text).collect());
        grid.extend(
            self.rows
                .iter()
                .map(|row| row.iter().map(|c| c.for_support(support)).collect()),
        );

        if let Some(summary) = &self.summary {
            while grid.len() < summary.row {
                grid.push(vec![Cell::Empty; width]);
            }
            let mut row = vec![Cell::Empty; width.max(summary.column + 1)];
            row[summary.label_column()] = Cell::Text(summary.label.clone());
            row[summary.column] = summary.cell.for_support(support);
            grid.push(row);
        }

        grid
    }
}

fn data_row(entry: &LedgerEntry) -> Vec<Cell> {
    let input = entry.input();
    let result = entry.result();

    Column::ALL
        .iter()
        .map(|column| match column {
            Column::InputTimestamp => Cell::Text(entry.timestamp_label()),
            Column::ItemName => Cell::Text(input.item_name.clone()),
            Column::SellingPrice => Cell::Number(Decimal::from(input.selling_price)),
            Column::CostPrice => Cell::Number(Decimal::from(input.cost_price)),
            Column::ShippingCost => Cell::Number(Decimal::from(input.shipping_cost)),
            Column::PlatformFeePercent => Cell::Number(input.platform_fee_percent),
            Column::CombinedPointPercent => Cell::Number(input.combined_point_percent()),
            Column::CashProfit => Cell::Number(result.cash_profit),
            Column::PointProfit => Cell::Number(result.point_profit),
            Column::TotalProfit => Cell::Number(result.total_profit),
            Column::CashProfitRatePercent => Cell::Number(result.cash_profit_rate),
            Column::TotalProfitRatePercent => Cell::Number(result.total_profit_rate),
        })
        .collect()
}

fn cash_profit_summary(entries: &[LedgerEntry]) -> Option<SummaryCell> {
    if entries.is_empty() {
        return None;
    }

    let last_data_row = entries.len();
    let letter = Column::CashProfit.letter();
    // Spreadsheet rows are 1-based: data runs from row 2 to row n + 1.
    let expression = format!("=SUM({letter}2:{letter}{})", last_data_row + 1);
    let value = entries
        .iter()
        .map(|e| e.result().cash_profit)
        .fold(Decimal::ZERO, Decimal::saturating_add);

    Some(SummaryCell {
        row: last_data_row + 2,
        column: Column::CashProfit.index() + 1,
        label: SUMMARY_LABEL.to_string(),
        cell: Cell::Formula { expression, value },
    })
}
