//! Text rendering of results and the ledger.
//!
//! Currency is shown in whole yen, rates with two decimal places. The
//! underlying values keep full precision.

use rust_decimal::Decimal;
use sedori_core::{LedgerEntry, ProfitResult};

use crate::utils::{format_rate, format_yen};

const LEDGER_HEADERS: [&str; 12] = [
    "Date", "Item", "Sell", "Cost", "Ship", "Fee%", "Pts%", "Cash", "Points", "Total", "Cash%",
    "Total%",
];

/// Columns that hold text and are left-aligned; the rest are numbers.
const TEXT_COLUMNS: usize = 2;

/// The calculation result shown after each submission.
pub fn render_result(result: &ProfitResult) -> String {
    let lines = [
        ("Cash profit", format_yen(result.cash_profit)),
        ("Point profit", format_yen(result.point_profit)),
        ("Total profit", format_yen(result.total_profit)),
        ("Cash profit rate", format_rate(result.cash_profit_rate)),
        (
            "Total profit rate (incl. points)",
            format_rate(result.total_profit_rate),
        ),
    ];

    let mut out = String::new();
    for (label, value) in lines {
        out.push_str(&format!("  {:<34}{value}\n", format!("{label}:")));
    }
    out
}

/// The saved entries as an aligned table with a cash-profit total.
pub fn render_ledger(entries: &[LedgerEntry]) -> String {
    if entries.is_empty() {
        return "No saved entries yet.\n".to_string();
    }

    let mut rows: Vec<Vec<String>> = vec![LEDGER_HEADERS.iter().map(|h| h.to_string()).collect()];
    rows.extend(entries.iter().map(ledger_row));

    let mut widths = [0usize; LEDGER_HEADERS.len()];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, width))| pad(cell, width, i < TEXT_COLUMNS))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }

    let total = entries
        .iter()
        .map(|e| e.result().cash_profit)
        .fold(Decimal::ZERO, Decimal::saturating_add);
    out.push_str(&format!(
        "{} entries, cash profit total {}\n",
        entries.len(),
        format_yen(total)
    ));
    out
}

fn ledger_row(entry: &LedgerEntry) -> Vec<String> {
    let input = entry.input();
    let result = entry.result();
    vec![
        entry.timestamp_label(),
        input.item_name.clone(),
        format_yen(Decimal::from(input.selling_price)),
        format_yen(Decimal::from(input.cost_price)),
        format_yen(Decimal::from(input.shipping_cost)),
        input.platform_fee_percent.normalize().to_string(),
        input.combined_point_percent().normalize().to_string(),
        format_yen(result.cash_profit),
        format_yen(result.point_profit),
        format_yen(result.total_profit),
        format_rate(result.cash_profit_rate),
        format_rate(result.total_profit_rate),
    ]
}

/// Pads by character count; `{:<w}` would count bytes for `¥`.
fn pad(
    cell: &str,
    width: usize,
    left: bool,
) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.chars().count()));
    if left {
        format!("{cell}{fill}")
    } else {
        format!("{fill}{cell}")
    }
}
