//! End-to-end checks from computed entries to exported files.

use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sedori_core::export::{Cell, FormulaSupport};
use sedori_core::{
    ExportFormat, ProfitCalculator, SessionLedger, SessionRegistry, TransactionInput,
    WriterRegistry,
};

fn at(
    hour: u32,
    minute: u32,
) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 7, 15)
        .and_then(|d| d.and_hms_opt(hour, minute, 42))
        .unwrap()
}

fn input(
    name: &str,
    selling_price: i64,
    cost_price: i64,
    shipping_cost: i64,
) -> TransactionInput {
    TransactionInput {
        item_name: name.to_string(),
        selling_price,
        cost_price,
        shipping_cost,
        platform_fee_percent: dec!(10),
        shop_point_percent: dec!(10),
        card_point_percent: dec!(7),
    }
}

fn record(
    ledger: &mut SessionLedger,
    input: TransactionInput,
    timestamp: NaiveDateTime,
) {
    let result = ProfitCalculator::compute(&input);
    ledger.append(input, result, timestamp);
}

fn three_entry_ledger() -> SessionLedger {
    let mut ledger = SessionLedger::new();
    record(&mut ledger, input("Board game", 3000, 1500, 215), at(9, 0));
    record(&mut ledger, input("Blu-ray box", 12000, 7000, 520), at(9, 5));
    record(&mut ledger, input("Gift card", 1000, 0, 0), at(9, 10));
    ledger
}

#[test]
fn three_entries_export_to_four_rows_and_a_matching_total() {
    let ledger = three_entry_ledger();

    let table = ledger.export_table();

    assert_eq!(table.row_count(), 4);
    let column_sum: Decimal = table.rows().iter().filter_map(|r| r[7].number()).sum();
    let summary = table.summary().unwrap();
    assert_eq!(summary.cell.number(), Some(column_sum));
    assert_eq!(column_sum, ledger.total_cash_profit());
    // 985 + 3280 + 900
    assert_eq!(column_sum, dec!(5165));
}

#[test]
fn zero_cost_entry_exports_zero_rates() {
    let ledger = three_entry_ledger();

    let table = ledger.export_table();
    let gift_card = &table.rows()[2];

    assert_eq!(gift_card[10], Cell::Number(Decimal::ZERO));
    assert_eq!(gift_card[11], Cell::Number(Decimal::ZERO));
}

#[test]
fn snapshot_taken_before_append_exports_only_earlier_entries() {
    let mut ledger = three_entry_ledger();
    let table = ledger.export_table();

    record(&mut ledger, input("Late item", 2000, 1000, 215), at(10, 0));

    assert_eq!(table.row_count(), 4);
    assert_eq!(ledger.export_table().row_count(), 5);
}

#[test]
fn live_and_numeric_grids_agree_on_the_total() {
    let table = three_entry_ledger().export_table();

    let live = table.grid(FormulaSupport::Live);
    let numeric = table.grid(FormulaSupport::NumericOnly);

    assert!(matches!(&live[5][8], Cell::Formula { expression, .. } if expression == "=SUM(H2:H4)"));
    assert_eq!(numeric[5][8].number(), live[5][8].number());
}

#[test]
fn every_default_format_exports_the_same_table() {
    let table = three_entry_ledger().export_table();
    let registry = WriterRegistry::with_defaults();

    for format in ExportFormat::all() {
        let artifact = registry
            .export(*format, &table, "sedori_profit_data")
            .unwrap();

        assert_eq!(artifact.file_name, format!("sedori_profit_data.{format}"));
        assert_eq!(artifact.mime_type, format.mime_type());
        assert!(!artifact.bytes.is_empty());
    }
}

#[test]
fn csv_export_lists_entries_in_insertion_order() {
    let table = three_entry_ledger().export_table();

    let artifact = WriterRegistry::with_defaults()
        .export(ExportFormat::Csv, &table, "out")
        .unwrap();
    let text = String::from_utf8(artifact.bytes).unwrap();
    let names: Vec<_> = text
        .lines()
        .skip(1)
        .take(3)
        .map(|line| line.split(',').nth(1).unwrap_or_default())
        .collect();

    assert_eq!(names, vec!["Board game", "Blu-ray box", "Gift card"]);
    assert!(text.lines().nth(1).unwrap().starts_with("2025-07-15 09:00,"));
}

#[test]
fn sessions_export_independently() {
    let mut registry = SessionRegistry::new();
    let alice = registry.open();
    let bob = registry.open();

    let ledger = registry.ledger_mut(alice).unwrap();
    record(ledger, input("Board game", 3000, 1500, 215), at(9, 0));

    assert_eq!(registry.ledger(alice).unwrap().export_table().row_count(), 2);
    assert_eq!(registry.ledger(bob).unwrap().export_table().row_count(), 1);
}
