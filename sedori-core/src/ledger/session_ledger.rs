//! Append-only record of the transactions entered during one session.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::debug;

use crate::export::ExportTable;
use crate::models::{LedgerEntry, ProfitResult, TransactionInput};

/// Ordered, append-only list of [`LedgerEntry`] values.
///
/// Entries keep their insertion order and are never edited or removed.
/// The ledger lives as long as the session that owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionLedger {
    entries: Vec<LedgerEntry>,
}

impl SessionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry to the end of the ledger. Always succeeds.
    pub fn append(
        &mut self,
        input: TransactionInput,
        result: ProfitResult,
        timestamp: NaiveDateTime,
    ) {
        self.entries.push(LedgerEntry::new(input, result, timestamp));
        debug!(entries = self.entries.len(), "ledger entry appended");
    }

    /// Owned copy of the current entries, in insertion order.
    ///
    /// Later appends never show up in a snapshot that was already taken.
    pub fn snapshot(&self) -> Vec<LedgerEntry> {
        self.entries.clone()
    }

    /// Borrowed view of the entries, for rendering without copying.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the cash profit of every entry.
    pub fn total_cash_profit(&self) -> Decimal {
        self.entries
            .iter()
            .map(|e| e.result().cash_profit)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Builds the spreadsheet table for a snapshot of the ledger.
    ///
    /// An empty ledger produces a header-only table.
    pub fn export_table(&self) -> ExportTable {
        ExportTable::from_entries(&self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::ProfitCalculator;

    fn at(minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .and_then(|d| d.and_hms_opt(9, minute, 0))
            .unwrap()
    }

    fn input(
        name: &str,
        selling_price: i64,
    ) -> TransactionInput {
        TransactionInput {
            item_name: name.to_string(),
            selling_price,
            cost_price: 1500,
            shipping_cost: 215,
            platform_fee_percent: dec!(10),
            shop_point_percent: dec!(10),
            card_point_percent: dec!(7),
        }
    }

    fn append(
        ledger: &mut SessionLedger,
        name: &str,
        selling_price: i64,
        minute: u32,
    ) {
        let input = input(name, selling_price);
        let result = ProfitCalculator::compute(&input);
        ledger.append(input, result, at(minute));
    }

    #[test]
    fn new_ledger_is_empty() {
        let ledger = SessionLedger::new();

        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert_eq!(ledger.total_cash_profit(), Decimal::ZERO);
    }

    #[test]
    fn append_grows_by_exactly_one() {
        let mut ledger = SessionLedger::new();

        append(&mut ledger, "first", 3000, 0);
        assert_eq!(ledger.len(), 1);

        append(&mut ledger, "second", 4000, 1);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn append_keeps_duplicates() {
        let mut ledger = SessionLedger::new();

        append(&mut ledger, "same", 3000, 0);
        append(&mut ledger, "same", 3000, 0);

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.entries()[0], ledger.entries()[1]);
    }

    #[test]
    fn append_preserves_insertion_order_and_prior_entries() {
        let mut ledger = SessionLedger::new();
        append(&mut ledger, "first", 3000, 0);
        let first = ledger.entries()[0].clone();

        append(&mut ledger, "second", 4000, 1);

        assert_eq!(ledger.entries()[0], first);
        assert_eq!(ledger.entries()[1].input().item_name, "second");
    }

    #[test]
    fn snapshot_is_not_affected_by_later_appends() {
        let mut ledger = SessionLedger::new();
        append(&mut ledger, "first", 3000, 0);

        let snapshot = ledger.snapshot();
        append(&mut ledger, "second", 4000, 1);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn snapshot_is_repeatable() {
        let mut ledger = SessionLedger::new();
        append(&mut ledger, "first", 3000, 0);

        assert_eq!(ledger.snapshot(), ledger.snapshot());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn total_cash_profit_sums_entries() {
        let mut ledger = SessionLedger::new();
        append(&mut ledger, "a", 3000, 0); // 985
        append(&mut ledger, "b", 4000, 1); // 1885

        assert_eq!(ledger.total_cash_profit(), dec!(2870));
    }

    #[test]
    fn export_table_of_empty_ledger_has_header_only() {
        let table = SessionLedger::new().export_table();

        assert_eq!(table.row_count(), 1);
        assert!(table.summary().is_none());
    }
}
