//! Property-based tests for the profit formulas and ledger invariants.
//!
//! Uses proptest to verify:
//! 1. Cash profit identity for in-range inputs
//! 2. Total profit = cash profit + point profit
//! 3. Zero total cost always yields zero rates
//! 4. Append is monotonic and never rewrites earlier entries
//! 5. Export row count and summary total track the ledger

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use sedori_core::{ProfitCalculator, SessionLedger, TransactionInput};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_amount() -> impl Strategy<Value = i64> {
    0..10_000_000_i64
}

/// Percentages in [0, 100] with one decimal place, like the entry form.
fn arb_percent() -> impl Strategy<Value = Decimal> {
    (0..=1000_i64).prop_map(|tenths| Decimal::new(tenths, 1))
}

fn arb_input() -> impl Strategy<Value = TransactionInput> {
    (
        arb_amount(),
        arb_amount(),
        arb_amount(),
        arb_percent(),
        arb_percent(),
        arb_percent(),
    )
        .prop_map(|(selling, cost, shipping, fee, shop, card)| TransactionInput {
            item_name: "item".to_string(),
            selling_price: selling,
            cost_price: cost,
            shipping_cost: shipping,
            platform_fee_percent: fee,
            shop_point_percent: shop,
            card_point_percent: card,
        })
}

fn hundred() -> Decimal {
    Decimal::ONE_HUNDRED
}

// ── 1–3. Formulas ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn cash_profit_identity(input in arb_input()) {
        let result = ProfitCalculator::compute(&input);
        let selling = Decimal::from(input.selling_price);
        let expected = selling
            - selling * input.platform_fee_percent / hundred()
            - Decimal::from(input.cost_price)
            - Decimal::from(input.shipping_cost);

        prop_assert_eq!(result.cash_profit, expected);
    }

    #[test]
    fn total_profit_adds_point_profit(input in arb_input()) {
        let result = ProfitCalculator::compute(&input);
        let points = Decimal::from(input.cost_price)
            * (input.shop_point_percent + input.card_point_percent)
            / hundred();

        prop_assert_eq!(result.point_profit, points);
        prop_assert_eq!(result.total_profit, result.cash_profit + points);
    }

    #[test]
    fn zero_total_cost_means_zero_rates(
        selling in arb_amount(),
        fee in arb_percent(),
        shop in arb_percent(),
        card in arb_percent(),
    ) {
        let input = TransactionInput {
            item_name: String::new(),
            selling_price: selling,
            cost_price: 0,
            shipping_cost: 0,
            platform_fee_percent: fee,
            shop_point_percent: shop,
            card_point_percent: card,
        };

        let result = ProfitCalculator::compute(&input);

        prop_assert_eq!(result.cash_profit_rate, Decimal::ZERO);
        prop_assert_eq!(result.total_profit_rate, Decimal::ZERO);
    }

    #[test]
    fn any_finite_input_is_accepted(
        selling in any::<i64>(),
        cost in any::<i64>(),
        shipping in any::<i64>(),
        fee in any::<i32>(),
    ) {
        let input = TransactionInput {
            item_name: String::new(),
            selling_price: selling,
            cost_price: cost,
            shipping_cost: shipping,
            platform_fee_percent: Decimal::from(fee),
            shop_point_percent: Decimal::from(fee),
            card_point_percent: Decimal::from(fee),
        };

        let result = ProfitCalculator::compute(&input);

        if result.total_cost.is_zero() {
            prop_assert_eq!(result.cash_profit_rate, Decimal::ZERO);
        }
    }
}

// ── 4–5. Ledger ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn append_is_monotonic(inputs in prop::collection::vec(arb_input(), 1..20)) {
        let at = NaiveDate::from_ymd_opt(2025, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        let mut ledger = SessionLedger::new();

        for input in inputs {
            let before = ledger.snapshot();
            let result = ProfitCalculator::compute(&input);
            ledger.append(input, result, at);

            prop_assert_eq!(ledger.len(), before.len() + 1);
            prop_assert_eq!(&ledger.entries()[..before.len()], before.as_slice());
        }
    }

    #[test]
    fn export_tracks_ledger(inputs in prop::collection::vec(arb_input(), 0..20)) {
        let at = NaiveDate::from_ymd_opt(2025, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        let mut ledger = SessionLedger::new();
        for input in inputs {
            let result = ProfitCalculator::compute(&input);
            ledger.append(input, result, at);
        }

        let table = ledger.export_table();

        prop_assert_eq!(table.row_count(), ledger.len() + 1);
        let column_sum: Decimal = table.rows().iter().filter_map(|r| r[7].number()).sum();
        match table.summary() {
            Some(summary) => prop_assert_eq!(summary.cell.number(), Some(column_sum)),
            None => prop_assert!(ledger.is_empty()),
        }
    }
}
