//! Profit calculator for a single resale transaction.
//!
//! # Formulas
//!
//! | Field               | Formula                                          |
//! |---------------------|--------------------------------------------------|
//! | `fee`               | selling price × platform fee % / 100             |
//! | `total_cost`        | cost price + shipping cost                       |
//! | `cash_profit`       | selling price − fee − total cost                 |
//! | `point_profit`      | cost price × (shop points % + card points %) / 100 |
//! | `total_profit`      | cash profit + point profit                       |
//! | `cash_profit_rate`  | cash profit / total cost × 100                   |
//! | `total_profit_rate` | total profit / total cost × 100                  |
//!
//! Both rates are exactly 0 when total cost is 0.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use sedori_core::{ProfitCalculator, TransactionInput};
//!
//! let input = TransactionInput {
//!     item_name: "Wireless earbuds".to_string(),
//!     selling_price: 3000,
//!     cost_price: 1500,
//!     shipping_cost: 215,
//!     platform_fee_percent: dec!(10),
//!     shop_point_percent: dec!(10),
//!     card_point_percent: dec!(7),
//! };
//!
//! let result = ProfitCalculator::compute(&input);
//!
//! assert_eq!(result.cash_profit, dec!(985));
//! assert_eq!(result.total_profit, dec!(1240));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{percent_of, rate_of};
use crate::models::{ProfitResult, TransactionInput};

/// Stateless calculator for [`ProfitResult`] figures.
///
/// `compute` is a total function: any input, including negative amounts that
/// slipped past the entry form, produces a result without panicking.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfitCalculator;

impl ProfitCalculator {
    /// Computes every profit figure for `input` at full precision.
    pub fn compute(input: &TransactionInput) -> ProfitResult {
        let selling_price = Decimal::from(input.selling_price);
        let cost_price = Decimal::from(input.cost_price);
        let shipping_cost = Decimal::from(input.shipping_cost);

        let fee = percent_of(selling_price, input.platform_fee_percent);
        let total_cost = cost_price.saturating_add(shipping_cost);
        let cash_profit = selling_price.saturating_sub(fee).saturating_sub(total_cost);
        let point_profit = percent_of(cost_price, input.combined_point_percent());
        let total_profit = cash_profit.saturating_add(point_profit);

        let result = ProfitResult {
            fee,
            total_cost,
            cash_profit,
            point_profit,
            total_profit,
            cash_profit_rate: rate_of(cash_profit, total_cost),
            total_profit_rate: rate_of(total_profit, total_cost),
        };

        debug!(
            item = %input.item_name,
            cash_profit = %result.cash_profit,
            total_profit = %result.total_profit,
            "computed profit"
        );

        result
    }
}
