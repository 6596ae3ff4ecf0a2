use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Figures derived from a [`TransactionInput`](super::TransactionInput).
///
/// Values are kept at full precision; rounding for display happens in the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitResult {
    /// Platform fee: selling price × fee percent / 100.
    pub fee: Decimal,
    /// Cost price + shipping cost.
    pub total_cost: Decimal,
    /// Selling price − fee − total cost.
    pub cash_profit: Decimal,
    /// Cost price × (shop points + card points) / 100.
    pub point_profit: Decimal,
    /// Cash profit + point profit.
    pub total_profit: Decimal,
    /// Cash profit as a percentage of total cost, 0 when total cost is 0.
    pub cash_profit_rate: Decimal,
    /// Total profit as a percentage of total cost, 0 when total cost is 0.
    pub total_profit_rate: Decimal,
}
