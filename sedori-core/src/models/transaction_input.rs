use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shipping cost offered when none is given, in yen.
pub const DEFAULT_SHIPPING_COST: i64 = 215;
/// Platform fee percent offered when none is given.
pub const DEFAULT_PLATFORM_FEE_PERCENT: Decimal = Decimal::TEN;
/// Shop point percent offered when none is given.
pub const DEFAULT_SHOP_POINT_PERCENT: Decimal = Decimal::TEN;
/// Card point percent offered when none is given.
pub const DEFAULT_CARD_POINT_PERCENT: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// Range violations caught at the input boundary (form or CSV import).
///
/// The calculator itself never returns these; it accepts any value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: i64 },

    #[error("{field} must be between 0 and 100, got {value}")]
    PercentOutOfRange { field: &'static str, value: Decimal },
}

/// One resale transaction as entered by the user.
///
/// Currency amounts are whole yen. Percentages are plain percent values
/// (`10` means 10%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub item_name: String,
    pub selling_price: i64,
    pub cost_price: i64,
    pub shipping_cost: i64,
    pub platform_fee_percent: Decimal,
    pub shop_point_percent: Decimal,
    pub card_point_percent: Decimal,
}

impl TransactionInput {
    /// Shop and card point percentages added together.
    pub fn combined_point_percent(&self) -> Decimal {
        self.shop_point_percent
            .saturating_add(self.card_point_percent)
    }

    /// Checks the ranges the entry form enforces.
    ///
    /// Returns the first violation found, in field order.
    pub fn validate(&self) -> Result<(), InputError> {
        let amounts = [
            ("selling price", self.selling_price),
            ("cost price", self.cost_price),
            ("shipping cost", self.shipping_cost),
        ];
        for (field, value) in amounts {
            if value < 0 {
                return Err(InputError::NegativeAmount { field, value });
            }
        }

        let percents = [
            ("platform fee percent", self.platform_fee_percent),
            ("shop point percent", self.shop_point_percent),
            ("card point percent", self.card_point_percent),
        ];
        for (field, value) in percents {
            if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
                return Err(InputError::PercentOutOfRange { field, value });
            }
        }
        Ok(())
    }
}
