//! The transaction entry form.
//!
//! Holds the raw text typed for each field, fills blanks from
//! [`FormDefaults`] and rejects values outside the form's range: amounts
//! below 0 yen, percentages outside 0–100.

use rust_decimal::Decimal;
use sedori_core::TransactionInput;

use crate::config::FormDefaults;
use crate::utils::{parse_amount, parse_decimal};

/// Fields of the form, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    ItemName,
    SellingPrice,
    CostPrice,
    ShippingCost,
    PlatformFeePercent,
    ShopPointPercent,
    CardPointPercent,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            FormField::ItemName,
            FormField::SellingPrice,
            FormField::CostPrice,
            FormField::ShippingCost,
            FormField::PlatformFeePercent,
            FormField::ShopPointPercent,
            FormField::CardPointPercent,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::ItemName => "Item name",
            FormField::SellingPrice => "Selling price (¥)",
            FormField::CostPrice => "Cost price (¥)",
            FormField::ShippingCost => "Shipping cost (¥)",
            FormField::PlatformFeePercent => "Platform fee (%)",
            FormField::ShopPointPercent => "Shop point rate (%)",
            FormField::CardPointPercent => "Card point rate (%)",
        }
    }
}

/// Raw form contents plus the defaults used for blank fields.
#[derive(Debug, Clone, Default)]
pub struct TransactionForm {
    defaults: FormDefaults,
    item_name: String,
    selling_price: String,
    cost_price: String,
    shipping_cost: String,
    platform_fee_percent: String,
    shop_point_percent: String,
    card_point_percent: String,
}

impl TransactionForm {
    pub fn new(defaults: FormDefaults) -> Self {
        Self {
            defaults,
            ..Default::default()
        }
    }

    /// The value a blank field falls back to, shown in prompts.
    pub fn default_text(
        &self,
        field: FormField,
    ) -> String {
        match field {
            FormField::ItemName => String::new(),
            FormField::SellingPrice | FormField::CostPrice => "0".to_string(),
            FormField::ShippingCost => self.defaults.shipping_cost.to_string(),
            FormField::PlatformFeePercent => self.defaults.platform_fee_percent.to_string(),
            FormField::ShopPointPercent => self.defaults.shop_point_percent.to_string(),
            FormField::CardPointPercent => self.defaults.card_point_percent.to_string(),
        }
    }

    /// Stores `raw` for `field` if it is valid; leaves the form unchanged
    /// and returns the reason otherwise.
    pub fn set(
        &mut self,
        field: FormField,
        raw: &str,
    ) -> Result<(), String> {
        let raw = raw.trim().to_string();
        match field {
            FormField::ItemName => self.item_name = raw,
            FormField::SellingPrice => {
                self.amount(field, &raw)?;
                self.selling_price = raw;
            }
            FormField::CostPrice => {
                self.amount(field, &raw)?;
                self.cost_price = raw;
            }
            FormField::ShippingCost => {
                self.amount(field, &raw)?;
                self.shipping_cost = raw;
            }
            FormField::PlatformFeePercent => {
                self.percent(field, &raw)?;
                self.platform_fee_percent = raw;
            }
            FormField::ShopPointPercent => {
                self.percent(field, &raw)?;
                self.shop_point_percent = raw;
            }
            FormField::CardPointPercent => {
                self.percent(field, &raw)?;
                self.card_point_percent = raw;
            }
        }
        Ok(())
    }

    /// Parses the whole form, collecting every field error.
    pub fn validate(&self) -> Result<TransactionInput, Vec<String>> {
        let mut errors = Vec::new();
        let mut amount = |field, raw: &str| {
            self.amount(field, raw)
                .map_err(|e| errors.push(e))
                .unwrap_or_default()
        };
        let selling_price = amount(FormField::SellingPrice, &self.selling_price);
        let cost_price = amount(FormField::CostPrice, &self.cost_price);
        let shipping_cost = amount(FormField::ShippingCost, &self.shipping_cost);

        let mut percent = |field, raw: &str| {
            self.percent(field, raw)
                .map_err(|e| errors.push(e))
                .unwrap_or_default()
        };
        let platform_fee_percent = percent(FormField::PlatformFeePercent, &self.platform_fee_percent);
        let shop_point_percent = percent(FormField::ShopPointPercent, &self.shop_point_percent);
        let card_point_percent = percent(FormField::CardPointPercent, &self.card_point_percent);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(TransactionInput {
            item_name: self.item_name.clone(),
            selling_price,
            cost_price,
            shipping_cost,
            platform_fee_percent,
            shop_point_percent,
            card_point_percent,
        })
    }

    fn amount(
        &self,
        field: FormField,
        raw: &str,
    ) -> Result<i64, String> {
        let value = parse_amount(raw)
            .map_err(|e| format!("{}: {e}", field.label()))?
            .unwrap_or(match field {
                FormField::ShippingCost => self.defaults.shipping_cost,
                _ => 0,
            });
        if value < 0 {
            return Err(format!("{}: must be at least 0", field.label()));
        }
        Ok(value)
    }

    fn percent(
        &self,
        field: FormField,
        raw: &str,
    ) -> Result<Decimal, String> {
        let value = parse_decimal(raw)
            .map_err(|e| format!("{}: {e}", field.label()))?
            .unwrap_or(match field {
                FormField::PlatformFeePercent => self.defaults.platform_fee_percent,
                FormField::ShopPointPercent => self.defaults.shop_point_percent,
                _ => self.defaults.card_point_percent,
            });
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            return Err(format!("{}: must be between 0 and 100", field.label()));
        }
        Ok(value)
    }
}
