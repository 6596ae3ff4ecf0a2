//! Profit calculations for resale ("sedori") transactions.
//!
//! [`ProfitCalculator`] turns a [`TransactionInput`](crate::TransactionInput)
//! into a [`ProfitResult`](crate::ProfitResult). The helpers in [`common`]
//! hold the shared percentage and rounding rules.

pub mod common;
pub mod profit;

pub use profit::ProfitCalculator;
