mod ledger_entry;
mod profit_result;
mod transaction_input;

pub use ledger_entry::{LedgerEntry, TIMESTAMP_FORMAT};
pub use profit_result::ProfitResult;
pub use transaction_input::{
    DEFAULT_CARD_POINT_PERCENT, DEFAULT_PLATFORM_FEE_PERCENT, DEFAULT_SHIPPING_COST,
    DEFAULT_SHOP_POINT_PERCENT, InputError, TransactionInput,
};
