use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{ProfitResult, TransactionInput};

/// Format used for the `InputTimestamp` column and ledger listings.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A transaction, its computed figures and the moment it was recorded.
///
/// Entries are immutable once created; fields are only readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    input: TransactionInput,
    result: ProfitResult,
    recorded_at: NaiveDateTime,
}

impl LedgerEntry {
    pub fn new(
        input: TransactionInput,
        result: ProfitResult,
        recorded_at: NaiveDateTime,
    ) -> Self {
        Self {
            input,
            result,
            recorded_at,
        }
    }

    pub fn input(&self) -> &TransactionInput {
        &self.input
    }

    pub fn result(&self) -> &ProfitResult {
        &self.result
    }

    pub fn recorded_at(&self) -> NaiveDateTime {
        self.recorded_at
    }

    /// Recording time at minute precision, e.g. `2025-06-01 14:05`.
    pub fn timestamp_label(&self) -> String {
        self.recorded_at.format(TIMESTAMP_FORMAT).to_string()
    }
}
