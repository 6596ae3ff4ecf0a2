//! CSV import of transaction batches.
//!
//! ## CSV Format
//!
//! Columns are matched by header name, so their order does not matter.
//! Whitespace around values is trimmed.
//!
//! | Column                 | Required | Type    | Empty cell means        |
//! |------------------------|----------|---------|-------------------------|
//! | `item_name`            | no       | string  | empty name              |
//! | `selling_price`        | yes      | integer |                         |
//! | `cost_price`           | yes      | integer |                         |
//! | `shipping_cost`        | no       | integer | 215                     |
//! | `platform_fee_percent` | no       | decimal | 10                      |
//! | `shop_point_percent`   | no       | decimal | 10                      |
//! | `card_point_percent`   | no       | decimal | 7                       |
//!
//! ```csv
//! item_name,selling_price,cost_price,shipping_cost,platform_fee_percent,shop_point_percent,card_point_percent
//! Board game,3000,1500,215,10,10,7
//! Gift card,1000,0,0,,,
//! ```

use std::io::Read;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sedori_core::{
    DEFAULT_CARD_POINT_PERCENT, DEFAULT_PLATFORM_FEE_PERCENT, DEFAULT_SHIPPING_COST,
    DEFAULT_SHOP_POINT_PERCENT, InputError, ProfitCalculator, SessionLedger, TransactionInput,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when importing transactions.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    /// `row` is 1-based and does not count the header.
    #[error("row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: InputError,
    },
}

/// A single record from the transactions CSV file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TransactionRecord {
    #[serde(default)]
    pub item_name: Option<String>,
    pub selling_price: i64,
    pub cost_price: i64,
    #[serde(default)]
    pub shipping_cost: Option<i64>,
    #[serde(default)]
    pub platform_fee_percent: Option<Decimal>,
    #[serde(default)]
    pub shop_point_percent: Option<Decimal>,
    #[serde(default)]
    pub card_point_percent: Option<Decimal>,
}

impl From<TransactionRecord> for TransactionInput {
    fn from(record: TransactionRecord) -> Self {
        TransactionInput {
            item_name: record.item_name.unwrap_or_default(),
            selling_price: record.selling_price,
            cost_price: record.cost_price,
            shipping_cost: record.shipping_cost.unwrap_or(DEFAULT_SHIPPING_COST),
            platform_fee_percent: record
                .platform_fee_percent
                .unwrap_or(DEFAULT_PLATFORM_FEE_PERCENT),
            shop_point_percent: record
                .shop_point_percent
                .unwrap_or(DEFAULT_SHOP_POINT_PERCENT),
            card_point_percent: record
                .card_point_percent
                .unwrap_or(DEFAULT_CARD_POINT_PERCENT),
        }
    }
}

/// Loads transactions from CSV into a session ledger.
pub struct TransactionLoader;

impl TransactionLoader {
    /// Parse transactions from a CSV reader.
    ///
    /// Rows are returned in file order. Every row is range-checked the same
    /// way the entry form checks it.
    ///
    /// # Errors
    ///
    /// * [`LoaderError::CsvParse`] – the CSV is structurally invalid or a
    ///   required field cannot be deserialised.
    /// * [`LoaderError::InvalidRow`] – a value is out of range.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<TransactionInput>, LoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let inputs = csv_reader
            .deserialize::<TransactionRecord>()
            .enumerate()
            .map(|(idx, result)| -> Result<TransactionInput, LoaderError> {
                let input = TransactionInput::from(result?);
                input
                    .validate()
                    .map_err(|source| LoaderError::InvalidRow {
                        row: idx + 1,
                        source,
                    })?;
                Ok(input)
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(rows = inputs.len(), "parsed transactions CSV");
        Ok(inputs)
    }

    /// Compute every input and append it to `ledger`, all stamped with
    /// `timestamp`. Returns the number of entries appended.
    pub fn load(
        ledger: &mut SessionLedger,
        inputs: &[TransactionInput],
        timestamp: NaiveDateTime,
    ) -> usize {
        for input in inputs {
            let result = ProfitCalculator::compute(input);
            ledger.append(input.clone(), result, timestamp);
        }
        info!(count = inputs.len(), "imported transactions");
        inputs.len()
    }
}
