use rust_decimal::Decimal;
use sedori_core::calculations::common::{round_currency, round_rate};
use thiserror::Error;

/// Error returned when user input cannot be parsed as a number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseNumberError {
    #[error("invalid number '{input}'")]
    Decimal { input: String },

    #[error("invalid whole yen amount '{input}'")]
    Amount { input: String },
}

/// Normalizes input for number parsing: trims whitespace, removes commas
/// (thousands separator) and a leading yen sign.
fn normalize_number_input(s: &str) -> String {
    s.trim()
        .trim_start_matches(['¥', '￥'])
        .replace(',', "")
}

/// Parses a string into a [`Decimal`], or `None` when it is empty.
///
/// Handles comma as thousands separator (e.g. `"1,234.5"`).
pub fn parse_decimal(s: &str) -> Result<Option<Decimal>, ParseNumberError> {
    let normalized = normalize_number_input(s);
    if normalized.is_empty() {
        return Ok(None);
    }
    normalized.parse().map(Some).map_err(|e| {
        tracing::debug!(input = %s, "invalid decimal: {}", e);
        ParseNumberError::Decimal {
            input: s.to_string(),
        }
    })
}

/// Parses a whole-yen amount, or `None` when it is empty.
///
/// Accepts `"1,500"` and `"¥1500"`; rejects fractions.
pub fn parse_amount(s: &str) -> Result<Option<i64>, ParseNumberError> {
    let normalized = normalize_number_input(s);
    if normalized.is_empty() {
        return Ok(None);
    }
    normalized.parse().map(Some).map_err(|e| {
        tracing::debug!(input = %s, "invalid amount: {}", e);
        ParseNumberError::Amount {
            input: s.to_string(),
        }
    })
}

/// Formats a currency value rounded to whole yen with thousands separators,
/// e.g. `¥1,240` or `-¥815`.
pub fn format_yen(value: Decimal) -> String {
    let rounded = round_currency(value);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-¥{grouped}")
    } else {
        format!("¥{grouped}")
    }
}

/// Formats a percentage with exactly two decimal places, e.g. `57.43%`.
pub fn format_rate(value: Decimal) -> String {
    format!("{:.2}%", round_rate(value))
}
