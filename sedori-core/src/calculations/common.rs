//! Common utility functions for profit calculations.
//!
//! This module provides the percentage arithmetic shared by the calculator
//! and the rounding rules used when figures are shown to the user.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a currency value to whole yen using half-up rounding.
///
/// Values at exactly .5 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use sedori_core::calculations::common::round_currency;
///
/// assert_eq!(round_currency(dec!(984.4)), dec!(984));
/// assert_eq!(round_currency(dec!(984.5)), dec!(985));
/// assert_eq!(round_currency(dec!(-984.5)), dec!(-985)); // Away from zero
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a percentage to exactly two decimal places using half-up rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use sedori_core::calculations::common::round_rate;
///
/// assert_eq!(round_rate(dec!(57.4344)), dec!(57.43));
/// assert_eq!(round_rate(dec!(57.435)), dec!(57.44));
/// ```
pub fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns `percent`% of `amount`.
///
/// The percentage is scaled down first (`amount × (percent / 100)`), and the
/// multiplication saturates instead of overflowing.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use sedori_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(3000), dec!(10)), dec!(300));
/// assert_eq!(percent_of(dec!(1500), dec!(17)), dec!(255));
/// ```
pub fn percent_of(
    amount: Decimal,
    percent: Decimal,
) -> Decimal {
    amount.saturating_mul(percent / Decimal::ONE_HUNDRED)
}

/// Expresses `numerator` as a percentage of `denominator`.
///
/// A zero denominator yields exactly 0. A quotient too large for
/// [`Decimal`] saturates at [`Decimal::MAX`] or [`Decimal::MIN`].
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use sedori_core::calculations::common::rate_of;
///
/// assert_eq!(rate_of(dec!(50), dec!(200)), dec!(25));
/// assert_eq!(rate_of(dec!(50), Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn rate_of(
    numerator: Decimal,
    denominator: Decimal,
) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    match numerator.checked_div(denominator) {
        Some(quotient) => quotient.saturating_mul(Decimal::ONE_HUNDRED),
        None if numerator.is_sign_negative() != denominator.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
}
