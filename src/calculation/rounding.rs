//! Rounding and formatting helpers.
//!
//! Every currency amount leaving the engine is rounded to two decimal places
//! with round-half-up. Amounts are never negative, so half-up and
//! half-away-from-zero coincide.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a currency amount to two decimal places, half-up.
///
/// # Examples
///
/// ```
/// use shift_wage_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("2.005").unwrap()), Decimal::from_str("2.01").unwrap());
/// assert_eq!(round_currency(Decimal::from_str("0.125").unwrap()), Decimal::from_str("0.13").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts whole minutes to exact decimal hours.
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::from(minutes) / Decimal::from(60)
}

/// Converts whole minutes to hours rounded to two decimal places.
pub fn minutes_to_rounded_hours(minutes: i64) -> Decimal {
    round_currency(minutes_to_hours(minutes))
}

/// Formats decimal hours as `h:mm`.
///
/// The hour part is the floor of `hours`; the minute part is the rounded
/// remainder times sixty. A remainder that rounds to sixty carries into
/// the hour.
///
/// # Examples
///
/// ```
/// use shift_wage_engine::calculation::hours_to_hhmm;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(hours_to_hhmm(Decimal::from_str("8.5").unwrap()), "8:30");
/// assert_eq!(hours_to_hhmm(Decimal::from_str("0.25").unwrap()), "0:15");
/// assert_eq!(hours_to_hhmm(Decimal::from_str("9.999").unwrap()), "10:00");
/// ```
pub fn hours_to_hhmm(hours: Decimal) -> String {
    let whole = hours.floor();
    let mut h = whole.to_i64().unwrap_or(0);
    let mut m = ((hours - whole) * Decimal::from(60))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0);
    if m >= 60 {
        h += 1;
        m -= 60;
    }
    format!("{}:{:02}", h, m)
}
