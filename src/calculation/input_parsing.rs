//! Parsing of raw text fields into a [`ShiftInput`].
//!
//! Callers collect free-text fields (dates, `HH:MM` times, a break given either
//! as `H:MM` or as decimal hours, and a decimal rate). Everything is validated
//! here, before any computation.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::{MAX_HOURLY_RATE, ShiftInput};

/// Raw shift fields as typed by a user.
#[derive(Debug, Clone, Default)]
pub struct ShiftFields<'a> {
    /// Worker name.
    pub worker_name: &'a str,
    /// Mission label.
    pub mission_id: &'a str,
    /// `YYYY-MM-DD`.
    pub date: &'a str,
    /// Decimal currency per hour.
    pub hourly_rate: &'a str,
    /// `HH:MM`, 24 hour clock.
    pub start_time: &'a str,
    /// `HH:MM`, 24 hour clock.
    pub end_time: &'a str,
    /// `H:MM` or decimal hours; empty means no break.
    pub break_duration: &'a str,
}

/// Parses and validates raw fields into a [`ShiftInput`].
///
/// # Example
///
/// ```
/// use shift_wage_engine::calculation::{parse_shift_fields, ShiftFields};
///
/// let input = parse_shift_fields(&ShiftFields {
///     worker_name: "Anna",
///     mission_id: "M-7",
///     date: "2026-01-12",
///     hourly_rate: "25.00",
///     start_time: "08:00",
///     end_time: "17:00",
///     break_duration: "1:00",
/// })?;
/// assert_eq!(input.worked_minutes(), 480);
/// # Ok::<(), shift_wage_engine::error::EngineError>(())
/// ```
pub fn parse_shift_fields(fields: &ShiftFields<'_>) -> EngineResult<ShiftInput> {
    let input = ShiftInput {
        worker_name: fields.worker_name.trim().to_string(),
        mission_id: fields.mission_id.trim().to_string(),
        shift_date: parse_date("date", fields.date)?,
        hourly_rate: parse_rate(fields.hourly_rate)?,
        start_time: parse_clock_time("start_time", fields.start_time)?,
        end_time: parse_clock_time("end_time", fields.end_time)?,
        break_minutes: parse_break_minutes(fields.break_duration)?,
    };
    input.validate()?;
    Ok(input)
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
pub fn parse_date(field: &str, value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| invalid_format(field, value))
}

/// Parses a 24 hour `HH:MM` wall-clock time.
pub fn parse_clock_time(field: &str, value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| invalid_format(field, value))
}

/// Parses a decimal hourly rate between zero and [`MAX_HOURLY_RATE`].
pub fn parse_rate(value: &str) -> EngineResult<Decimal> {
    let rate = Decimal::from_str(value.trim()).map_err(|_| EngineError::InvalidRate {
        rate: value.to_string(),
    })?;
    if rate < Decimal::ZERO || rate > MAX_HOURLY_RATE {
        return Err(EngineError::InvalidRate {
            rate: value.to_string(),
        });
    }
    Ok(rate)
}

/// Parses a break given as `H:MM` or as decimal hours into whole minutes.
///
/// Decimal hours are converted to the nearest minute. An empty value is no
/// break. A negative break is a [`EngineError::NegativeDuration`]; a value too
/// large to count in minutes is an [`EngineError::InvalidTimeFormat`].
pub fn parse_break_minutes(value: &str) -> EngineResult<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    let minutes = match trimmed.split_once(':') {
        Some((hours, minutes)) => {
            let negative = hours.starts_with('-');
            let hours: i64 = hours
                .trim_start_matches('-')
                .parse()
                .map_err(|_| invalid_format("break_duration", value))?;
            if minutes.len() != 2 {
                return Err(invalid_format("break_duration", value));
            }
            let minutes: i64 = minutes
                .parse()
                .ok()
                .filter(|m| (0..60).contains(m))
                .ok_or_else(|| invalid_format("break_duration", value))?;
            let total = hours
                .checked_mul(60)
                .and_then(|h| h.checked_add(minutes))
                .ok_or_else(|| invalid_format("break_duration", value))?;
            if negative { -total } else { total }
        }
        None => {
            let hours =
                Decimal::from_str(trimmed).map_err(|_| invalid_format("break_duration", value))?;
            hours
                .checked_mul(Decimal::from(60))
                .ok_or_else(|| invalid_format("break_duration", value))?
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
                .ok_or_else(|| invalid_format("break_duration", value))?
        }
    };

    if minutes < 0 {
        return Err(EngineError::NegativeDuration {
            message: format!("break '{}' is negative", trimmed),
        });
    }
    Ok(minutes)
}

fn invalid_format(field: &str, value: &str) -> EngineError {
    EngineError::InvalidTimeFormat {
        field: field.to_string(),
        value: value.to_string(),
    }
}
