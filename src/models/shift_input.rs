//! Shift input model.
//!
//! This module defines [`ShiftInput`], the validated, immutable description of a
//! single shift handed to the wage calculator.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::minute_of_day_of;
use crate::error::{EngineError, EngineResult};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// The highest hourly rate the engine accepts (100 000 per hour).
pub const MAX_HOURLY_RATE: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// A single shift as submitted by a caller.
///
/// If `end_time` is not after `start_time` the shift is taken to cross
/// midnight and ends at `end_time` on the following day. Day-of-week and
/// holiday classification always use `shift_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInput {
    /// Free-text worker name.
    pub worker_name: String,
    /// Opaque mission label, carried through to the output.
    pub mission_id: String,
    /// The calendar date the shift starts on.
    pub shift_date: NaiveDate,
    /// Currency per hour.
    pub hourly_rate: Decimal,
    /// Wall-clock start time.
    pub start_time: NaiveTime,
    /// Wall-clock end time.
    pub end_time: NaiveTime,
    /// Unpaid break, in whole minutes.
    pub break_minutes: i64,
}

impl ShiftInput {
    /// Returns the shift length in minutes before the break is subtracted.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_wage_engine::models::ShiftInput;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let shift = ShiftInput {
    ///     worker_name: "Anna".to_string(),
    ///     mission_id: "M-1".to_string(),
    ///     shift_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     hourly_rate: Decimal::new(25, 0),
    ///     start_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(2, 0, 0).unwrap(),
    ///     break_minutes: 0,
    /// };
    /// assert!(shift.crosses_midnight());
    /// assert_eq!(shift.gross_minutes(), 240);
    /// ```
    pub fn gross_minutes(&self) -> i64 {
        let start = i64::from(minute_of_day_of(self.start_time));
        let mut end = i64::from(minute_of_day_of(self.end_time));
        if end <= start {
            end += MINUTES_PER_DAY;
        }
        end - start
    }

    /// Returns the worked minutes: gross minutes less the break.
    pub fn worked_minutes(&self) -> i64 {
        self.gross_minutes() - self.break_minutes
    }

    /// Returns true if the shift ends on the day after `shift_date`.
    pub fn crosses_midnight(&self) -> bool {
        self.end_time <= self.start_time
    }

    /// Returns the day of the week of the shift date.
    pub fn day_of_week(&self) -> Weekday {
        self.shift_date.weekday()
    }

    /// Checks the rate and break against the shift length.
    ///
    /// The rate must lie in `0..=MAX_HOURLY_RATE`. Invalid values are
    /// rejected, never clamped.
    pub fn validate(&self) -> EngineResult<()> {
        if self.hourly_rate < Decimal::ZERO || self.hourly_rate > MAX_HOURLY_RATE {
            return Err(EngineError::InvalidRate {
                rate: self.hourly_rate.to_string(),
            });
        }

        if self.break_minutes < 0 {
            return Err(EngineError::NegativeDuration {
                message: format!("break of {} minutes is negative", self.break_minutes),
            });
        }

        if self.worked_minutes() < 0 {
            return Err(EngineError::NegativeDuration {
                message: format!(
                    "break of {} minutes exceeds shift of {} minutes",
                    self.break_minutes,
                    self.gross_minutes()
                ),
            });
        }

        Ok(())
    }
}
