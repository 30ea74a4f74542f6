//! Wage breakdown models for the Shift Wage Engine.
//!
//! This module contains the [`WageBreakdown`] type and its associated structures
//! that capture every output of a shift calculation: minutes and hours per bucket,
//! premiums, base and gross pay, and the audit trace.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DayKind;

/// The bucket a single worked minute is classified into.
///
/// Buckets are mutually exclusive; a minute belongs to exactly one.
///
/// # Example
///
/// ```
/// use shift_wage_engine::models::MinuteBucket;
///
/// let bucket = MinuteBucket::SundayOrHoliday;
/// assert_eq!(serde_json::to_string(&bucket).unwrap(), "\"sunday_or_holiday\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinuteBucket {
    /// Inside the night window.
    Night,
    /// On a Sunday or public holiday, outside the night window.
    SundayOrHoliday,
    /// On a Saturday, outside the night window.
    Saturday,
    /// Past the daily overtime threshold on a plain weekday.
    Overtime,
    /// Everything else.
    Normal,
}

/// Worked minutes per bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketMinutes {
    /// Night minutes.
    pub night: i64,
    /// Sunday or public holiday minutes.
    pub sunday: i64,
    /// Saturday minutes.
    pub saturday: i64,
    /// Overtime minutes.
    pub overtime: i64,
    /// Normal minutes.
    pub normal: i64,
}

impl BucketMinutes {
    /// Counts one more minute in the given bucket.
    pub fn record(&mut self, bucket: MinuteBucket) {
        match bucket {
            MinuteBucket::Night => self.night += 1,
            MinuteBucket::SundayOrHoliday => self.sunday += 1,
            MinuteBucket::Saturday => self.saturday += 1,
            MinuteBucket::Overtime => self.overtime += 1,
            MinuteBucket::Normal => self.normal += 1,
        }
    }

    /// Returns the total across all buckets.
    pub fn total(&self) -> i64 {
        self.night + self.sunday + self.saturday + self.overtime + self.normal
    }

    /// Returns true if any night, Saturday or Sunday/holiday minute was recorded.
    pub fn has_premium_minutes(&self) -> bool {
        self.night > 0 || self.sunday > 0 || self.saturday > 0
    }
}

/// Hours per bucket, as decimals rounded to two places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketHours {
    /// Total worked hours.
    pub total: Decimal,
    /// Night hours.
    pub night: Decimal,
    /// Sunday or public holiday hours.
    pub sunday: Decimal,
    /// Saturday hours.
    pub saturday: Decimal,
    /// Overtime hours.
    pub overtime: Decimal,
    /// Normal hours.
    pub normal: Decimal,
}

/// Hours per bucket formatted as `h:mm`, for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketHhmm {
    /// Total worked hours.
    pub total: String,
    /// Night hours.
    pub night: String,
    /// Sunday or public holiday hours.
    pub sunday: String,
    /// Saturday hours.
    pub saturday: String,
    /// Overtime hours.
    pub overtime: String,
}

/// Premium amounts, one per non-normal bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Premiums {
    /// Night premium.
    pub night: Decimal,
    /// Saturday premium.
    pub saturday: Decimal,
    /// Sunday or public holiday premium.
    pub sunday: Decimal,
    /// Overtime premium (zero when suppressed).
    pub overtime: Decimal,
}

impl Premiums {
    /// Returns the sum of all premiums.
    pub fn total(&self) -> Decimal {
        self.night + self.saturday + self.sunday + self.overtime
    }
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete result of a shift calculation.
///
/// A breakdown is never mutated after it is produced. It carries no
/// identifiers or timestamps, so identical inputs always yield identical
/// breakdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageBreakdown {
    /// The mission label from the input.
    pub mission_id: String,
    /// The worker name from the input.
    pub worker_name: String,
    /// The shift date.
    pub date: NaiveDate,
    /// English day name of the shift date (e.g., "Monday").
    pub day_name: String,
    /// How the shift date was classified.
    pub day_kind: DayKind,
    /// Start time as `HH:MM`.
    pub start_time: String,
    /// End time as `HH:MM`.
    pub end_time: String,
    /// The hourly rate from the input.
    pub hourly_rate: Decimal,
    /// The break in hours, rounded to two places.
    pub break_hours: Decimal,
    /// Worked minutes per bucket.
    pub minutes: BucketMinutes,
    /// Worked hours per bucket.
    pub hours: BucketHours,
    /// Worked hours per bucket as `h:mm`.
    pub hours_hhmm: BucketHhmm,
    /// Premium amounts.
    pub premiums: Premiums,
    /// Worked hours times the hourly rate.
    pub base_pay: Decimal,
    /// Base pay plus all premiums.
    pub gross_pay: Decimal,
    /// True if overtime minutes were present but their premium was withheld.
    pub overtime_suppressed: bool,
    /// Record of every calculation decision.
    pub audit_trace: Vec<AuditStep>,
}
