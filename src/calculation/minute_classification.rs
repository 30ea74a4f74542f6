//! Minute-by-minute classification of worked time.
//!
//! The worked interval is the first `worked_minutes` minutes of wall-clock time
//! from the shift start; break placement is not modelled. Each minute lands in
//! exactly one bucket using a strict priority:
//!
//! 1. night window
//! 2. Sunday or public holiday
//! 3. Saturday
//! 4. overtime (elapsed worked minutes at or past the threshold)
//! 5. normal

use chrono::NaiveTime;

use crate::config::{PremiumConfig, minute_of_day_of};
use crate::models::{AuditStep, BucketMinutes, MinuteBucket};

use super::DayKind;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// The result of classifying a shift's worked minutes.
#[derive(Debug, Clone)]
pub struct MinuteClassification {
    /// Worked minutes per bucket.
    pub minutes: BucketMinutes,
    /// The audit step recording the classification.
    pub audit_step: AuditStep,
}

/// Classifies a single worked minute.
///
/// `minute_of_day` is the wall-clock minute (0..1440) and `elapsed` is the
/// number of worked minutes before this one.
///
/// # Example
///
/// ```
/// use shift_wage_engine::calculation::{classify_minute, DayKind};
/// use shift_wage_engine::config::PremiumConfig;
/// use shift_wage_engine::models::MinuteBucket;
///
/// let premiums = PremiumConfig::default();
/// // 23:30 on a Sunday is night, not Sunday
/// assert_eq!(classify_minute(23 * 60 + 30, 0, DayKind::Sunday, &premiums), MinuteBucket::Night);
/// // The 571st minute of a weekday shift is overtime
/// assert_eq!(classify_minute(18 * 60, 570, DayKind::Weekday, &premiums), MinuteBucket::Overtime);
/// ```
pub fn classify_minute(
    minute_of_day: u32,
    elapsed: i64,
    day_kind: DayKind,
    premiums: &PremiumConfig,
) -> MinuteBucket {
    if premiums.night_window.contains_minute(minute_of_day) {
        return MinuteBucket::Night;
    }
    if let Some(bucket) = day_kind.day_bucket() {
        return bucket;
    }
    if elapsed >= premiums.overtime.threshold_minutes() {
        return MinuteBucket::Overtime;
    }
    MinuteBucket::Normal
}

/// Walks the worked interval of a shift and counts minutes per bucket.
///
/// The walk runs for `worked_minutes` minutes starting at `start_time`,
/// wrapping past midnight. The day kind is fixed for the whole walk.
///
/// # Example
///
/// ```
/// use shift_wage_engine::calculation::{classify_shift, DayKind};
/// use shift_wage_engine::config::PremiumConfig;
/// use chrono::NaiveTime;
///
/// let start = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
/// let result = classify_shift(start, 240, DayKind::Weekday, &PremiumConfig::default(), 1);
/// assert_eq!(result.minutes.night, 180);
/// assert_eq!(result.minutes.normal, 60);
/// ```
pub fn classify_shift(
    start_time: NaiveTime,
    worked_minutes: i64,
    day_kind: DayKind,
    premiums: &PremiumConfig,
    step_number: u32,
) -> MinuteClassification {
    let start = minute_of_day_of(start_time);
    let mut minutes = BucketMinutes::default();

    let mut minute_of_day = start;
    for elapsed in 0..worked_minutes.max(0) {
        minutes.record(classify_minute(minute_of_day, elapsed, day_kind, premiums));
        minute_of_day = (minute_of_day + 1) % MINUTES_PER_DAY;
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "minute_classification".to_string(),
        rule_name: "Minute Classification".to_string(),
        input: serde_json::json!({
            "start_time": start_time.format("%H:%M").to_string(),
            "worked_minutes": worked_minutes,
            "day_kind": day_kind,
            "overtime_threshold_minutes": premiums.overtime.threshold_minutes(),
        }),
        output: serde_json::json!({
            "night": minutes.night,
            "sunday_or_holiday": minutes.sunday,
            "saturday": minutes.saturday,
            "overtime": minutes.overtime,
            "normal": minutes.normal,
        }),
        reasoning: format!(
            "{} worked minutes from {} classified by priority night > Sunday/holiday > Saturday > overtime > normal",
            worked_minutes,
            start_time.format("%H:%M")
        ),
    };

    MinuteClassification {
        minutes,
        audit_step,
    }
}
