//! Day detection logic.
//!
//! This module determines how a shift date is treated for premium purposes:
//! plain weekday, Saturday, Sunday, or configured public holiday. The kind is
//! resolved once per shift from the start date, including for shifts that run
//! past midnight.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{HolidayCalendar, MinuteBucket};

/// Represents the kind of day a shift starts on.
///
/// # Example
///
/// ```
/// use shift_wage_engine::calculation::DayKind;
///
/// let kind = DayKind::PublicHoliday;
/// assert_eq!(kind.to_string(), "Public holiday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Monday through Friday, not a holiday.
    Weekday,
    /// Saturday, not a holiday.
    Saturday,
    /// Sunday.
    Sunday,
    /// A configured public holiday; paid like Sunday.
    PublicHoliday,
}

impl DayKind {
    /// Returns the bucket non-night minutes fall into on this day, if any.
    ///
    /// Weekdays have no day bucket; their minutes are overtime or normal.
    pub fn day_bucket(self) -> Option<MinuteBucket> {
        match self {
            DayKind::Weekday => None,
            DayKind::Saturday => Some(MinuteBucket::Saturday),
            DayKind::Sunday | DayKind::PublicHoliday => Some(MinuteBucket::SundayOrHoliday),
        }
    }
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Weekday => write!(f, "Weekday"),
            DayKind::Saturday => write!(f, "Saturday"),
            DayKind::Sunday => write!(f, "Sunday"),
            DayKind::PublicHoliday => write!(f, "Public holiday"),
        }
    }
}

/// Determines the day kind for a shift date.
///
/// A configured holiday takes precedence over the day of the week, so a
/// holiday falling on a Saturday is paid like a Sunday.
///
/// # Example
///
/// ```
/// use shift_wage_engine::calculation::{resolve_day_kind, DayKind};
/// use shift_wage_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::default();
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert_eq!(resolve_day_kind(saturday, &calendar), DayKind::Saturday);
/// ```
pub fn resolve_day_kind(date: NaiveDate, holidays: &HolidayCalendar) -> DayKind {
    if holidays.is_holiday(date) {
        return DayKind::PublicHoliday;
    }
    match date.weekday() {
        Weekday::Sat => DayKind::Saturday,
        Weekday::Sun => DayKind::Sunday,
        _ => DayKind::Weekday,
    }
}

/// Returns the English name of a day of the week (e.g., "Monday").
pub fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
