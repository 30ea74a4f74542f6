//! Public holiday models.
//!
//! This module contains the [`PublicHoliday`] and [`HolidayCalendar`] types used to
//! decide whether a shift date earns the Sunday premium.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single public holiday.
///
/// # Example
///
/// ```
/// use shift_wage_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
///     name: "Bundesfeier".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday (e.g., "Bundesfeier").
    pub name: String,
}

/// A fixed lookup table of public holiday dates.
///
/// The calendar is supplied as configuration; the engine never derives
/// holiday dates itself.
///
/// # Example
///
/// ```
/// use shift_wage_engine::models::{HolidayCalendar, PublicHoliday};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new(vec![PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(),
///     name: "Weihnachten".to_string(),
/// }]);
///
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 12, 25).unwrap()));
/// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 12, 24).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    holidays: Vec<PublicHoliday>,
}

impl HolidayCalendar {
    /// Creates a calendar from a list of holidays, ordered by date.
    pub fn new(holidays: Vec<PublicHoliday>) -> Self {
        let mut holidays = holidays;
        holidays.sort_by(|a, b| a.date.cmp(&b.date));
        Self { holidays }
    }

    /// Returns the holiday falling on `date`, if any.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&PublicHoliday> {
        self.holidays
            .binary_search_by(|h| h.date.cmp(&date))
            .ok()
            .map(|idx| &self.holidays[idx])
    }

    /// Checks if a given date is a configured public holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_on(date).is_some()
    }

    /// Returns all configured holidays in date order.
    pub fn holidays(&self) -> &[PublicHoliday] {
        &self.holidays
    }
}
