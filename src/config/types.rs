//! Configuration types for wage calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::models::{HolidayCalendar, PublicHoliday};

/// The wall-clock window in which work counts as night work.
///
/// When `start` is later than `end` the window wraps past midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightWindow {
    /// The time night work begins (inclusive).
    pub start: NaiveTime,
    /// The time night work ends (exclusive).
    pub end: NaiveTime,
}

impl NightWindow {
    /// Returns true if the given minute of the day (0..1440) falls inside the window.
    pub fn contains_minute(&self, minute_of_day: u32) -> bool {
        let start = minute_of_day_of(self.start);
        let end = minute_of_day_of(self.end);
        if start <= end {
            minute_of_day >= start && minute_of_day < end
        } else {
            minute_of_day >= start || minute_of_day < end
        }
    }
}

/// Returns the number of minutes since midnight for a wall-clock time.
pub(crate) fn minute_of_day_of(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Fixed per-hour premium amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumRates {
    /// Premium per night hour.
    pub night_per_hour: Decimal,
    /// Premium per Saturday hour.
    pub saturday_per_hour: Decimal,
    /// Premium per Sunday or public holiday hour.
    pub sunday_per_hour: Decimal,
}

/// Daily overtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeConfig {
    /// Worked hours in a single shift after which minutes count as overtime.
    pub threshold_hours: Decimal,
    /// Fraction of the hourly rate paid on top for each overtime hour.
    pub surcharge: Decimal,
}

impl OvertimeConfig {
    /// Returns the threshold expressed in whole minutes.
    pub fn threshold_minutes(&self) -> i64 {
        (self.threshold_hours * Decimal::from(60))
            .round()
            .to_i64()
            .unwrap_or(i64::MAX)
    }
}

/// Premium configuration from premiums.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumConfig {
    /// Currency label used in exports (e.g., "CHF").
    pub currency: String,
    /// The night work window.
    pub night_window: NightWindow,
    /// Fixed per-hour premium amounts.
    pub rates: PremiumRates,
    /// Daily overtime settings.
    pub overtime: OvertimeConfig,
}

impl Default for PremiumConfig {
    /// Swiss defaults: night 23:00 to 06:00 at 8.40, Saturday 2.40,
    /// Sunday/holiday 4.80, overtime beyond 9.5 hours at 25% of the rate.
    fn default() -> Self {
        Self {
            currency: "CHF".to_string(),
            night_window: NightWindow {
                start: NaiveTime::from_hms_opt(23, 0, 0).expect("Valid night start"),
                end: NaiveTime::from_hms_opt(6, 0, 0).expect("Valid night end"),
            },
            rates: PremiumRates {
                night_per_hour: Decimal::new(840, 2),
                saturday_per_hour: Decimal::new(240, 2),
                sunday_per_hour: Decimal::new(480, 2),
            },
            overtime: OvertimeConfig {
                threshold_hours: Decimal::new(95, 1),
                surcharge: Decimal::new(25, 2),
            },
        }
    }
}

/// Holidays configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// The configured public holidays.
    #[serde(default)]
    pub holidays: Vec<PublicHoliday>,
}

/// The complete wage configuration loaded from YAML files.
#[derive(Debug, Clone, Default)]
pub struct WageConfig {
    premiums: PremiumConfig,
    holidays: HolidayCalendar,
}

impl WageConfig {
    /// Creates a new WageConfig from its component parts.
    pub fn new(premiums: PremiumConfig, holidays: HolidayCalendar) -> Self {
        Self { premiums, holidays }
    }

    /// Returns the premium configuration.
    pub fn premiums(&self) -> &PremiumConfig {
        &self.premiums
    }

    /// Returns the public holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }
}
