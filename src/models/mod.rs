//! Core data models for the Shift Wage Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod holiday;
mod shift_input;
mod wage_breakdown;

pub use holiday::{HolidayCalendar, PublicHoliday};
pub use shift_input::{MAX_HOURLY_RATE, ShiftInput};
pub use wage_breakdown::{
    AuditStep, BucketHhmm, BucketHours, BucketMinutes, MinuteBucket, Premiums, WageBreakdown,
};
