//! Calculation logic for the Shift Wage Engine.
//!
//! This module contains the wage calculator and its building blocks: parsing of
//! raw input fields, day kind resolution against the holiday calendar,
//! minute-by-minute bucket classification, premium and pay aggregation, and
//! the rounding and `h:mm` formatting helpers.

mod calculator;
mod day_detection;
mod input_parsing;
mod minute_classification;
mod premiums;
mod rounding;

pub use calculator::{bucket_hours_sum, compute};
pub use day_detection::{DayKind, day_name, resolve_day_kind};
pub use input_parsing::{
    ShiftFields, parse_break_minutes, parse_clock_time, parse_date, parse_rate,
    parse_shift_fields,
};
pub use minute_classification::{MinuteClassification, classify_minute, classify_shift};
pub use premiums::{PayCalculation, calculate_pay};
pub use rounding::{hours_to_hhmm, minutes_to_hours, minutes_to_rounded_hours, round_currency};
