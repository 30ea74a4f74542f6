//! The shift wage calculator.
//!
//! [`compute`] is a pure function of a [`ShiftInput`] and a [`WageConfig`]. It has
//! no internal state and performs no I/O, so identical inputs always produce
//! identical breakdowns.

use rust_decimal::Decimal;

use crate::config::WageConfig;
use crate::error::EngineResult;
use crate::models::{AuditStep, BucketHhmm, BucketHours, BucketMinutes, ShiftInput, WageBreakdown};

use super::day_detection::{day_name, resolve_day_kind};
use super::minute_classification::classify_shift;
use super::premiums::calculate_pay;
use super::rounding::{hours_to_hhmm, minutes_to_hours, minutes_to_rounded_hours};

/// Computes the wage breakdown for a single shift.
///
/// The input is validated first: a negative rate, a negative break or a break
/// longer than the shift is rejected.
///
/// # Example
///
/// ```
/// use shift_wage_engine::calculation::compute;
/// use shift_wage_engine::config::WageConfig;
/// use shift_wage_engine::models::ShiftInput;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = ShiftInput {
///     worker_name: "Anna".to_string(),
///     mission_id: "M-1".to_string(),
///     shift_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(), // Monday
///     hourly_rate: Decimal::from_str("25.00").unwrap(),
///     start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     break_minutes: 60,
/// };
///
/// let breakdown = compute(&input, &WageConfig::default())?;
/// assert_eq!(breakdown.hours.total, Decimal::from_str("8").unwrap());
/// assert_eq!(breakdown.base_pay, Decimal::from_str("200.00").unwrap());
/// assert_eq!(breakdown.gross_pay, Decimal::from_str("200.00").unwrap());
/// # Ok::<(), shift_wage_engine::error::EngineError>(())
/// ```
pub fn compute(input: &ShiftInput, config: &WageConfig) -> EngineResult<WageBreakdown> {
    input.validate()?;

    let mut audit_trace: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    let gross_minutes = input.gross_minutes();
    let worked_minutes = input.worked_minutes();
    audit_trace.push(AuditStep {
        step_number,
        rule_id: "shift_duration".to_string(),
        rule_name: "Shift Duration".to_string(),
        input: serde_json::json!({
            "start_time": input.start_time.format("%H:%M").to_string(),
            "end_time": input.end_time.format("%H:%M").to_string(),
            "break_minutes": input.break_minutes,
        }),
        output: serde_json::json!({
            "crosses_midnight": input.crosses_midnight(),
            "gross_minutes": gross_minutes,
            "worked_minutes": worked_minutes,
        }),
        reasoning: if input.crosses_midnight() {
            format!(
                "End time is not after start time, shift rolls over midnight: {} gross minutes less {} break",
                gross_minutes, input.break_minutes
            )
        } else {
            format!(
                "{} gross minutes less {} break",
                gross_minutes, input.break_minutes
            )
        },
    });
    step_number += 1;

    let holiday = config.holidays().holiday_on(input.shift_date);
    let day_kind = resolve_day_kind(input.shift_date, config.holidays());
    audit_trace.push(AuditStep {
        step_number,
        rule_id: "day_kind".to_string(),
        rule_name: "Day Kind Resolution".to_string(),
        input: serde_json::json!({
            "shift_date": input.shift_date.to_string(),
            "day_name": day_name(input.day_of_week()),
        }),
        output: serde_json::json!({
            "day_kind": day_kind,
            "holiday": holiday.map(|h| h.name.clone()),
        }),
        reasoning: match holiday {
            Some(h) => format!("{} is the public holiday {}", input.shift_date, h.name),
            None => format!("{} is a {}", input.shift_date, day_name(input.day_of_week())),
        },
    });
    step_number += 1;

    let classification = classify_shift(
        input.start_time,
        worked_minutes,
        day_kind,
        config.premiums(),
        step_number,
    );
    audit_trace.push(classification.audit_step);
    step_number += 1;
    let minutes = classification.minutes;

    let pay = calculate_pay(&minutes, input.hourly_rate, config.premiums(), step_number);
    audit_trace.extend(pay.audit_steps);

    tracing::debug!(
        worker = %input.worker_name,
        date = %input.shift_date,
        worked_minutes,
        gross_pay = %pay.gross_pay,
        "Computed shift wage"
    );

    Ok(WageBreakdown {
        mission_id: input.mission_id.clone(),
        worker_name: input.worker_name.clone(),
        date: input.shift_date,
        day_name: day_name(input.day_of_week()).to_string(),
        day_kind,
        start_time: input.start_time.format("%H:%M").to_string(),
        end_time: input.end_time.format("%H:%M").to_string(),
        hourly_rate: input.hourly_rate,
        break_hours: minutes_to_rounded_hours(input.break_minutes),
        minutes,
        hours: bucket_hours(&minutes),
        hours_hhmm: bucket_hhmm(&minutes),
        premiums: pay.premiums,
        base_pay: pay.base_pay,
        gross_pay: pay.gross_pay,
        overtime_suppressed: pay.overtime_suppressed,
        audit_trace,
    })
}

fn bucket_hours(minutes: &BucketMinutes) -> BucketHours {
    BucketHours {
        total: minutes_to_rounded_hours(minutes.total()),
        night: minutes_to_rounded_hours(minutes.night),
        sunday: minutes_to_rounded_hours(minutes.sunday),
        saturday: minutes_to_rounded_hours(minutes.saturday),
        overtime: minutes_to_rounded_hours(minutes.overtime),
        normal: minutes_to_rounded_hours(minutes.normal),
    }
}

fn bucket_hhmm(minutes: &BucketMinutes) -> BucketHhmm {
    let hhmm = |m: i64| hours_to_hhmm(minutes_to_hours(m));
    BucketHhmm {
        total: hhmm(minutes.total()),
        night: hhmm(minutes.night),
        sunday: hhmm(minutes.sunday),
        saturday: hhmm(minutes.saturday),
        overtime: hhmm(minutes.overtime),
    }
}

/// Sums the per-bucket hours of a breakdown.
///
/// Hours are rounded per bucket, so the sum may differ from the total by a
/// few hundredths.
pub fn bucket_hours_sum(hours: &BucketHours) -> Decimal {
    hours.night + hours.sunday + hours.saturday + hours.overtime + hours.normal
}
