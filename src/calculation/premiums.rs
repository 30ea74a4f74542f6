//! Premium and pay aggregation.
//!
//! Turns per-bucket minute counts into base pay, the four premium amounts
//! and gross pay. Night, Saturday and Sunday/holiday premiums are fixed
//! amounts per hour; the overtime premium is a fraction of the hourly rate.

use rust_decimal::Decimal;

use crate::config::PremiumConfig;
use crate::models::{AuditStep, BucketMinutes, Premiums};

use super::rounding::round_currency;

/// The result of aggregating pay for a classified shift.
#[derive(Debug, Clone)]
pub struct PayCalculation {
    /// Worked hours times the hourly rate.
    pub base_pay: Decimal,
    /// Premium amounts.
    pub premiums: Premiums,
    /// Base pay plus all premiums.
    pub gross_pay: Decimal,
    /// True if overtime minutes were present but their premium was withheld.
    pub overtime_suppressed: bool,
    /// The audit steps recording suppression and the pay calculation.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates base pay, premiums and gross pay for classified minutes.
///
/// Overtime only pays on a plain weekday: if any night, Saturday or
/// Sunday/holiday minute is present the overtime premium is zero for the
/// whole shift. Each amount is rounded half-up to two places and gross pay
/// is the sum of the rounded amounts.
///
/// # Example
///
/// ```
/// use shift_wage_engine::calculation::calculate_pay;
/// use shift_wage_engine::config::PremiumConfig;
/// use shift_wage_engine::models::BucketMinutes;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let minutes = BucketMinutes { night: 180, normal: 60, ..Default::default() };
/// let pay = calculate_pay(&minutes, Decimal::from_str("30").unwrap(), &PremiumConfig::default(), 1);
///
/// assert_eq!(pay.base_pay, Decimal::from_str("120.00").unwrap());
/// assert_eq!(pay.premiums.night, Decimal::from_str("25.20").unwrap());
/// assert_eq!(pay.gross_pay, Decimal::from_str("145.20").unwrap());
/// ```
pub fn calculate_pay(
    minutes: &BucketMinutes,
    hourly_rate: Decimal,
    config: &PremiumConfig,
    step_number: u32,
) -> PayCalculation {
    let mut audit_steps = Vec::new();
    let mut step_number = step_number;

    let overtime_applies = !minutes.has_premium_minutes();
    let overtime_suppressed = !overtime_applies && minutes.overtime > 0;

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "overtime_suppression".to_string(),
        rule_name: "Overtime Suppression".to_string(),
        input: serde_json::json!({
            "overtime_minutes": minutes.overtime,
            "night_minutes": minutes.night,
            "saturday_minutes": minutes.saturday,
            "sunday_minutes": minutes.sunday,
        }),
        output: serde_json::json!({
            "overtime_applies": overtime_applies,
            "overtime_suppressed": overtime_suppressed,
        }),
        reasoning: if overtime_applies {
            "No night or weekend minutes, overtime premium applies".to_string()
        } else {
            "Night or weekend minutes present, overtime premium withheld".to_string()
        },
    });
    step_number += 1;

    let rates = &config.rates;
    let base_pay = amount_for_minutes(minutes.total(), hourly_rate);

    let premiums = Premiums {
        night: amount_for_minutes(minutes.night, rates.night_per_hour),
        saturday: amount_for_minutes(minutes.saturday, rates.saturday_per_hour),
        sunday: amount_for_minutes(minutes.sunday, rates.sunday_per_hour),
        overtime: if overtime_applies {
            amount_for_minutes(minutes.overtime, hourly_rate * config.overtime.surcharge)
        } else {
            Decimal::ZERO
        },
    };

    let gross_pay = base_pay + premiums.total();

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "pay_calculation".to_string(),
        rule_name: "Base Pay and Premiums".to_string(),
        input: serde_json::json!({
            "worked_minutes": minutes.total(),
            "hourly_rate": hourly_rate.normalize().to_string(),
            "night_per_hour": rates.night_per_hour.normalize().to_string(),
            "saturday_per_hour": rates.saturday_per_hour.normalize().to_string(),
            "sunday_per_hour": rates.sunday_per_hour.normalize().to_string(),
            "overtime_surcharge": config.overtime.surcharge.normalize().to_string(),
        }),
        output: serde_json::json!({
            "base_pay": base_pay.to_string(),
            "night_premium": premiums.night.to_string(),
            "saturday_premium": premiums.saturday.to_string(),
            "sunday_premium": premiums.sunday.to_string(),
            "overtime_premium": premiums.overtime.to_string(),
            "gross_pay": gross_pay.to_string(),
        }),
        reasoning: format!(
            "Base pay {} plus premiums {} gives gross pay {}",
            base_pay,
            premiums.total(),
            gross_pay
        ),
    });

    PayCalculation {
        base_pay,
        premiums,
        gross_pay,
        overtime_suppressed,
        audit_steps,
    }
}

/// Pays `minutes` at `per_hour`, rounded to cents.
///
/// Multiplies before dividing so whole-cent midpoints stay exact.
fn amount_for_minutes(minutes: i64, per_hour: Decimal) -> Decimal {
    round_currency(Decimal::from(minutes) * per_hour / Decimal::from(60))
}
