//! The tabular view of wage breakdowns shared by every exporter.

use rust_decimal::Decimal;

use crate::models::WageBreakdown;

/// Column headers, in output order.
pub const COLUMNS: [&str; 24] = [
    "Mission",
    "Worker",
    "Date",
    "Day",
    "Start",
    "End",
    "Hourly rate",
    "Break (h)",
    "Total hours",
    "Total (h:mm)",
    "Night hours",
    "Night (h:mm)",
    "Saturday hours",
    "Saturday (h:mm)",
    "Sunday/holiday hours",
    "Sunday/holiday (h:mm)",
    "Overtime hours",
    "Overtime (h:mm)",
    "Night premium",
    "Saturday premium",
    "Sunday/holiday premium",
    "Overtime premium",
    "Base pay",
    "Gross pay",
];

/// A header row plus one row of cells per breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WageTable {
    /// Column headers.
    pub headers: Vec<String>,
    /// One row per breakdown, in input order.
    pub rows: Vec<Vec<String>>,
}

impl WageTable {
    /// Builds the table for a sequence of breakdowns.
    pub fn from_breakdowns(records: &[WageBreakdown]) -> Self {
        Self {
            headers: COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: records.iter().map(row_for).collect(),
        }
    }

    /// Returns the display width of each column: the widest cell, header included.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

fn money(value: Decimal) -> String {
    format!("{:.2}", value)
}

fn row_for(b: &WageBreakdown) -> Vec<String> {
    vec![
        b.mission_id.clone(),
        b.worker_name.clone(),
        b.date.to_string(),
        b.day_name.clone(),
        b.start_time.clone(),
        b.end_time.clone(),
        money(b.hourly_rate),
        money(b.break_hours),
        money(b.hours.total),
        b.hours_hhmm.total.clone(),
        money(b.hours.night),
        b.hours_hhmm.night.clone(),
        money(b.hours.saturday),
        b.hours_hhmm.saturday.clone(),
        money(b.hours.sunday),
        b.hours_hhmm.sunday.clone(),
        money(b.hours.overtime),
        b.hours_hhmm.overtime.clone(),
        money(b.premiums.night),
        money(b.premiums.saturday),
        money(b.premiums.sunday),
        money(b.premiums.overtime),
        money(b.base_pay),
        money(b.gross_pay),
    ]
}
