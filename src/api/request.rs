//! Request types for the Shift Wage Engine API.
//!
//! Shift fields arrive as the text a user typed. They are parsed and validated
//! by [`parse_shift_fields`] before anything is computed.

use serde::{Deserialize, Serialize};

use crate::calculation::{ShiftFields, parse_shift_fields};
use crate::error::EngineResult;
use crate::export::ExportFormat;
use crate::history::HistoryStore;
use crate::models::ShiftInput;

/// Request body for `/calculate`, `POST /history` and `PUT /history/:index`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Worker name.
    pub worker_name: String,
    /// Mission label.
    pub mission_id: String,
    /// Shift date, `YYYY-MM-DD`.
    pub date: String,
    /// Hourly rate as a decimal string. When absent, the rate last used for
    /// the worker is taken from the history store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<String>,
    /// Start time, `HH:MM`.
    pub start_time: String,
    /// End time, `HH:MM`.
    pub end_time: String,
    /// Unpaid break as `H:MM` or decimal hours.
    #[serde(default)]
    pub break_duration: String,
}

impl ShiftRequest {
    /// Parses the request into a validated [`ShiftInput`], falling back to the
    /// worker's remembered rate when no rate was sent.
    pub fn to_shift_input(&self, history: &HistoryStore) -> EngineResult<ShiftInput> {
        let remembered;
        let hourly_rate = match self.hourly_rate.as_deref().map(str::trim) {
            Some(rate) if !rate.is_empty() => rate,
            _ => {
                remembered = history.remembered_rate(self.worker_name.trim())?.to_string();
                remembered.as_str()
            }
        };

        parse_shift_fields(&ShiftFields {
            worker_name: &self.worker_name,
            mission_id: &self.mission_id,
            date: &self.date,
            hourly_rate,
            start_time: &self.start_time,
            end_time: &self.end_time,
            break_duration: &self.break_duration,
        })
    }
}

/// Query parameters for `GET /history/export`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ExportQuery {
    /// Output format; an xlsx workbook when omitted.
    #[serde(default)]
    pub format: ExportFormat,
}
