//! Export of stored wage breakdowns.
//!
//! Every exporter renders the same tabular view (see [`WageTable`]): one header
//! row and one row per breakdown. The spreadsheet form is an `.xlsx` workbook
//! with a frozen header and auto-sized columns, with CSV as a plain alternative.
//! The document form is an aligned plain-text table, and the JSON form carries
//! full breakdowns.

mod document;
mod json;
mod spreadsheet;
mod table;
mod workbook;

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::WageBreakdown;

pub use document::TextTableExporter;
pub use json::JsonExporter;
pub use spreadsheet::CsvExporter;
pub use table::{COLUMNS, WageTable};
pub use workbook::{SHEET_NAME, XlsxExporter};

/// The available export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Excel workbook.
    #[default]
    Xlsx,
    /// Comma-separated spreadsheet.
    Csv,
    /// Aligned plain-text document.
    Text,
    /// JSON array of breakdowns.
    Json,
}

/// Renders a sequence of breakdowns into a byte stream.
pub trait TabularExporter {
    /// The MIME type of the rendered output.
    fn content_type(&self) -> &'static str;

    /// The file extension used when the output is offered as a download.
    fn file_extension(&self) -> &'static str;

    /// Renders the breakdowns, in order.
    fn export(&self, records: &[WageBreakdown]) -> EngineResult<Vec<u8>>;
}

/// Returns the exporter for a format.
pub fn exporter_for(format: ExportFormat) -> Box<dyn TabularExporter + Send + Sync> {
    match format {
        ExportFormat::Xlsx => Box::new(XlsxExporter),
        ExportFormat::Csv => Box::new(CsvExporter),
        ExportFormat::Text => Box::new(TextTableExporter),
        ExportFormat::Json => Box::new(JsonExporter),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::calculation::compute;
    use crate::config::WageConfig;
    use crate::models::ShiftInput;
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal::Decimal;

    fn input(worker: &str, mission: &str, day: u32, start: u32, end: u32) -> ShiftInput {
        ShiftInput {
            worker_name: worker.to_string(),
            mission_id: mission.to_string(),
            shift_date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
            hourly_rate: Decimal::from(25),
            start_time: NaiveTime::from_hms_opt(start, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end, 0, 0).unwrap(),
            break_minutes: 0,
        }
    }

    /// A Monday shift and a Saturday shift.
    pub(crate) fn sample_breakdowns() -> Vec<WageBreakdown> {
        let config = WageConfig::default();
        vec![
            compute(&input("Anna", "M-100", 12, 8, 16), &config).unwrap(),
            compute(&input("Beatrice Longname-Example", "M-101", 17, 9, 17), &config).unwrap(),
        ]
    }

    #[test]
    fn test_exporter_for_selects_content_type() {
        assert_eq!(exporter_for(ExportFormat::Xlsx).file_extension(), "xlsx");
        assert!(exporter_for(ExportFormat::Csv).content_type().starts_with("text/csv"));
        assert!(exporter_for(ExportFormat::Text).content_type().starts_with("text/plain"));
        assert_eq!(exporter_for(ExportFormat::Json).content_type(), "application/json");
    }

    #[test]
    fn test_format_deserializes_lowercase() {
        let format: ExportFormat = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(format, ExportFormat::Text);
        let format: ExportFormat = serde_json::from_str("\"xlsx\"").unwrap();
        assert_eq!(format, ExportFormat::Xlsx);
    }

    #[test]
    fn test_default_format_is_workbook() {
        assert_eq!(ExportFormat::default(), ExportFormat::Xlsx);
    }
}
