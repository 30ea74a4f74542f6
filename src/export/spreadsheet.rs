//! CSV spreadsheet export.
//!
//! The header row is always the first record, so spreadsheet tools that
//! freeze the first row show it as a fixed header.

use crate::error::{EngineError, EngineResult};
use crate::models::WageBreakdown;

use super::{TabularExporter, WageTable};

/// Writes breakdowns as comma-separated values.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl TabularExporter for CsvExporter {
    fn content_type(&self) -> &'static str {
        "text/csv; charset=utf-8"
    }

    fn file_extension(&self) -> &'static str {
        "csv"
    }

    fn export(&self, records: &[WageBreakdown]) -> EngineResult<Vec<u8>> {
        let table = WageTable::from_breakdowns(records);
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer.write_record(&table.headers).map_err(export_error)?;
        for row in &table.rows {
            writer.write_record(row).map_err(export_error)?;
        }

        writer.into_inner().map_err(|e| EngineError::ExportError {
            message: e.to_string(),
        })
    }
}

fn export_error(err: csv::Error) -> EngineError {
    EngineError::ExportError {
        message: err.to_string(),
    }
}
