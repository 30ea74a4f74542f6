//! JSON export of full breakdowns, audit trace included.

use crate::error::{EngineError, EngineResult};
use crate::models::WageBreakdown;

use super::TabularExporter;

/// Writes breakdowns as a pretty-printed JSON array.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl TabularExporter for JsonExporter {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }

    fn export(&self, records: &[WageBreakdown]) -> EngineResult<Vec<u8>> {
        serde_json::to_vec_pretty(records).map_err(|e| EngineError::ExportError {
            message: e.to_string(),
        })
    }
}
