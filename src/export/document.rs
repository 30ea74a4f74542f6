//! Plain-text document export.
//!
//! Renders an aligned table: the header, a rule line under it, then one line
//! per breakdown. Every column is as wide as its widest cell.

use crate::error::EngineResult;
use crate::models::WageBreakdown;

use super::{TabularExporter, WageTable};

const COLUMN_GAP: &str = "  ";

/// Writes breakdowns as a fixed-width text table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextTableExporter;

impl TextTableExporter {
    /// Renders the table to a string.
    pub fn render(&self, records: &[WageBreakdown]) -> String {
        let table = WageTable::from_breakdowns(records);
        let widths = table.column_widths();

        let mut out = String::new();
        push_line(&mut out, &table.headers, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule, &widths);
        for row in &table.rows {
            push_line(&mut out, row, &widths);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect();
    out.push_str(line.join(COLUMN_GAP).trim_end());
    out.push('\n');
}

impl TabularExporter for TextTableExporter {
    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }

    fn export(&self, records: &[WageBreakdown]) -> EngineResult<Vec<u8>> {
        Ok(self.render(records).into_bytes())
    }
}
