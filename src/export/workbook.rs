//! Excel workbook export.
//!
//! One worksheet holding the wage table: a bold header row frozen in place,
//! one row per breakdown, and columns sized to their content.

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet, XlsxError};

use crate::error::{EngineError, EngineResult};
use crate::models::WageBreakdown;

use super::{TabularExporter, WageTable};

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Wage history";

/// Writes breakdowns as an `.xlsx` workbook.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxExporter;

impl TabularExporter for XlsxExporter {
    fn content_type(&self) -> &'static str {
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    }

    fn file_extension(&self) -> &'static str {
        "xlsx"
    }

    fn export(&self, records: &[WageBreakdown]) -> EngineResult<Vec<u8>> {
        let table = WageTable::from_breakdowns(records);
        let mut workbook = Workbook::new();
        {
            let worksheet = workbook.add_worksheet();
            fill_worksheet(worksheet, &table)?;
        }
        workbook.save_to_buffer().map_err(xlsx_error)
    }
}

fn fill_worksheet(worksheet: &mut Worksheet, table: &WageTable) -> EngineResult<()> {
    let header_format = Format::new().set_bold();

    worksheet.set_name(SHEET_NAME).map_err(xlsx_error)?;

    for (col, header) in table.headers.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col_num(col)?, header, &header_format)
            .map_err(xlsx_error)?;
    }

    for (index, row) in table.rows.iter().enumerate() {
        let row_num = row_num(index + 1)?;
        for (col, cell) in row.iter().enumerate() {
            worksheet
                .write_string(row_num, col_num(col)?, cell)
                .map_err(xlsx_error)?;
        }
    }

    worksheet.set_freeze_panes(1, 0).map_err(xlsx_error)?;
    worksheet.autofit();
    Ok(())
}

fn row_num(index: usize) -> EngineResult<RowNum> {
    RowNum::try_from(index).map_err(|_| EngineError::ExportError {
        message: format!("row {} exceeds the worksheet limit", index),
    })
}

fn col_num(index: usize) -> EngineResult<ColNum> {
    ColNum::try_from(index).map_err(|_| EngineError::ExportError {
        message: format!("column {} exceeds the worksheet limit", index),
    })
}

fn xlsx_error(err: XlsxError) -> EngineError {
    EngineError::ExportError {
        message: err.to_string(),
    }
}
