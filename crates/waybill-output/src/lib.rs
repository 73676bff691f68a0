//! Workbook encoding: a merged invoice [`Table`] to xlsx bytes.

use chrono::{DateTime, Local};
use rust_xlsxwriter::{Workbook, XlsxError};
use thiserror::Error;
use tracing::debug;

use waybill_model::Table;

/// Errors raised while producing the downloadable workbook.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to encode workbook: {0}")]
    WorkbookEncode(#[from] XlsxError),
}

pub type Result<T> = std::result::Result<T, OutputError>;

/// Encodes a table as a single-sheet xlsx payload: header row first, then
/// every data row, all cells as text.
pub fn write_workbook(table: &Table) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in table.headers().iter().enumerate() {
        worksheet.write_string(0, col as u16, header)?;
    }
    for (row_idx, row) in table.rows().iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            worksheet.write_string(row_idx as u32 + 1, col as u16, value)?;
        }
    }

    let bytes = workbook.save_to_buffer()?;
    debug!(
        columns = table.column_count(),
        rows = table.row_count(),
        bytes = bytes.len(),
        "workbook encoded"
    );
    Ok(bytes)
}

/// Download filename for the merged invoice file. One file is produced per
/// run, so second-resolution timestamps are collision-safe in practice.
pub fn merged_filename(now: DateTime<Local>) -> String {
    format!("merged_invoice_{}.xlsx", now.format("%Y%m%d_%H%M%S"))
}
