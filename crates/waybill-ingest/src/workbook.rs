//! Workbook decoding: raw xlsx bytes into a [`Table`].

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use tracing::debug;

use waybill_model::Table;

use crate::error::{IngestError, Result};

/// Decodes the first sheet of an xlsx payload.
///
/// `header_offset` rows are discarded before the header row; 0 reads a
/// standard single-header-row table, 1 skips a boilerplate first row and
/// uses the second row as headers.
pub fn read_workbook(name: &str, bytes: &[u8], header_offset: usize) -> Result<Table> {
    let mut workbook =
        Xlsx::new(Cursor::new(bytes)).map_err(|error| IngestError::WorkbookDecode {
            name: name.to_string(),
            message: error.to_string(),
        })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::EmptyWorkbook {
            name: name.to_string(),
        })?
        .map_err(|error| IngestError::WorkbookDecode {
            name: name.to_string(),
            message: error.to_string(),
        })?;

    let mut rows = range.rows().skip(header_offset);
    let header_row = rows.next().ok_or_else(|| IngestError::EmptyWorkbook {
        name: name.to_string(),
    })?;

    let mut headers: Vec<String> = header_row.iter().map(cell_to_string).collect();
    while headers.last().is_some_and(|h| h.trim().is_empty()) {
        headers.pop();
    }
    if headers.is_empty() {
        return Err(IngestError::EmptyWorkbook {
            name: name.to_string(),
        });
    }

    let width = headers.len();
    let data: Vec<Vec<String>> = rows
        .map(|row| {
            (0..width)
                .map(|idx| row.get(idx).map(cell_to_string).unwrap_or_default())
                .collect()
        })
        .collect();

    debug!(
        file = name,
        header_offset,
        columns = width,
        rows = data.len(),
        "workbook decoded"
    );

    Ok(Table::new(headers, data)?)
}

/// Renders a cell as text. Missing values become empty strings, and whole
/// floats print without the trailing `.0` so order numbers and quantities
/// survive the numeric round-trip spreadsheets apply to them.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Bool(b) => b.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn workbook_bytes(rows: &[&[&str]]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                worksheet
                    .write_string(r as u32, c as u16, *value)
                    .unwrap();
            }
        }
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn reads_single_header_row_table() {
        let bytes = workbook_bytes(&[
            &["주문번호", "수취인이름"],
            &["1001", "김민수"],
            &["1002", "이서연"],
        ]);
        let table = read_workbook("orders.xlsx", &bytes, 0).unwrap();
        assert_eq!(table.headers(), &["주문번호", "수취인이름"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column("수취인이름").unwrap(), vec!["김민수", "이서연"]);
    }

    #[test]
    fn header_offset_skips_boilerplate_row() {
        let bytes = workbook_bytes(&[
            &["이 파일은 자동 생성되었습니다"],
            &["주문번호", "상품명"],
            &["A-1", "티셔츠"],
        ]);
        let table = read_workbook("ably.xlsx", &bytes, 1).unwrap();
        assert_eq!(table.headers(), &["주문번호", "상품명"]);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn garbage_bytes_fail_decode() {
        let err = read_workbook("junk.bin", b"not a workbook", 0).unwrap_err();
        assert!(matches!(err, IngestError::WorkbookDecode { .. }));
    }

    #[test]
    fn numeric_cells_render_without_float_suffix() {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "수량").unwrap();
        worksheet.write_number(1, 0, 3.0).unwrap();
        worksheet.write_number(2, 0, 2.5).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let table = read_workbook("qty.xlsx", &bytes, 0).unwrap();
        assert_eq!(table.column("수량").unwrap(), vec!["3", "2.5"]);
    }
}
