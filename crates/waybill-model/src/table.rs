//! In-memory tabular data with named columns and a uniform row count.

use crate::error::{ModelError, Result};

/// A table read from one source file: an ordered header row plus data rows.
///
/// Cells are plain text; missing values are empty strings. Every row holds
/// exactly one cell per header (enforced at construction).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Builds a table, verifying the uniform-row-count invariant.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let columns = headers.len();
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(ModelError::RaggedRow {
                    row: idx,
                    cells: row.len(),
                    columns,
                });
            }
        }
        Ok(Self { headers, rows })
    }

    /// Header names in source order, pre-normalization.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Position of a header by exact name. When duplicate headers exist the
    /// first occurrence wins; normalized duplicate handling lives in the
    /// column resolver, not here.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// All cell values of the named column, in row order.
    pub fn column(&self, header: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(header)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// Cell values of the column at a fixed position, if the table is wide
    /// enough. Supports the documented positional last-resort fallback.
    pub fn column_at(&self, idx: usize) -> Option<Vec<&str>> {
        if idx >= self.headers.len() {
            return None;
        }
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }
}
