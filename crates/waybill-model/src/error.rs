use thiserror::Error;

/// Errors raised by model invariant violations.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A row's cell count does not match the header count.
    #[error("row {row} has {cells} cells but the table has {columns} columns")]
    RaggedRow {
        row: usize,
        cells: usize,
        columns: usize,
    },

    /// A target schema with no fields is unusable.
    #[error("target schema has no fields")]
    EmptySchema,
}

pub type Result<T> = std::result::Result<T, ModelError>;
