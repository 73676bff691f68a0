//! Error types for workbook ingestion.

use thiserror::Error;

/// Errors that can occur while turning uploaded bytes into a table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Bytes could not be opened or parsed as a workbook.
    #[error("failed to decode workbook '{name}': {message}")]
    WorkbookDecode { name: String, message: String },

    /// The workbook has no sheet, or no header row at the requested offset.
    #[error("workbook '{name}' has no usable header row")]
    EmptyWorkbook { name: String },

    /// The payload is an encrypted container and no decryptor that can open
    /// it was provided.
    #[error("workbook '{name}' is encrypted and cannot be opened here")]
    Encrypted { name: String },

    /// A decoded row disagreed with the header width.
    #[error(transparent)]
    Model(#[from] waybill_model::ModelError),
}

pub type Result<T> = std::result::Result<T, IngestError>;
