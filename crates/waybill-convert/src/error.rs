//! Error types for batch conversion.

use thiserror::Error;

/// Errors that abort a batch conversion. Per-file mapping gaps and unknown
/// platforms are not errors; they surface as blanks and summary counts.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A file could not be decoded, after both decode attempts.
    #[error(transparent)]
    Ingest(#[from] waybill_ingest::IngestError),

    /// Output assembly violated a table invariant.
    #[error(transparent)]
    Model(#[from] waybill_model::ModelError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
