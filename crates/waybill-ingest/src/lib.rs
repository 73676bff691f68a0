//! Workbook ingestion: xlsx payloads into [`waybill_model::Table`]s.

pub mod decrypt;
pub mod error;
pub mod workbook;

pub use decrypt::{Decryptor, PlainDecryptor, is_encrypted};
pub use error::{IngestError, Result};
pub use workbook::read_workbook;
