//! Invoice construction: per-platform field synthesizers, the row builder,
//! and the batch pipeline that ties decoding, classification and mapping
//! into one merged output table.

pub mod dedupe;
pub mod error;
pub mod pipeline;
pub mod rows;
pub mod synth;

pub use dedupe::merge_dedup;
pub use error::{ConvertError, Result};
pub use pipeline::{
    BatchOutput, ENCRYPTED_EXPORT_PASSWORD, ENCRYPTED_HEADER_OFFSET, InputFile, convert_batch,
    decode_order_file,
};
pub use rows::{build_rows, concat};
pub use synth::{SynthesizedField, synthesize};
