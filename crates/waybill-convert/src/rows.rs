//! Invoice row construction from a classified, mapped source table.

use waybill_model::{FieldMapping, Platform, Result, Table, TargetSchema};

use crate::synth::synthesize;

/// Builds the output rows for one source table.
///
/// Every schema field starts as a blank column with one cell per source
/// row. Mapped fields are then copied verbatim from their resolved source
/// columns, and platform synthesizers overwrite the fields they own.
/// Unmapped fields without a synthesizer stay blank; for an unclassified
/// table with no resolved fields this yields an all-blank block of the
/// same row count, which is intentional.
pub fn build_rows(
    schema: &TargetSchema,
    source: &Table,
    mapping: &FieldMapping,
    platform: Platform,
) -> Result<Table> {
    let row_count = source.row_count();
    let mut columns: Vec<Vec<String>> = schema
        .fields()
        .iter()
        .map(|_| vec![String::new(); row_count])
        .collect();

    for (idx, field) in schema.fields().iter().enumerate() {
        if let Some(header) = mapping.source_for(field)
            && let Some(values) = source.column(header)
        {
            columns[idx] = values.into_iter().map(str::to_string).collect();
        }
    }

    for synthesized in synthesize(source, platform) {
        if synthesized.values.len() != row_count {
            continue;
        }
        if let Some(idx) = schema.fields().iter().position(|f| *f == synthesized.field) {
            columns[idx] = synthesized.values;
        }
    }

    let rows: Vec<Vec<String>> = (0..row_count)
        .map(|r| columns.iter().map(|col| col[r].clone()).collect())
        .collect();
    Table::new(schema.fields().to_vec(), rows)
}

/// Concatenates per-file output tables in input order. All parts were built
/// against the same schema, so the header rows agree by construction.
pub fn concat(schema: &TargetSchema, parts: Vec<Table>) -> Result<Table> {
    let mut rows = Vec::new();
    for part in parts {
        rows.extend(part.rows().iter().cloned());
    }
    Table::new(schema.fields().to_vec(), rows)
}
