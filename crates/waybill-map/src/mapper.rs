//! Per-field source-column resolution against the candidate map.

use tracing::debug;

use waybill_model::{FieldMapping, Platform, Table};

use crate::registry::PlatformRegistry;
use crate::resolver::find_column;

/// Builds the field mapping for one source table.
///
/// Iterates the candidate map in declaration order. Known platforms resolve
/// against their own alias lists; [`Platform::Unknown`] tries each known
/// platform's list in the fixed fallback order and takes the first hit.
/// Target fields absent from the candidate map are never mapped.
pub fn build_mapping(table: &Table, platform: Platform, registry: &PlatformRegistry) -> FieldMapping {
    let mut mapping = FieldMapping::default();

    for candidates in &registry.candidates {
        let resolved = match platform {
            Platform::Unknown => Platform::UNKNOWN_FALLBACK
                .iter()
                .find_map(|p| resolve_for(table, candidates.aliases_for(*p))),
            known => resolve_for(table, candidates.aliases_for(known)),
        };
        debug!(
            field = %candidates.field,
            source = resolved.as_deref().unwrap_or("-"),
            "field resolved"
        );
        mapping.push(candidates.field.clone(), resolved);
    }

    mapping
}

fn resolve_for(table: &Table, aliases: Option<&[String]>) -> Option<String> {
    aliases.and_then(|aliases| find_column(table, aliases))
}
