//! Resolved source-column assignment per target field, for one input table.

use serde::{Deserialize, Serialize};

/// One target field's resolution: the source column it copies from, or
/// `None` when no candidate alias matched (the output column stays blank).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldAssignment {
    /// Target invoice field name.
    pub target: String,
    /// Resolved source header, exactly as it appears in the input table.
    pub source: Option<String>,
}

/// Field mapping for one source table. Built once by the field mapper,
/// consumed by the row builder, never mutated afterward.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Assignments in candidate-map declaration order.
    pub assignments: Vec<FieldAssignment>,
}

impl FieldMapping {
    pub fn push(&mut self, target: impl Into<String>, source: Option<String>) {
        self.assignments.push(FieldAssignment {
            target: target.into(),
            source,
        });
    }

    /// Resolved source column for a target field, if any.
    pub fn source_for(&self, target: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.target == target)
            .and_then(|a| a.source.as_deref())
    }

    /// Count of fields that resolved to a source column.
    pub fn mapped_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.source.is_some()).count()
    }

    /// Total number of auto-mapping target fields.
    pub fn total_count(&self) -> usize {
        self.assignments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_lookup() {
        let mut mapping = FieldMapping::default();
        mapping.push("고객주문번호", Some("주문번호".to_string()));
        mapping.push("품목명", None);
        assert_eq!(mapping.mapped_count(), 1);
        assert_eq!(mapping.total_count(), 2);
        assert_eq!(mapping.source_for("고객주문번호"), Some("주문번호"));
        assert_eq!(mapping.source_for("품목명"), None);
        assert_eq!(mapping.source_for("없는필드"), None);
    }
}
