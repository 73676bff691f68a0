//! Per-file conversion summary, display-only.

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// What happened to one input file. Carries no effect on row construction;
/// surfaced in the CLI summary table and optional JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSummary {
    /// Uploaded file name.
    pub file_name: String,
    /// Detected platform for this file.
    pub platform: Platform,
    /// Target fields that resolved to a source column.
    pub mapped_fields: usize,
    /// Total auto-mapping target fields.
    pub total_fields: usize,
    /// Order rows converted from this file.
    pub row_count: usize,
}

impl FileSummary {
    /// "mapped/total" display form, e.g. `7/9`.
    pub fn mapped_display(&self) -> String {
        format!("{}/{}", self.mapped_fields, self.total_fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_serializes() {
        let summary = FileSummary {
            file_name: "orders.xlsx".to_string(),
            platform: Platform::Coupang,
            mapped_fields: 7,
            total_fields: 9,
            row_count: 42,
        };
        let json = serde_json::to_string(&summary).unwrap();
        let round: FileSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(round.platform, Platform::Coupang);
        assert_eq!(round.mapped_display(), "7/9");
    }
}
