//! Target invoice schema: the ordered field list every output table conforms to.

use crate::error::{ModelError, Result};

/// Ordered list of output field names, either the built-in carrier template
/// or the header row of an uploaded template workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSchema {
    fields: Vec<String>,
}

/// Built-in invoice template fields. The first nine are auto-mapping targets;
/// the carrier fields after them have no candidate aliases and stay blank.
const DEFAULT_FIELDS: [&str; 12] = [
    "고객주문번호",
    "품목명",
    "기타1",
    "내품수량",
    "받는분성명",
    "받는분전화번호",
    "받는분우편번호",
    "받는분주소",
    "배송메시지",
    "운송장번호",
    "박스수량",
    "기타2",
];

impl TargetSchema {
    /// Builds a schema from an uploaded template's header row.
    pub fn new(fields: Vec<String>) -> Result<Self> {
        if fields.is_empty() {
            return Err(ModelError::EmptySchema);
        }
        Ok(Self { fields })
    }

    /// The built-in carrier invoice template.
    pub fn builtin() -> Self {
        Self {
            fields: DEFAULT_FIELDS.iter().map(|f| (*f).to_string()).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}

impl Default for TargetSchema {
    fn default() -> Self {
        Self::builtin()
    }
}
