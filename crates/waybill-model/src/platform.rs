//! Marketplace platform enumeration.

use serde::{Deserialize, Serialize};

/// Source marketplace of an order export, detected per file.
///
/// The declaration order doubles as the classifier tie-break priority:
/// when two platforms score equal and nonzero, the first declared wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Coupang,
    SmartStore,
    Ably,
    /// Headers matched no signature set; mapping falls back to a fixed
    /// candidate search order across all known platforms.
    Unknown,
}

impl Platform {
    /// The known platforms, in classifier priority order.
    pub const KNOWN: [Platform; 3] = [Platform::Coupang, Platform::SmartStore, Platform::Ably];

    /// Candidate search order used when a file classifies as [`Platform::Unknown`].
    /// SmartStore exports are the most header-ambiguous in practice, so its
    /// aliases are tried first.
    pub const UNKNOWN_FALLBACK: [Platform; 3] =
        [Platform::SmartStore, Platform::Coupang, Platform::Ably];

    /// Display name for summaries and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Coupang => "쿠팡",
            Platform::SmartStore => "스마트스토어",
            Platform::Ably => "에이블리",
            Platform::Unknown => "알수없음",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Platform::Coupang => "coupang",
            Platform::SmartStore => "smartstore",
            Platform::Ably => "ably",
            Platform::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
