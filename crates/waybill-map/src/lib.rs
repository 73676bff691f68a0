//! Platform detection and field-mapping engine.
//!
//! Given a decoded order table, this crate answers two questions:
//! which marketplace produced it, and which source column feeds each
//! target invoice field. Matching is heuristic: headers are canonicalized
//! by [`normalize::normalize`] and compared exactly, then by substring
//! containment, against per-platform keyword and alias tables held in an
//! immutable [`registry::PlatformRegistry`].

pub mod classify;
pub mod mapper;
pub mod normalize;
pub mod registry;
pub mod resolver;

pub use classify::detect;
pub use mapper::build_mapping;
pub use normalize::{normalize, normalize_value};
pub use registry::{FieldCandidates, PlatformRegistry, SignatureSet, ValueHint};
pub use resolver::find_column;
