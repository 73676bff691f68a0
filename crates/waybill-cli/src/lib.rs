//! CLI library components for the invoice converter.

pub mod logging;
