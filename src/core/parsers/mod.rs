//! Catalog file parsers.
//!
//! - `ts`: XML translation source (`.ts`) documents

pub mod ts;
