//! Catalog data model.
//!
//! ## Module Structure
//!
//! - `catalog`: Catalog and Context (document structure, statistics)
//! - `message`: Message, Translation, TranslationStatus, Location

pub mod catalog;
pub mod message;

pub use catalog::{Catalog, CatalogStats, Context};
pub use message::{Location, Message, Translation, TranslationStatus};
