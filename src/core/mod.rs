//! Catalog engine: data model, loading, resolving and writing.
//!
//! ## Module Structure
//!
//! - `data`: In-memory catalog model
//! - `parsers`: TS document parser
//! - `loader`: File loading with fail-open fallback, catalog discovery
//! - `resolve`: Lookup service (`Translator`)
//! - `plural`: Plural form selection per target language
//! - `writer`: TS document serialization
//! - `utils`: Placeholder substitution and extraction

pub mod data;
pub mod loader;
pub mod parsers;
pub mod plural;
pub mod resolve;
pub mod utils;
pub mod writer;

pub use data::*;
pub use loader::{
    CatalogScanWarning, LoadError, LoadedCatalog, ScanCatalogsResult, load_catalog,
    load_catalog_or_default, scan_catalogs,
};
pub use parsers::ts::{ParseError, parse_ts_file, parse_ts_str};
pub use resolve::Translator;
pub use writer::{write_ts_file, write_ts_string};
