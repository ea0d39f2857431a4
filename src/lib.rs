//! tscat - load, resolve and check XML (TS) translation catalogs
//!
//! A TS catalog maps `(context, source text, disambiguation comment)` to a
//! translation for one target language. This crate loads such catalogs,
//! resolves source strings to display text with fallback to the source, writes
//! catalogs back out, and checks them for common translation problems.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog model, loader, lookup service and writer
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Catalog checks

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
