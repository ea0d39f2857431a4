//! Shared string helpers for the catalog engine.
//!
//! - `placeholder`: `%N` placeholder substitution and extraction

pub mod placeholder;

pub use placeholder::*;
