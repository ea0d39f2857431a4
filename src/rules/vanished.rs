//! Vanished message detection.
//!
//! Vanished and obsolete messages no longer exist in the application sources.
//! They never resolve and only grow the catalog.

use crate::{
    core::{Catalog, LoadedCatalog},
    issues::VanishedIssue,
    rules::helpers::message_context,
};

pub fn check_vanished_issues(catalogs: &[LoadedCatalog]) -> Vec<VanishedIssue> {
    catalogs
        .iter()
        .flat_map(|loaded| check_vanished(&loaded.file_path, &loaded.catalog))
        .collect()
}

pub fn check_vanished(file_path: &str, catalog: &Catalog) -> Vec<VanishedIssue> {
    catalog
        .messages()
        .filter(|(_, msg)| !msg.status.is_active())
        .map(|(context, msg)| VanishedIssue {
            context: message_context(file_path, context, msg),
            status: msg.status,
        })
        .collect()
}
