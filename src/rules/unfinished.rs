//! Unfinished translation detection.
//!
//! Reports every active message whose translation is not finished: either
//! marked `unfinished` or finished with empty text. Both fall back to the
//! source text at runtime.

use crate::{
    core::{Catalog, LoadedCatalog, TranslationStatus},
    issues::UnfinishedIssue,
    rules::helpers::message_context,
};

pub fn check_unfinished_issues(catalogs: &[LoadedCatalog]) -> Vec<UnfinishedIssue> {
    catalogs
        .iter()
        .flat_map(|loaded| check_unfinished(&loaded.file_path, &loaded.catalog))
        .collect()
}

pub fn check_unfinished(file_path: &str, catalog: &Catalog) -> Vec<UnfinishedIssue> {
    catalog
        .messages()
        .filter(|(_, msg)| msg.status.is_active() && !msg.is_finished())
        .map(|(context, msg)| UnfinishedIssue {
            context: message_context(file_path, context, msg),
            empty: msg.translation.is_empty() || msg.status == TranslationStatus::Finished,
        })
        .collect()
}
