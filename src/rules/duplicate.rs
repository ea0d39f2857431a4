//! Conflicting duplicate detection.
//!
//! The same `(source, comment)` may legitimately appear several times in a
//! context (one string used at several places). It becomes a problem when the
//! occurrences carry different translations: only the first one is used.

use std::collections::HashMap;

use crate::{
    core::{Catalog, LoadedCatalog, Message},
    issues::DuplicateSourceIssue,
    rules::helpers::message_context,
};

pub fn check_duplicate_issues(catalogs: &[LoadedCatalog]) -> Vec<DuplicateSourceIssue> {
    catalogs
        .iter()
        .flat_map(|loaded| check_duplicates(&loaded.file_path, &loaded.catalog))
        .collect()
}

pub fn check_duplicates(file_path: &str, catalog: &Catalog) -> Vec<DuplicateSourceIssue> {
    let mut issues = Vec::new();

    for ctx in &catalog.contexts {
        let mut first_seen: HashMap<(&str, &str), &Message> = HashMap::new();
        for msg in ctx.messages.iter().filter(|msg| msg.status.is_active()) {
            let key = (msg.source.as_str(), msg.disambiguation());
            match first_seen.get(&key) {
                None => {
                    first_seen.insert(key, msg);
                }
                Some(first) => {
                    if first.translation != msg.translation || first.status != msg.status {
                        issues.push(DuplicateSourceIssue {
                            context: message_context(file_path, &ctx.name, msg),
                            comment: msg.comment.clone().filter(|c| !c.is_empty()),
                            first_line: first.line.unwrap_or(1),
                        });
                    }
                }
            }
        }
    }

    issues
}
