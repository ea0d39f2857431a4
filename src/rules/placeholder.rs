//! Placeholder mismatch detection.
//!
//! A finished translation must use the same set of `%N` placeholders as its
//! source. A placeholder missing from the translation silently drops an
//! argument at runtime; an extra one is printed literally.

use crate::{
    core::{Catalog, LoadedCatalog, Translation, utils::placeholders},
    issues::PlaceholderMismatchIssue,
    rules::helpers::message_context,
};

pub fn check_placeholder_issues(catalogs: &[LoadedCatalog]) -> Vec<PlaceholderMismatchIssue> {
    catalogs
        .iter()
        .flat_map(|loaded| check_placeholders(&loaded.file_path, &loaded.catalog))
        .collect()
}

pub fn check_placeholders(file_path: &str, catalog: &Catalog) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for (context, msg) in catalog.messages() {
        if !msg.is_finished() {
            continue;
        }
        let expected = placeholders(&msg.source);
        let forms: Vec<(Option<usize>, &str)> = match &msg.translation {
            Translation::Single(text) => vec![(None, text.as_str())],
            Translation::Numerus(forms) => forms
                .iter()
                .enumerate()
                .filter(|(_, form)| !form.is_empty())
                .map(|(index, form)| (Some(index), form.as_str()))
                .collect(),
        };

        for (form, text) in forms {
            let actual = placeholders(text);
            if actual == expected {
                continue;
            }
            issues.push(PlaceholderMismatchIssue {
                context: message_context(file_path, context, msg),
                missing: format_placeholders(expected.difference(&actual)),
                unexpected: format_placeholders(actual.difference(&expected)),
                form,
            });
        }
    }

    issues
}

fn format_placeholders<'a>(indices: impl Iterator<Item = &'a usize>) -> Vec<String> {
    indices.map(|index| format!("%{}", index)).collect()
}
