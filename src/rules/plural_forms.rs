//! Plural form count detection.
//!
//! A numerus translation needs one form per plural category of the catalog
//! language. Missing forms fall back to the source text for the counts that
//! select them; extra forms are never shown. Catalogs without a language, or
//! with a language whose plural rule is unknown, are not checked.

use crate::{
    core::{Catalog, LoadedCatalog, Translation, plural::PluralRule},
    issues::PluralFormsIssue,
    rules::helpers::message_context,
};

pub fn check_plural_forms_issues(catalogs: &[LoadedCatalog]) -> Vec<PluralFormsIssue> {
    catalogs
        .iter()
        .flat_map(|loaded| check_plural_forms(&loaded.file_path, &loaded.catalog))
        .collect()
}

pub fn check_plural_forms(file_path: &str, catalog: &Catalog) -> Vec<PluralFormsIssue> {
    let Some(language) = catalog.language.as_deref() else {
        return Vec::new();
    };
    let Some(rule) = PluralRule::for_known_language(language) else {
        return Vec::new();
    };
    let expected = rule.form_count();

    catalog
        .messages()
        .filter(|(_, msg)| msg.is_finished())
        .filter_map(|(context, msg)| match &msg.translation {
            Translation::Numerus(forms) if forms.len() != expected => Some(PluralFormsIssue {
                context: message_context(file_path, context, msg),
                language: language.to_string(),
                expected,
                found: forms.len(),
            }),
            _ => None,
        })
        .collect()
}
