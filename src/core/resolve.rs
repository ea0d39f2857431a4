//! Lookup service: `(context, source text, args)` to display text.
//!
//! # Invariants
//!
//! 1. **Never fails**: every lookup returns a string. Anything that is not a
//!    finished, non-empty translation falls back to the source text.
//!
//! 2. **First wins**: when a context holds the same `(source, comment)` more
//!    than once, the first message in document order defines the translation.
//!
//! 3. **Read-only**: a `Translator` is built once from a catalog and never
//!    mutated; it is `Send + Sync` and can be shared between threads.

use std::collections::{HashMap, hash_map::Entry};

use crate::core::{
    data::{Catalog, Message, Translation},
    plural::PluralRule,
    utils::placeholder::{substitute, substitute_count},
};

/// Lookup key: context name, source text, disambiguation comment.
type MessageKey = (String, String, String);

#[derive(Debug, Clone)]
enum Resolved {
    Single(String),
    Numerus(Vec<String>),
}

/// Immutable index over the finished translations of one catalog.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    entries: HashMap<MessageKey, Option<Resolved>>,
    plural_rule: PluralRule,
}

impl Translator {
    /// Index every active message of `catalog`.
    ///
    /// Unfinished and empty messages are indexed as "no translation" so a
    /// later duplicate cannot override them.
    pub fn new(catalog: &Catalog) -> Self {
        let mut entries: HashMap<MessageKey, Option<Resolved>> = HashMap::new();
        for (context, message) in catalog.messages() {
            if !message.status.is_active() {
                continue;
            }
            let key = (
                context.to_string(),
                message.source.clone(),
                message.disambiguation().to_string(),
            );
            if let Entry::Vacant(entry) = entries.entry(key) {
                entry.insert(resolved(message));
            }
        }

        Self {
            entries,
            plural_rule: catalog
                .language
                .as_deref()
                .map(PluralRule::for_language)
                .unwrap_or_default(),
        }
    }

    /// Translator with no translations; every lookup returns the source text.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of finished translations available.
    pub fn len(&self) -> usize {
        self.entries.values().filter(|entry| entry.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Translate `source` in `context`, substituting `%N` with `args[N-1]`.
    pub fn resolve<S: AsRef<str>>(&self, context: &str, source: &str, args: &[S]) -> String {
        self.resolve_disambiguated(context, source, "", args)
    }

    /// Like `resolve`, for messages carrying a disambiguation comment.
    pub fn resolve_disambiguated<S: AsRef<str>>(
        &self,
        context: &str,
        source: &str,
        comment: &str,
        args: &[S],
    ) -> String {
        let text = match self.lookup(context, source, comment) {
            Some(Resolved::Single(text)) => text.as_str(),
            Some(Resolved::Numerus(forms)) => forms
                .first()
                .filter(|form| !form.is_empty())
                .map_or(source, String::as_str),
            None => source,
        };
        substitute(text, args)
    }

    /// Translate a plural message for `count`.
    ///
    /// The form is picked by the catalog language's plural rule; `%n` is
    /// replaced by `count` and `%N` by `args[N-1]`. A form index beyond the
    /// forms the translator provided falls back to the source text.
    pub fn resolve_plural<S: AsRef<str>>(
        &self,
        context: &str,
        source: &str,
        comment: &str,
        count: i64,
        args: &[S],
    ) -> String {
        let text = match self.lookup(context, source, comment) {
            Some(Resolved::Numerus(forms)) => forms
                .get(self.plural_rule.form_index(count))
                .filter(|form| !form.is_empty())
                .map_or(source, String::as_str),
            Some(Resolved::Single(text)) => text.as_str(),
            None => source,
        };
        substitute(&substitute_count(text, count), args)
    }

    fn lookup(&self, context: &str, source: &str, comment: &str) -> Option<&Resolved> {
        let key = (context.to_string(), source.to_string(), comment.to_string());
        self.entries.get(&key).and_then(Option::as_ref)
    }
}

impl From<&Catalog> for Translator {
    fn from(catalog: &Catalog) -> Self {
        Translator::new(catalog)
    }
}

fn resolved(message: &Message) -> Option<Resolved> {
    if !message.is_finished() {
        return None;
    }
    Some(match &message.translation {
        Translation::Single(text) => Resolved::Single(text.clone()),
        Translation::Numerus(forms) => Resolved::Numerus(forms.clone()),
    })
}
