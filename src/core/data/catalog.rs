use super::message::{Message, TranslationStatus};

/// All messages extracted from one UI component or class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub name: String,
    /// Context-level comment, written by old extraction tools.
    pub comment: Option<String>,
    pub messages: Vec<Message>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }
}

/// One locale's translation set, in document order.
///
/// The empty catalog (`Catalog::default()`) is what callers fall back to when
/// a catalog file is missing or malformed: every lookup resolves to the
/// source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub version: Option<String>,
    /// Target language, e.g. `sr_RS`.
    pub language: Option<String>,
    pub source_language: Option<String>,
    pub contexts: Vec<Context>,
}

/// Message counts by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub contexts: usize,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub vanished: usize,
}

impl CatalogStats {
    /// Share of active messages that are finished, 0..=100.
    pub fn completion_percent(&self) -> f64 {
        let active = self.finished + self.unfinished;
        if active == 0 {
            return 100.0;
        }
        self.finished as f64 * 100.0 / active as f64
    }
}

impl Catalog {
    pub fn new(language: Option<String>) -> Self {
        Self {
            version: Some("2.1".to_string()),
            language,
            source_language: None,
            contexts: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.iter().all(|ctx| ctx.messages.is_empty())
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|ctx| ctx.name == name)
    }

    /// Iterate over `(context name, message)` pairs in document order.
    pub fn messages(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.contexts
            .iter()
            .flat_map(|ctx| ctx.messages.iter().map(move |msg| (ctx.name.as_str(), msg)))
    }

    /// Remove vanished and obsolete messages, then contexts left empty.
    ///
    /// Returns the number of removed messages.
    pub fn purge_vanished(&mut self) -> usize {
        let mut removed = 0;
        for ctx in &mut self.contexts {
            let before = ctx.messages.len();
            ctx.messages.retain(|msg| msg.status.is_active());
            removed += before - ctx.messages.len();
        }
        self.contexts.retain(|ctx| !ctx.messages.is_empty());
        removed
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            contexts: self.contexts.len(),
            ..Default::default()
        };
        for (_, msg) in self.messages() {
            stats.messages += 1;
            match msg.status {
                TranslationStatus::Vanished | TranslationStatus::Obsolete => stats.vanished += 1,
                _ if msg.is_finished() => stats.finished += 1,
                _ => stats.unfinished += 1,
            }
        }
        stats
    }
}
