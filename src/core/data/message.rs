use std::fmt;

use serde::Serialize;

/// Source location hint recorded by the extraction tool.
///
/// Only used by translation tooling; the resolver ignores it. `line` is kept
/// verbatim because extraction tools may emit relative values such as `+3`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    pub filename: Option<String>,
    pub line: Option<String>,
}

impl Location {
    pub fn new(filename: impl Into<String>, line: usize) -> Self {
        Self {
            filename: Some(filename.into()),
            line: Some(line.to_string()),
        }
    }
}

/// Translation-completion status of a message.
///
/// Stored in the `type` attribute of `<translation>`; a missing attribute
/// means the translation is finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStatus {
    #[default]
    Finished,
    Unfinished,
    /// The source string disappeared from the application sources.
    Vanished,
    /// Pre-5.x spelling of `Vanished`.
    Obsolete,
}

impl TranslationStatus {
    /// Value of the `type` attribute, `None` for finished translations.
    pub fn as_attribute(&self) -> Option<&'static str> {
        match self {
            TranslationStatus::Finished => None,
            TranslationStatus::Unfinished => Some("unfinished"),
            TranslationStatus::Vanished => Some("vanished"),
            TranslationStatus::Obsolete => Some("obsolete"),
        }
    }

    pub fn from_attribute(value: Option<&str>) -> Option<Self> {
        match value {
            None | Some("") => Some(TranslationStatus::Finished),
            Some("unfinished") => Some(TranslationStatus::Unfinished),
            Some("vanished") => Some(TranslationStatus::Vanished),
            Some("obsolete") => Some(TranslationStatus::Obsolete),
            Some(_) => None,
        }
    }

    /// Vanished and obsolete messages are kept in the file for translators
    /// but never take part in lookups.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            TranslationStatus::Finished | TranslationStatus::Unfinished
        )
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationStatus::Finished => write!(f, "finished"),
            TranslationStatus::Unfinished => write!(f, "unfinished"),
            TranslationStatus::Vanished => write!(f, "vanished"),
            TranslationStatus::Obsolete => write!(f, "obsolete"),
        }
    }
}

/// Translated text of a message.
///
/// Plural (numerus) messages carry one form per plural category of the
/// target language, in the order defined by its plural rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Translation {
    Single(String),
    Numerus(Vec<String>),
}

impl Default for Translation {
    fn default() -> Self {
        Translation::Single(String::new())
    }
}

impl Translation {
    /// True when no form carries any text.
    pub fn is_empty(&self) -> bool {
        match self {
            Translation::Single(text) => text.is_empty(),
            Translation::Numerus(forms) => forms.iter().all(String::is_empty),
        }
    }

    pub fn forms(&self) -> &[String] {
        match self {
            Translation::Single(text) => std::slice::from_ref(text),
            Translation::Numerus(forms) => forms,
        }
    }

    /// The singular text, or the first plural form.
    pub fn text(&self) -> &str {
        self.forms().first().map(String::as_str).unwrap_or("")
    }
}

/// One translatable string with its translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub id: Option<String>,
    pub source: String,
    /// Disambiguation between identical source strings in one context.
    pub comment: Option<String>,
    pub old_source: Option<String>,
    pub old_comment: Option<String>,
    pub extra_comment: Option<String>,
    pub translator_comment: Option<String>,
    pub translation: Translation,
    pub status: TranslationStatus,
    pub locations: Vec<Location>,
    /// Line of the `<message>` element in the file the message was read from.
    pub line: Option<usize>,
}

impl Message {
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: Translation::Single(translation.into()),
            ..Default::default()
        }
    }

    pub fn unfinished(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            status: TranslationStatus::Unfinished,
            ..Self::new(source, translation)
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn is_numerus(&self) -> bool {
        matches!(self.translation, Translation::Numerus(_))
    }

    /// Finished and non-empty: the only state in which the translation is
    /// shown instead of the source text.
    pub fn is_finished(&self) -> bool {
        self.status == TranslationStatus::Finished && !self.translation.is_empty()
    }

    /// Disambiguation key; an empty comment is the same as no comment.
    pub fn disambiguation(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }
}
