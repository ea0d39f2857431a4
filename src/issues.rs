//! Issue types for catalog checks.
//!
//! Each issue is self-contained with everything the reporter needs to print
//! it: the catalog file and line, the context, the source text and details.

use std::{cmp::Ordering, fmt};

use enum_dispatch::enum_dispatch;

use crate::core::TranslationStatus;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    Unfinished,
    PlaceholderMismatch,
    DuplicateSource,
    PluralForms,
    Vanished,
    ParseError,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::PlaceholderMismatch => write!(f, "placeholder"),
            Rule::DuplicateSource => write!(f, "duplicate"),
            Rule::PluralForms => write!(f, "plural-forms"),
            Rule::Vanished => write!(f, "vanished"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Message context
// ============================================================

/// Where a message lives: catalog file, line of its `<message>` element,
/// context name and source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    pub context: String,
    pub source: String,
}

impl MessageContext {
    pub fn new(
        file_path: impl Into<String>,
        line: usize,
        context: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            context: context.into(),
            source: source.into(),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Translation still marked unfinished; the source text is shown at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub context: MessageContext,
    /// No translation text at all (as opposed to a draft awaiting review).
    pub empty: bool,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Finished translation whose `%N` placeholders differ from the source's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub context: MessageContext,
    /// Placeholders in the source but not in the translation, e.g. `%1`.
    pub missing: Vec<String>,
    /// Placeholders in the translation but not in the source.
    pub unexpected: Vec<String>,
    /// Plural form the mismatch was found in.
    pub form: Option<usize>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

/// Same source (and disambiguation) translated differently within a context.
///
/// Only the first occurrence is used at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateSourceIssue {
    pub context: MessageContext,
    pub comment: Option<String>,
    /// Line of the occurrence that wins.
    pub first_line: usize,
}

impl DuplicateSourceIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::DuplicateSource
    }
}

/// Numerus translation with a different number of forms than the catalog
/// language has plural categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralFormsIssue {
    pub context: MessageContext,
    pub language: String,
    pub expected: usize,
    pub found: usize,
}

impl PluralFormsIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::PluralForms
    }
}

/// Message no longer present in the application sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VanishedIssue {
    pub context: MessageContext,
    pub status: TranslationStatus,
}

impl VanishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Vanished
    }
}

/// Catalog file could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub line: Option<u64>,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A catalog issue found by a check.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Unfinished(UnfinishedIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    DuplicateSource(DuplicateSourceIssue),
    PluralForms(PluralFormsIssue),
    Vanished(VanishedIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

/// Order by file, then line, then rule.
pub fn compare_issues(a: &Issue, b: &Issue) -> Ordering {
    let (a_path, a_line) = a.location().file_and_line();
    let (b_path, b_line) = b.location().file_and_line();
    a_path
        .cmp(b_path)
        .then_with(|| a_line.cmp(&b_line))
        .then_with(|| a.rule().cmp(&b.rule()))
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message inside a catalog.
    Message(&'a MessageContext),
    /// File-level only (for ParseError).
    File { path: &'a str, line: Option<u64> },
}

impl<'a> ReportLocation<'a> {
    pub fn file_and_line(&self) -> (&'a str, usize) {
        match *self {
            ReportLocation::Message(ctx) => (ctx.file_path.as_str(), ctx.line),
            ReportLocation::File { path, line } => (path, line.unwrap_or(1) as usize),
        }
    }
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards the calls on
/// `Issue` without dynamic dispatch.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(if self.empty {
            "no translation yet".to_string()
        } else {
            "draft translation awaiting review".to_string()
        })
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing {}", self.missing.join(", ")));
        }
        if !self.unexpected.is_empty() {
            parts.push(format!("unexpected {}", self.unexpected.join(", ")));
        }
        let form = self
            .form
            .map(|form| format!(" in plural form {}", form + 1))
            .unwrap_or_default();
        Some(format!("translation{}: {}", form, parts.join("; ")))
    }

    fn hint(&self) -> Option<&str> {
        Some("arguments without a placeholder are dropped at runtime")
    }
}

impl Report for DuplicateSourceIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let comment = self
            .comment
            .as_ref()
            .map(|c| format!(" (comment \"{}\")", c))
            .unwrap_or_default();
        Some(format!(
            "translated differently at line {}{}",
            self.first_line, comment
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("only the first occurrence is used")
    }
}

impl Report for PluralFormsIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} plural form(s), \"{}\" uses {}",
            self.found, self.language, self.expected
        ))
    }

    fn hint(&self) -> Option<&str> {
        (self.found < self.expected).then_some("counts without a form show the source text")
    }
}

impl Report for VanishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("marked {}", self.status))
    }

    fn hint(&self) -> Option<&str> {
        Some("run `tscat normalize --drop-vanished --apply` to remove")
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
            line: self.line,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
