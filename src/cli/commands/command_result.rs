use crate::{
    core::{CatalogScanWarning, CatalogStats},
    issues::Issue,
};

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Stats(StatsSummary),
    Normalize(NormalizeSummary),
}

#[derive(Debug)]
pub struct StatsRow {
    pub file_path: String,
    pub language: Option<String>,
    pub stats: CatalogStats,
}

#[derive(Debug)]
pub struct StatsSummary {
    pub rows: Vec<StatsRow>,
    /// Catalogs that could not be parsed and are missing from `rows`.
    pub warnings: Vec<CatalogScanWarning>,
}

#[derive(Debug)]
pub struct NormalizedFile {
    pub file_path: String,
    /// Vanished and obsolete messages removed from this file.
    pub dropped: usize,
}

#[derive(Debug)]
pub struct NormalizeSummary {
    /// Files whose canonical form differs from their current content.
    pub changed: Vec<NormalizedFile>,
    pub unchanged_count: usize,
    pub is_apply: bool,
}

/// Result of running tscat commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for dry-run commands that report work to do).
    pub exit_on_errors: bool,
    /// Issues found by the command, sorted by location.
    pub issues: Vec<Issue>,
    /// Number of catalogs that failed to parse.
    pub parse_error_count: usize,
    /// Number of catalogs that were loaded.
    pub catalogs_checked: usize,
}
