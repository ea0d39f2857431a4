//! Rewrite catalogs in canonical form.
//!
//! Dry-run by default: reports which files would change. A file that fails to
//! parse is reported as an issue and left untouched.

use std::fs;

use anyhow::{Context, Result};
use tracing::debug;

use super::super::args::NormalizeCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary, NormalizeSummary, NormalizedFile},
};
use crate::{
    core::{parse_ts_str, write_ts_string},
    issues::{Issue, ParseErrorIssue},
};

pub fn normalize(cmd: NormalizeCommand) -> Result<CommandResult> {
    let mut issues = Vec::new();
    let mut changed = Vec::new();
    let mut unchanged_count = 0;
    let mut catalogs_checked = 0;

    for path in &cmd.catalogs {
        let file_path = path.to_string_lossy().to_string();
        let original = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog: {}", file_path))?;

        let mut catalog = match parse_ts_str(&original) {
            Ok(catalog) => catalog,
            Err(err) => {
                issues.push(Issue::ParseError(ParseErrorIssue {
                    file_path,
                    line: Some(err.line()),
                    error: err.to_string(),
                }));
                continue;
            }
        };
        catalogs_checked += 1;

        let dropped = if cmd.drop_vanished {
            catalog.purge_vanished()
        } else {
            0
        };
        let rendered = write_ts_string(&catalog)?;

        if rendered == original {
            debug!(path = %file_path, "already canonical");
            unchanged_count += 1;
            continue;
        }

        if cmd.apply {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write file: {}", file_path))?;
        }
        changed.push(NormalizedFile { file_path, dropped });
    }

    let summary = NormalizeSummary {
        changed,
        unchanged_count,
        is_apply: cmd.apply,
    };

    Ok(finish(
        CommandSummary::Normalize(summary),
        issues,
        catalogs_checked,
        true,
    ))
}
