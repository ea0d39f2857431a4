use anyhow::Result;
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    context::CheckContext,
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{
    issues::Issue,
    rules::{
        check_duplicate_issues, check_placeholder_issues, check_plural_forms_issues,
        check_unfinished_issues, check_vanished_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Unfinished,
    Placeholder,
    Duplicate,
    PluralForms,
    Vanished,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Unfinished,
            CheckRule::Placeholder,
            CheckRule::Duplicate,
            CheckRule::PluralForms,
            CheckRule::Vanished,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks
    };

    let catalogs = ctx.catalogs();
    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::Unfinished => {
                let issues = check_unfinished_issues(catalogs);
                all_issues.extend(issues.into_iter().map(Issue::Unfinished));
            }
            CheckRule::Placeholder => {
                let issues = check_placeholder_issues(catalogs);
                all_issues.extend(issues.into_iter().map(Issue::PlaceholderMismatch));
            }
            CheckRule::Duplicate => {
                let issues = check_duplicate_issues(catalogs);
                all_issues.extend(issues.into_iter().map(Issue::DuplicateSource));
            }
            CheckRule::PluralForms => {
                let issues = check_plural_forms_issues(catalogs);
                all_issues.extend(issues.into_iter().map(Issue::PluralForms));
            }
            CheckRule::Vanished => {
                let issues = check_vanished_issues(catalogs);
                all_issues.extend(issues.into_iter().map(Issue::Vanished));
            }
        }
    }

    all_issues.extend(ctx.parse_error_issues().into_iter().map(Issue::ParseError));

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        catalogs.len(),
        true,
    ))
}
