use anyhow::Result;

use super::super::args::StatsCommand;
use super::{
    context::CheckContext,
    helper::finish,
    {CommandResult, CommandSummary, StatsRow, StatsSummary},
};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let rows = ctx
        .catalogs()
        .iter()
        .map(|loaded| StatsRow {
            file_path: loaded.file_path.clone(),
            language: loaded.catalog.language.clone(),
            stats: loaded.catalog.stats(),
        })
        .collect();

    let catalogs_checked = ctx.catalogs().len();
    let summary = StatsSummary {
        rows,
        warnings: ctx.scan.warnings,
    };

    Ok(finish(
        CommandSummary::Stats(summary),
        Vec::new(),
        catalogs_checked,
        false,
    ))
}
