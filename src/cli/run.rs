//! Command dispatch.
//!
//! Scanning commands return a `CommandResult` that is reported here; the
//! others print their own output and return an exit status directly.

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, check::check, export::export, init::init, normalize::normalize,
        resolve::resolve, stats::stats,
    },
    exit_status::ExitStatus,
    report,
};

pub fn run(Arguments { command }: Arguments, verbose: bool) -> Result<ExitStatus> {
    match command {
        Some(Command::Check(cmd)) => Ok(finish_reported(check(cmd)?, verbose)),
        Some(Command::Stats(cmd)) => Ok(finish_reported(stats(cmd)?, verbose)),
        Some(Command::Normalize(cmd)) => Ok(finish_reported(normalize(cmd)?, verbose)),
        Some(Command::Resolve(cmd)) => resolve(cmd),
        Some(Command::Export(cmd)) => export(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn finish_reported(result: CommandResult, verbose: bool) -> ExitStatus {
    report::print(&result, verbose);
    ExitStatus::from(&result)
}
