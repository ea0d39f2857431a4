//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run catalog checks (unfinished, placeholder, duplicate, vanished)
//! - `stats`: Per-catalog translation progress
//! - `resolve`: Look up one message the way the application would
//! - `normalize`: Re-serialize catalogs in canonical form
//! - `export`: Dump a catalog as JSON
//! - `init`: Initialize tscat configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's arguments.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Stats(cmd)) => cmd.common.verbose,
            Some(Command::Resolve(cmd)) => cmd.verbose,
            Some(Command::Normalize(cmd)) => cmd.verbose,
            Some(Command::Export(cmd)) => cmd.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Arguments shared by the commands that scan for catalogs.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Catalogs root directory (overrides config file)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Catalog file to resolve against
    pub catalog: PathBuf,

    /// Context (class) name
    #[arg(long)]
    pub context: String,

    /// Disambiguation comment
    #[arg(long, default_value = "")]
    pub comment: String,

    /// Plural count; selects a numerus form and replaces `%n`
    #[arg(long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Source text
    pub source: String,

    /// Values for `%1`, `%2`, ...
    pub args: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct NormalizeCommand {
    /// Catalog files to rewrite
    #[arg(required = true)]
    pub catalogs: Vec<PathBuf>,

    /// Remove vanished and obsolete messages
    #[arg(long)]
    pub drop_vanished: bool,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Catalog file to export
    pub catalog: PathBuf,

    /// Only include finished translations
    #[arg(long)]
    pub finished_only: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for unfinished, mismatched, duplicate and vanished messages
    Check(CheckCommand),
    /// Show translation progress per catalog
    Stats(StatsCommand),
    /// Resolve one message to its display text
    Resolve(ResolveCommand),
    /// Rewrite catalogs in canonical form
    Normalize(NormalizeCommand),
    /// Export a catalog as JSON
    Export(ExportCommand),
    /// Initialize a new .tscatrc.json configuration file
    Init,
}
