//! Catalog discovery shared by the scanning commands.

use std::{env, path::PathBuf};

use anyhow::{Context, Result, bail};
use tracing::debug;

use super::super::args::CommonArgs;
use crate::{
    config::{CONFIG_FILE_NAME, ConfigLoadResult, load_config},
    core::{LoadedCatalog, ScanCatalogsResult, scan_catalogs},
    issues::ParseErrorIssue,
};

/// Catalogs found under the configured root, loaded once per command.
pub struct CheckContext {
    pub scan: ScanCatalogsResult,
}

impl CheckContext {
    /// Load the config from the working directory and scan for catalogs.
    ///
    /// `--root` overrides `catalogsRoot` from the config file.
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to get current directory")?;
        let ConfigLoadResult { config, from_file } = load_config(&cwd)?;
        if !from_file {
            debug!("no {} found, using defaults", CONFIG_FILE_NAME);
        }

        let root = common
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.catalogs_root));
        if !root.is_dir() {
            bail!("catalogs root is not a directory: {}", root.display());
        }

        debug!(root = %root.display(), includes = ?config.includes, "scanning for catalogs");
        let scan = scan_catalogs(&root, &config.includes, &config.ignores);

        Ok(Self { scan })
    }

    pub fn catalogs(&self) -> &[LoadedCatalog] {
        &self.scan.catalogs
    }

    pub fn parse_error_issues(&self) -> Vec<ParseErrorIssue> {
        self.scan
            .warnings
            .iter()
            .map(|warning| ParseErrorIssue {
                file_path: warning.file_path.clone(),
                line: warning.line,
                error: warning.error.clone(),
            })
            .collect()
    }
}
