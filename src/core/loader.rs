//! Catalog loading.
//!
//! `load_catalog` reports every failure to the caller; `load_catalog_or_default`
//! is the application-start entry point and fails open to the empty catalog,
//! so the UI shows source-language strings instead of not starting.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use glob::{MatchOptions, Pattern};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::{
    data::Catalog,
    parsers::ts::{ParseError, parse_ts_str},
};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("catalog not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Load and parse one catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound(path.to_path_buf())
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let catalog = parse_ts_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        contexts = catalog.contexts.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

/// Load a catalog, falling back to the empty catalog on any failure.
pub fn load_catalog_or_default(path: &Path) -> Catalog {
    match load_catalog(path) {
        Ok(catalog) => catalog,
        Err(LoadError::NotFound(path)) => {
            warn!(path = %path.display(), "catalog not found, using source strings");
            Catalog::default()
        }
        Err(err) => {
            warn!(error = %err, "catalog rejected, using source strings");
            Catalog::default()
        }
    }
}

/// A catalog file found while scanning that could not be loaded.
#[derive(Debug, Clone)]
pub struct CatalogScanWarning {
    pub file_path: String,
    pub error: String,
    /// Line the parser stopped at, when known.
    pub line: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub file_path: String,
    pub catalog: Catalog,
}

#[derive(Debug, Default)]
pub struct ScanCatalogsResult {
    /// Loaded catalogs, sorted by path.
    pub catalogs: Vec<LoadedCatalog>,
    pub warnings: Vec<CatalogScanWarning>,
}

/// Find catalog files under `root` and load them in parallel.
///
/// `includes` and `ignores` are glob patterns matched against paths relative
/// to `root`. Matching files that do not look like XML at all (for example
/// TypeScript sources sharing the `.ts` extension) are skipped silently.
pub fn scan_catalogs(root: &Path, includes: &[String], ignores: &[String]) -> ScanCatalogsResult {
    let includes = compile_patterns(includes);
    let ignores = compile_patterns(ignores);
    let options = MatchOptions {
        require_literal_separator: false,
        ..MatchOptions::new()
    };

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!(error = %err, "cannot access path");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            includes
                .iter()
                .any(|p| p.matches_path_with(relative, options))
                && !ignores
                    .iter()
                    .any(|p| p.matches_path_with(relative, options))
        })
        .map(|entry| entry.into_path())
        .collect();
    files.sort();

    let results: Vec<_> = files
        .par_iter()
        .filter_map(|path| {
            let file_path = path
                .strip_prefix(".")
                .unwrap_or(path)
                .to_string_lossy()
                .to_string();
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(err) => {
                    return Some(Err(CatalogScanWarning {
                        file_path,
                        error: err.to_string(),
                        line: None,
                    }));
                }
            };
            if !content.trim_start().starts_with('<') {
                debug!(path = %file_path, "not an XML document, skipped");
                return None;
            }
            Some(match parse_ts_str(&content) {
                Ok(catalog) => Ok(LoadedCatalog { file_path, catalog }),
                Err(err) => Err(CatalogScanWarning {
                    file_path,
                    line: Some(err.line()),
                    error: err.to_string(),
                }),
            })
        })
        .collect();

    let mut scan = ScanCatalogsResult::default();
    for result in results {
        match result {
            Ok(loaded) => scan.catalogs.push(loaded),
            Err(warning) => scan.warnings.push(warning),
        }
    }
    debug!(
        catalogs = scan.catalogs.len(),
        warnings = scan.warnings.len(),
        "scanned catalogs"
    );
    scan
}

fn compile_patterns(patterns: &[String]) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                warn!(pattern = %p, error = %err, "invalid glob pattern ignored");
                None
            }
        })
        .collect()
}
