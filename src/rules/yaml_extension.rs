//! `wrong-yaml-file-extension`: YAML files must use `.yml`, never `.yaml`
//!
//! Walks the whole tree, hidden directories included. Symlinks are matched by
//! their own name and never descended into, so the walk stays inside the
//! target. Entries are visited sorted by file name so the reported file list is
//! stable. Any walk failure (unreadable directory, dangling symlink) aborts the
//! run.
//!
//! Reported paths are UTF-8; bytes that are not valid UTF-8 in a file name are
//! replaced with U+FFFD.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::core::models::{Metadata, RuleCatalog, RuleOutcome};
use crate::error::{LintError, Result};

pub const NAME: &str = "wrong-yaml-file-extension";

const FORBIDDEN_SUFFIX: &str = ".yaml";

pub fn check(dir: &Path, catalog: &RuleCatalog) -> Result<RuleOutcome> {
    let files = find_yaml_files(dir)?;
    let outcome = catalog.outcome(NAME, files.is_empty())?;
    Ok(outcome.with_metadata(Metadata::files(files)))
}

/// Paths of all non-directory entries named `*.yaml` (any case), relative to `root`
fn find_yaml_files(root: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(root).to_path_buf();
            LintError::Walk {
                path,
                source: err.into(),
            }
        })?;

        if entry.path_is_symlink() {
            fs::metadata(entry.path()).map_err(|source| LintError::Walk {
                path: entry.path().to_path_buf(),
                source,
            })?;
        }

        if entry.file_type().is_dir() || !has_yaml_suffix(entry.file_name()) {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or_else(|_| entry.path());
        let relative = to_slash_path(relative);
        log::trace!("found .yaml file: {relative}");
        files.push(relative);
    }

    Ok(files)
}

fn has_yaml_suffix(name: &OsStr) -> bool {
    name.to_string_lossy().to_lowercase().ends_with(FORBIDDEN_SUFFIX)
}

fn to_slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
