//! TOML parser for rule catalogs
//!
//! A catalog file maps rule names to their message and severity:
//!
//! ```toml
//! [rules.missing-root-readme]
//! message = "No README.md file found in root directory"
//! severity = "warning"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::models::{RuleCatalog, RuleMeta};
use crate::error::{LintError, Result};

/// Catalog compiled into the binary
pub const BUNDLED_CATALOG: &str = include_str!("../../../resources/rules.toml");

/// A rule catalog file structure
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    /// Entries keyed by rule name
    #[serde(default)]
    pub rules: BTreeMap<String, RuleMeta>,
}

impl From<CatalogFile> for RuleCatalog {
    fn from(file: CatalogFile) -> Self {
        file.rules.into_iter().collect()
    }
}

/// Parse catalog TOML
pub fn parse_catalog(content: &str) -> Result<RuleCatalog> {
    let file: CatalogFile = toml::from_str(content)?;
    Ok(file.into())
}

/// Read and parse a catalog file
pub fn load_catalog(path: &Path) -> Result<RuleCatalog> {
    let content = fs::read_to_string(path).map_err(|source| LintError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&content)?;
    if catalog.is_empty() {
        log::warn!("rule catalog {} has no entries", path.display());
    } else {
        log::debug!("loaded {} catalog entries from {}", catalog.len(), path.display());
    }
    Ok(catalog)
}

/// The catalog shipped with the binary
pub fn bundled_catalog() -> Result<RuleCatalog> {
    parse_catalog(BUNDLED_CATALOG)
}
