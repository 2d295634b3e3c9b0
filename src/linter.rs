//! Linter - the built-in registry bound to a rule catalog
//!
//! # Examples
//!
//! ```no_run
//! use ci_component_lint::linter::Linter;
//! use ci_component_lint::output::OutputFormat;
//!
//! let linter = Linter::bundled().unwrap();
//! let results = linter.evaluate(".".as_ref()).unwrap();
//! println!("{}", results.render(OutputFormat::Table).unwrap());
//! ```

use std::path::Path;

use crate::adapters::toml::{bundled_catalog, load_catalog};
use crate::core::models::{ResultSet, RuleCatalog};
use crate::core::services::evaluate;
use crate::error::Result;
use crate::rules::registry;

/// Runs the built-in rules with a fixed catalog
#[derive(Debug, Clone)]
pub struct Linter {
    catalog: RuleCatalog,
}

impl Linter {
    /// Create a linter using `catalog` for rule wording and severity
    #[must_use]
    pub const fn new(catalog: RuleCatalog) -> Self {
        Self { catalog }
    }

    /// Create a linter with the bundled catalog
    pub fn bundled() -> Result<Self> {
        Ok(Self::new(bundled_catalog()?))
    }

    /// Create a linter with the bundled catalog, overlaid by the file at `path` if given
    pub fn with_overrides(path: Option<&Path>) -> Result<Self> {
        let mut catalog = bundled_catalog()?;
        if let Some(path) = path {
            catalog.overlay(load_catalog(path)?);
        }
        Ok(Self::new(catalog))
    }

    /// The catalog in use
    #[must_use]
    pub const fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Run every built-in rule against `dir`, in registry order
    pub fn evaluate(&self, dir: &Path) -> Result<ResultSet> {
        evaluate(registry(), &self.catalog, dir)
    }
}
