//! Built-in rules and the rule registry
//!
//! All built-in rules, in the order they run:
//! - `missing-root-readme`: a `README.md` file at the root (warning)
//! - `missing-root-templates-dir`: a `templates/` directory at the root (error)
//! - `wrong-yaml-file-extension`: no `*.yaml` files anywhere in the tree (error)
//!
//! Adding a rule means adding a variant, appending it to [`BuiltinRule::ALL`]
//! and adding its entry to the bundled catalog.

mod readme;
mod templates_dir;
mod yaml_extension;

use std::path::Path;

use crate::core::models::{RuleCatalog, RuleOutcome};
use crate::core::ports::Rule;
use crate::error::Result;

/// The fixed set of rules shipped with the linter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinRule {
    /// Root `README.md` must exist
    MissingRootReadme,
    /// Root `templates/` directory must exist
    MissingRootTemplatesDir,
    /// YAML files must use `.yml`
    WrongYamlFileExtension,
}

impl BuiltinRule {
    /// Every built-in rule, in registration order
    pub const ALL: [Self; 3] = [
        Self::MissingRootReadme,
        Self::MissingRootTemplatesDir,
        Self::WrongYamlFileExtension,
    ];
}

impl Rule for BuiltinRule {
    fn name(&self) -> &'static str {
        match self {
            Self::MissingRootReadme => readme::NAME,
            Self::MissingRootTemplatesDir => templates_dir::NAME,
            Self::WrongYamlFileExtension => yaml_extension::NAME,
        }
    }

    fn evaluate(&self, dir: &Path, catalog: &RuleCatalog) -> Result<RuleOutcome> {
        match self {
            Self::MissingRootReadme => readme::check(dir, catalog),
            Self::MissingRootTemplatesDir => templates_dir::check(dir, catalog),
            Self::WrongYamlFileExtension => yaml_extension::check(dir, catalog),
        }
    }
}

/// The registry: built-in rules in the order they run
#[must_use]
pub const fn registry() -> &'static [BuiltinRule] {
    &BuiltinRule::ALL
}
