//! Rule port
//!
//! Defines the single capability every lint rule provides.

use std::path::Path;

use crate::core::models::{RuleCatalog, RuleOutcome};
use crate::error::Result;

/// A structural check against a target directory
///
/// Implementations must not modify the filesystem and must not depend on the
/// outcome of any other rule. A rule that is not satisfied returns an outcome
/// with `success = false`; `Err` is reserved for conditions that make
/// evaluation impossible and abort the whole run.
pub trait Rule {
    /// Stable kebab-case identifier, also the catalog key
    fn name(&self) -> &'static str;

    /// Evaluate the rule against `dir`, taking wording from `catalog`
    fn evaluate(&self, dir: &Path, catalog: &RuleCatalog) -> Result<RuleOutcome>;
}
