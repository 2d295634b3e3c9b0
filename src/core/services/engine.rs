//! Evaluation engine - runs rules against a directory
//!
//! Rules run one after another in the order given. A failing rule is just an
//! outcome; only a rule error stops the run, and then nothing collected so far
//! is returned.

use std::path::Path;

use crate::core::models::{ResultSet, RuleCatalog};
use crate::core::ports::Rule;
use crate::error::Result;

/// Evaluate `rules` in order against `dir`
///
/// # Returns
///
/// A `ResultSet` with exactly one outcome per rule, in rule order, or the
/// first error a rule returned.
pub fn evaluate<R: Rule>(rules: &[R], catalog: &RuleCatalog, dir: &Path) -> Result<ResultSet> {
    let mut results = ResultSet::new();

    for rule in rules {
        log::debug!("evaluating rule {} against {}", rule.name(), dir.display());
        let outcome = rule.evaluate(dir, catalog)?;
        log::debug!(
            "rule {}: {}",
            outcome.name,
            if outcome.success { "passed" } else { "failed" }
        );
        results.push(outcome);
    }

    Ok(results)
}
