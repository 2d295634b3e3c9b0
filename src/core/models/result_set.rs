//! Result set model
//!
//! The ordered outcomes of one lint run. Order is registration order and is
//! part of the rendered output.

use serde::{Deserialize, Serialize};

use super::RuleOutcome;
use crate::error::Result;
use crate::output::{self, OutputFormat};

/// Ordered collection of rule outcomes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    outcomes: Vec<RuleOutcome>,
}

impl ResultSet {
    /// Create an empty result set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            outcomes: Vec::new(),
        }
    }

    /// Append an outcome
    pub fn push(&mut self, outcome: RuleOutcome) {
        self.outcomes.push(outcome);
    }

    /// All outcomes, in order
    #[must_use]
    pub fn outcomes(&self) -> &[RuleOutcome] {
        &self.outcomes
    }

    /// Iterate over the outcomes in order
    pub fn iter(&self) -> std::slice::Iter<'_, RuleOutcome> {
        self.outcomes.iter()
    }

    /// Number of outcomes
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether there are no outcomes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Whether any outcome failed, whatever its severity
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| !o.success)
    }

    /// Whether any failed outcome has error severity
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.outcomes.iter().any(RuleOutcome::is_blocking)
    }

    /// A new result set holding only the failed outcomes, order preserved
    #[must_use]
    pub fn only_failures(&self) -> Self {
        self.outcomes.iter().filter(|o| !o.success).cloned().collect()
    }

    /// Render with the reporter for `format`
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        output::render(self, format)
    }
}

impl FromIterator<RuleOutcome> for ResultSet {
    fn from_iter<I: IntoIterator<Item = RuleOutcome>>(iter: I) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<RuleOutcome>> for ResultSet {
    fn from(outcomes: Vec<RuleOutcome>) -> Self {
        Self { outcomes }
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a RuleOutcome;
    type IntoIter = std::slice::Iter<'a, RuleOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}
