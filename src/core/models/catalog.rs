//! Rule metadata catalog
//!
//! Rules do not carry their own wording. The catalog maps each rule name to the
//! message and severity its outcomes report, so both can change without touching
//! rule code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Metadata, RuleOutcome, Severity};
use crate::error::{LintError, Result};

/// Message and severity for one rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleMeta {
    /// Message reported in every outcome of the rule
    pub message: String,

    /// Severity reported in every outcome of the rule
    pub severity: Severity,
}

/// Read-only mapping from rule name to [`RuleMeta`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleCatalog {
    entries: BTreeMap<String, RuleMeta>,
}

impl RuleCatalog {
    /// Create an empty catalog
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add or replace the entry for `name`
    pub fn insert(&mut self, name: impl Into<String>, meta: RuleMeta) {
        self.entries.insert(name.into(), meta);
    }

    /// Look up the entry for a rule
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RuleMeta> {
        self.entries.get(name)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply `other` on top of this catalog; its entries win on conflict
    pub fn overlay(&mut self, other: Self) {
        for (name, meta) in other.entries {
            log::debug!("catalog override for {name}: {} ({})", meta.message, meta.severity);
            self.entries.insert(name, meta);
        }
    }

    /// Build an outcome for `name` with the catalog's message and severity
    ///
    /// Fails with [`LintError::MissingMetadata`] when the rule has no entry.
    pub fn outcome(&self, name: &str, success: bool) -> Result<RuleOutcome> {
        let meta = self
            .get(name)
            .ok_or_else(|| LintError::MissingMetadata(name.to_string()))?;

        Ok(RuleOutcome {
            name: name.to_string(),
            success,
            message: meta.message.clone(),
            metadata: Metadata::default(),
            severity: meta.severity,
        })
    }
}

impl<S: Into<String>> FromIterator<(S, RuleMeta)> for RuleCatalog {
    fn from_iter<I: IntoIterator<Item = (S, RuleMeta)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(name, meta)| (name.into(), meta)).collect(),
        }
    }
}
