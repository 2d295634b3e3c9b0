//! Rule outcome model
//!
//! An outcome is what one rule reports about one directory: whether the
//! directory satisfies it, why, and how much that matters.

use serde::{Deserialize, Serialize};

use super::Severity;

/// Extra data a rule attaches to its outcome
///
/// Serializes as a mapping: `{}` when empty, `{"files": [...]}` for a file list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Metadata {
    /// Paths (relative to the linted directory) that caused the outcome
    Files {
        /// Offending paths, in discovery order
        files: Vec<String>,
    },
    /// No metadata
    Empty {},
}

impl Metadata {
    /// Metadata carrying a list of files
    #[must_use]
    pub const fn files(files: Vec<String>) -> Self {
        Self::Files { files }
    }

    /// The file list, if this metadata carries one
    #[must_use]
    pub fn file_list(&self) -> Option<&[String]> {
        match self {
            Self::Files { files } => Some(files.as_slice()),
            Self::Empty {} => None,
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::Empty {}
    }
}

/// The result of evaluating one rule against a directory
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// Stable kebab-case rule identifier
    pub name: String,

    /// Whether the directory satisfies the rule
    pub success: bool,

    /// Human-readable explanation, taken from the rule catalog
    pub message: String,

    /// Rule-specific details
    #[serde(default)]
    pub metadata: Metadata,

    /// How a failure of this rule affects the verdict
    pub severity: Severity,
}

impl RuleOutcome {
    /// Whether this outcome is a failure that should fail the run
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        !self.success && self.severity == Severity::Error
    }

    /// Replace the metadata
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}
