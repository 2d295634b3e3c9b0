//! Rule severity levels
//!
//! Defines how a failing rule affects the overall verdict.

use serde::{Deserialize, Serialize};

/// Rule severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Hard failure - fails the run unless soft-fail is set
    #[default]
    Error,
    /// Reported, never fails the run on its own
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}
