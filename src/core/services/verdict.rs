//! Verdict service - turns a result set into an exit code
//!
//! Only failed outcomes with error severity fail the run. Warnings are
//! reported but never change the exit code on their own.

use crate::core::models::ResultSet;
use crate::{EXIT_FAILURE, EXIT_SUCCESS};

/// Exit code for a completed run
///
/// With `soft_fail` the run always succeeds.
#[must_use]
pub fn exit_code(results: &ResultSet, soft_fail: bool) -> u8 {
    if results.has_errors() && !soft_fail {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}
