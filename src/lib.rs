//! ci-component-lint - structural linter for GitLab CI component repositories
//!
//! This library checks a component directory against a fixed set of rules
//! (root README, root `templates/` directory, no `.yaml` files) and renders
//! the results as JSON, YAML, a table or a JUnit XML report.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Exit code for a passing (or soft-failed) run
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code for a failing run or any setup/internal error
pub const EXIT_FAILURE: u8 = 1;

pub mod adapters;
pub mod core;
pub mod error;
pub mod linter;
pub mod output;
pub mod rules;

pub use error::{LintError, Result};
