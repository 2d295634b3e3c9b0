//! ci-component-lint - structural linter for GitLab CI component repositories
//!
//! Checks a component directory for a root README, a root `templates/`
//! directory and stray `.yaml` files, then reports the results in the chosen
//! format. Intended as a pre-commit hook or CI job.

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

mod cli;
mod commands;

use std::process::ExitCode;

use ci_component_lint::EXIT_FAILURE;

/// Main entry point for the ci-component-lint CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(EXIT_FAILURE)
        },
    }
}
