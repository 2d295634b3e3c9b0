//! Lint a component directory and report the results

use std::path::{Path, PathBuf};

use anyhow::Context;

use ci_component_lint::EXIT_SUCCESS;
use ci_component_lint::core::services::exit_code;
use ci_component_lint::linter::Linter;
use ci_component_lint::output::OutputFormat;

use crate::cli::Cli;

/// Evaluate every rule against the work directory and print the report
///
/// Returns the exit code: failure only when an error-severity rule failed and
/// soft-fail is off.
pub fn lint(cli: &Cli) -> anyhow::Result<u8> {
    let workdir = resolve_workdir(&cli.workdir)?;
    let linter = Linter::with_overrides(cli.catalog.as_deref())?;

    let mut results = linter.evaluate(&workdir)?;
    if cli.only_failures {
        results = results.only_failures();
    }

    let format: OutputFormat = cli.output.parse()?;

    // Nothing left to report: everything passed
    if results.is_empty() {
        return Ok(EXIT_SUCCESS);
    }

    let rendered = results.render(format)?;
    if rendered.ends_with('\n') {
        print!("{rendered}");
    } else if !rendered.is_empty() {
        println!("{rendered}");
    }

    Ok(exit_code(&results, cli.soft_fail))
}

/// Absolute path of the work directory, which must exist
fn resolve_workdir(arg: &Path) -> anyhow::Result<PathBuf> {
    let workdir = if arg.is_absolute() {
        arg.to_path_buf()
    } else if arg == Path::new(".") {
        std::env::current_dir().context("failed to get current directory")?
    } else {
        std::env::current_dir().context("failed to get current directory")?.join(arg)
    };

    if !workdir.is_dir() {
        anyhow::bail!("Workdir does not exist: {}", workdir.display());
    }

    log::debug!("linting {}", workdir.display());
    Ok(workdir)
}
