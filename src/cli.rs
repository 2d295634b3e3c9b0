//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use crate::commands;

/// ci-component-lint - Lint a GitLab CI component repository
#[derive(Parser, Debug)]
#[command(
    name = "ci-component-lint",
    version,
    about = "Lint a GitLab CI component repository",
    long_about = "Validate a GitLab CI component repository against a set of structural rules.\n\n\
                  WORKDIR is the directory where the component project is located.\n\n\
                  Exit codes:\n  \
                  0 - No error-severity rule failed (or --soft-fail was given)\n  \
                  1 - An error-severity rule failed, or the run could not complete"
)]
pub struct Cli {
    /// Component directory to lint
    #[arg(default_value = ".")]
    pub workdir: PathBuf,

    /// Output format, one of: json, yaml, junit, table, none
    #[arg(short, long, default_value = "table")]
    pub output: String,

    /// Only display checks that failed
    #[arg(long)]
    pub only_failures: bool,

    /// Run checks and exit with 0 even if errors are found
    #[arg(short, long)]
    pub soft_fail: bool,

    /// Rule catalog (TOML) overriding the bundled messages and severities
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the CLI, returning the process exit code
pub fn run() -> anyhow::Result<u8> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    commands::lint(&cli)
}
