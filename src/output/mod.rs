//! Output formatting for lint results
//!
//! Each format has a reporter that turns a [`ResultSet`] into text. Reporters
//! are pure: same result set, same text.

mod json;
mod junit;
mod table;
mod yaml;

pub use json::JsonReporter;
pub use junit::{DEFAULT_SUITE_NAME, JunitReporter};
pub use table::TableReporter;
pub use yaml::YamlReporter;

use crate::core::models::ResultSet;
use crate::error::{LintError, Result};

/// Renders a result set in one output format
pub trait Reporter {
    /// Render `results` as text
    fn render(&self, results: &ResultSet) -> Result<String>;
}

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    Json,
    /// YAML sequence
    Yaml,
    /// Aligned human-readable table
    #[default]
    Table,
    /// JUnit XML report
    Junit,
    /// No output at all
    None,
}

impl OutputFormat {
    /// Every supported format, in help-text order
    pub const ALL: [Self; 5] = [Self::Json, Self::Yaml, Self::Table, Self::Junit, Self::None];

    /// The format's command-line name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Table => "table",
            Self::Junit => "junit",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = LintError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| LintError::UnsupportedFormat(s.to_string()))
    }
}

/// Render `results` with the default reporter for `format`
pub fn render(results: &ResultSet, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => JsonReporter.render(results),
        OutputFormat::Yaml => YamlReporter.render(results),
        OutputFormat::Table => TableReporter::default().render(results),
        OutputFormat::Junit => JunitReporter::default().render(results),
        OutputFormat::None => Ok(String::new()),
    }
}
