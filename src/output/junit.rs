//! JUnit XML reporter
//!
//! One `<testsuite>` inside `<testsuites>`, one `<testcase>` per outcome.
//! Failed outcomes get a `<failure>` child holding the message. Severity maps
//! onto the suite counters: failed errors count as `errors`, failed warnings
//! as `failures`. `disabled` and `skipped` are always zero.

use std::fmt::Write;

use crate::core::models::{ResultSet, Severity};
use crate::error::Result;

use super::Reporter;

/// Suite name used by [`JunitReporter::default`]
pub const DEFAULT_SUITE_NAME: &str = "Gitlab CI Component Linter";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// JUnit XML report
#[derive(Debug, Clone)]
pub struct JunitReporter {
    suite_name: String,
}

impl JunitReporter {
    /// A reporter with a custom suite name
    #[must_use]
    pub fn new(suite_name: impl Into<String>) -> Self {
        Self {
            suite_name: suite_name.into(),
        }
    }
}

impl Default for JunitReporter {
    fn default() -> Self {
        Self::new(DEFAULT_SUITE_NAME)
    }
}

impl Reporter for JunitReporter {
    fn render(&self, results: &ResultSet) -> Result<String> {
        let (errors, failures) =
            results
                .iter()
                .filter(|o| !o.success)
                .fold((0, 0), |(e, f), o| match o.severity {
                    Severity::Error => (e + 1, f),
                    Severity::Warning => (e, f + 1),
                });

        let mut out = String::new();
        writeln!(out, "{XML_DECLARATION}")?;
        writeln!(out, "<testsuites>")?;
        writeln!(
            out,
            r#"  <testsuite name="{}" id="0" disabled="0" skipped="0" errors="{errors}" failures="{failures}" tests="{}">"#,
            escape_xml(&self.suite_name),
            results.len()
        )?;

        for outcome in results {
            let name = escape_xml(&outcome.name);
            if outcome.success {
                writeln!(out, r#"    <testcase name="{name}"></testcase>"#)?;
            } else {
                writeln!(out, r#"    <testcase name="{name}">"#)?;
                writeln!(out, "      <failure>{}</failure>", escape_xml(&outcome.message))?;
                writeln!(out, "    </testcase>")?;
            }
        }

        writeln!(out, "  </testsuite>")?;
        write!(out, "</testsuites>")?;

        Ok(out)
    }
}

/// Escape text for use in XML content and attribute values
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
