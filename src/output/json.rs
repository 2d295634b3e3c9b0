use crate::core::models::ResultSet;
use crate::error::Result;

use super::Reporter;

/// Pretty-printed JSON array of outcomes, two-space indented
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn render(&self, results: &ResultSet) -> Result<String> {
        Ok(serde_json::to_string_pretty(results)?)
    }
}
