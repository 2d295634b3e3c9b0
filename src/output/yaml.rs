use crate::core::models::ResultSet;
use crate::error::Result;

use super::Reporter;

/// Block-style YAML sequence of outcomes
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlReporter;

impl Reporter for YamlReporter {
    fn render(&self, results: &ResultSet) -> Result<String> {
        Ok(serde_yaml::to_string(results)?)
    }
}
