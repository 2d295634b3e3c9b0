//! `missing-root-templates-dir`: the component root must have a `templates/` directory

use std::path::Path;

use crate::core::models::{RuleCatalog, RuleOutcome};
use crate::error::Result;

pub const NAME: &str = "missing-root-templates-dir";

const TEMPLATES_DIR: &str = "templates";

pub fn check(dir: &Path, catalog: &RuleCatalog) -> Result<RuleOutcome> {
    catalog.outcome(NAME, dir.join(TEMPLATES_DIR).is_dir())
}
