//! `missing-root-readme`: the component root must have a `README.md` file

use std::path::Path;

use crate::core::models::{RuleCatalog, RuleOutcome};
use crate::error::Result;

pub const NAME: &str = "missing-root-readme";

const README_FILE: &str = "README.md";

pub fn check(dir: &Path, catalog: &RuleCatalog) -> Result<RuleOutcome> {
    catalog.outcome(NAME, dir.join(README_FILE).is_file())
}
