//! Domain models
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`RuleOutcome`] - What one rule reports about one directory
//! - [`ResultSet`] - The ordered outcomes of one run
//! - [`RuleCatalog`] - Message and severity per rule name
//! - [`Severity`] - How a failing outcome affects the verdict

mod catalog;
mod outcome;
mod result_set;
mod severity;

pub use catalog::{RuleCatalog, RuleMeta};
pub use outcome::{Metadata, RuleOutcome};
pub use result_set::ResultSet;
pub use severity::Severity;
