//! Command implementations

mod lint;

pub use lint::lint;
