//! Business logic services
//!
//! Orchestration over domain models. Neither service touches the filesystem
//! itself; all I/O happens inside the rules they are given.
//!
//! - [`engine`] - Run rules in order and collect a result set
//! - [`verdict`] - Decide the exit code for a result set

pub mod engine;
pub mod verdict;

pub use engine::evaluate;
pub use verdict::exit_code;
