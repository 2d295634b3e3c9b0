//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the core evaluation logic and the
//! code that touches the filesystem. Built-in implementations live in the
//! `rules` module.

mod rule;

pub use rule::Rule;
