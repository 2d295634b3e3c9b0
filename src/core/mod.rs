//! Core domain logic
//!
//! This module contains the evaluation logic and data model. Filesystem access
//! is confined to [`ports::Rule`] implementations.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`RuleOutcome`, `ResultSet`, `RuleCatalog`, `Severity`)
//! - `services/` - Evaluation and verdict
//! - `ports/` - Trait definitions for rules

pub mod models;
pub mod ports;
pub mod services;
