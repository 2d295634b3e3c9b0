//! Adapters that handle I/O for the core
//!
//! - `toml/` - Rule catalog loading (bundled resource and user overrides)

pub mod toml;
