//! TOML-based rule catalog
//!
//! - [`parser`] - Read and deserialize catalog files

pub mod parser;

pub use parser::{BUNDLED_CATALOG, CatalogFile, bundled_catalog, load_catalog, parse_catalog};
