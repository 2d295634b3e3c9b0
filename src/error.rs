//! Library error type

use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a lint run
///
/// A rule *failing* is not an error; it is an ordinary outcome with
/// `success = false`. These variants cover everything that prevents a run from
/// completing or being reported.
#[derive(Debug, Error)]
pub enum LintError {
    /// Catalog file could not be read
    #[error("failed to read rule catalog {path}")]
    CatalogRead {
        /// Catalog file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid catalog TOML
    #[error("invalid rule catalog: {0}")]
    CatalogParse(#[from] toml::de::Error),

    /// A registered rule has no catalog entry
    #[error("no catalog entry for rule `{0}`")]
    MissingMetadata(String),

    /// The directory tree could not be walked
    #[error("failed to walk {path}")]
    Walk {
        /// Path at which the walk failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Requested output format does not exist
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Text formatting error
    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Result alias for [`LintError`]
pub type Result<T> = std::result::Result<T, LintError>;
