//! Error types for priority-bucket
//!
//! The container itself never fails. These errors cover the manifest loading
//! and output path used by the command-line tool.

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum BucketError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read manifest file '{path}': {source}")]
    ConfigFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML manifest '{path}': {source}")]
    ConfigParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid manifest '{path}': {reason}")]
    ConfigValidationFailed { path: String, reason: String },

    #[error("Failed to write output to '{path}': {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render traversal as JSON: {0}")]
    Render(#[from] serde_json::Error),
}

/// Convenience type alias for Results
pub type BucketResult<T> = Result<T, BucketError>;
