//! Error types for the leadsift library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for leadsift operations.
#[derive(Debug, Error)]
pub enum LeadError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks one or more required columns.
    #[error("Missing required columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// Export format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// No lead with the given company name.
    #[error("Lead not found: {0}")]
    LeadNotFound(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LeadError {
    /// The missing column names, if this is a missing-columns error.
    pub fn missing_columns(&self) -> Option<&[String]> {
        match self {
            LeadError::MissingColumns { columns } => Some(columns),
            _ => None,
        }
    }
}

/// Result type alias for leadsift operations.
pub type Result<T> = std::result::Result<T, LeadError>;
