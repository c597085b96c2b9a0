//! Error types for company facts operations.
//!
//! This module defines [`FactsError`] which covers every way a run can fail,
//! from ticker resolution through to writing the output document.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving, fetching, transforming or
/// persisting company facts.
#[derive(Error, Debug)]
pub enum FactsError {
    /// The ticker is not present in the company reference list.
    #[error("Ticker not found: {0}")]
    NotFound(String),

    /// The raw disclosure document is missing expected structure.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// An enumerated tag could not be resolved back into its concept.
    #[error("Missing concept {taxonomy}:{tag}")]
    MissingConcept {
        /// Taxonomy the tag was enumerated under.
        taxonomy: String,
        /// The concept tag.
        tag: String,
    },

    /// The output document could not be written or confirmed on disk.
    #[error("Failed to write output {}: {reason}", path.display())]
    OutputWriteFailure {
        /// Destination path.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// Network-related errors (connection failures, timeouts, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// The remote service answered but returned no usable data.
    #[error("No data available: {0}")]
    NoData(String),

    /// Error parsing data that is not a disclosure document.
    #[error("Parse error: {0}")]
    Parse(String),

    /// An invalid parameter was provided.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Building a tabular export failed.
    #[error("Export error: {0}")]
    Export(String),
}

impl FactsError {
    /// Creates an [`FactsError::OutputWriteFailure`] for `path`.
    pub fn output_write(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::OutputWriteFailure {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias using [`FactsError`].
pub type Result<T> = std::result::Result<T, FactsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_concept_message() {
        let err = FactsError::MissingConcept {
            taxonomy: "us-gaap".to_string(),
            tag: "AssetsCurrent".to_string(),
        };
        assert_eq!(err.to_string(), "Missing concept us-gaap:AssetsCurrent");
    }

    #[test]
    fn test_output_write_message() {
        let err = FactsError::output_write("/tmp/out/aapl.json", "permission denied");
        assert_eq!(
            err.to_string(),
            "Failed to write output /tmp/out/aapl.json: permission denied"
        );
    }
}
