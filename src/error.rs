//! Custom error types for fiscalscope
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions. The taxonomy is deliberately narrow:
//! the dataset is static and validated once at load, and everything the
//! engine computes afterwards is total over well-formed input.

use thiserror::Error;

/// The main error type for fiscalscope operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Dataset validation errors (malformed node shape, empty groups)
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// A named node failed structural validation
    #[error("Invalid budget node '{name}': {reason}")]
    InvalidNode { name: String, reason: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Unknown policy category name (CLI `--reduce` input)
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Unknown province name (tax calculator input)
    #[error("Unknown province: {0}")]
    UnknownProvince(String),

    /// Malformed CLI argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl BudgetError {
    /// Create an invalid-node error for a named node
    pub fn invalid_node(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidNode {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a dataset validation error
    pub fn is_dataset(&self) -> bool {
        matches!(self, Self::Dataset(_) | Self::InvalidNode { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for BudgetError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for fiscalscope operations
pub type BudgetResult<T> = Result<T, BudgetError>;
