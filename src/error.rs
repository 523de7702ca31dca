//! Custom error types for finance-tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for finance-tracker operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// The ledger source file does not exist
    #[error("Source file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// A row of the ledger source could not be interpreted
    #[error("Data format error in row {row}: {message}")]
    DataFormat { row: usize, message: String },

    /// No numeric amount could be found in an expense description
    #[error("Could not parse amount")]
    AmountNotFound,

    /// An amount, or a month total it would join, is beyond what the ledger
    /// can represent
    #[error("Amount too large: {0}")]
    AmountTooLarge(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FinanceError {
    /// Create a data format error for a schema problem (header row)
    pub fn missing_column(column: &str) -> Self {
        Self::DataFormat {
            row: 0,
            message: format!("missing required column '{}'", column),
        }
    }

    /// Check if this is a missing source error
    pub fn is_source_not_found(&self) -> bool {
        matches!(self, Self::SourceNotFound { .. })
    }

    /// Check if this is a data format error
    pub fn is_data_format(&self) -> bool {
        matches!(self, Self::DataFormat { .. })
    }

    /// Check if this is an out-of-range amount error
    pub fn is_amount_too_large(&self) -> bool {
        matches!(self, Self::AmountTooLarge(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for FinanceError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for finance-tracker operations
pub type FinanceResult<T> = Result<T, FinanceError>;
