//! Custom error types for LootLock
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::money::MoneyParseError;

/// The main error type for LootLock operations
#[derive(Error, Debug)]
pub enum TrackerError {
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

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Human-entered amount could not be parsed
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Budget limit was unparsable or not positive
    #[error("Invalid budget limit: {0}")]
    InvalidLimit(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    AlreadyExists {
        entity_type: &'static str,
        identifier: String,
    },

    /// No base salary has been recorded
    #[error("No salary recorded yet")]
    NotSet,

    /// An aggregation found nothing to sum
    #[error("No expenses found {scope}")]
    NoExpenses { scope: String },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TrackerError {
    /// Create a "not found" error for budgets
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Create an "already exists" error for budgets
    pub fn budget_exists(identifier: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Create a "no expenses" error for a single budget
    pub fn no_expenses_in(budget: &str) -> Self {
        Self::NoExpenses {
            scope: format!("in budget '{}'", budget),
        }
    }

    /// Create a "no expenses" error across all budgets
    pub fn no_expenses_anywhere() -> Self {
        Self::NoExpenses {
            scope: "across all budgets".to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error describes an informational empty state
    /// rather than a failure (missing salary, nothing to summarize)
    pub fn is_empty_state(&self) -> bool {
        matches!(self, Self::NotSet | Self::NoExpenses { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<MoneyParseError> for TrackerError {
    fn from(err: MoneyParseError) -> Self {
        Self::InvalidAmount(err.input().to_string())
    }
}

/// Result type alias for LootLock operations
pub type TrackerResult<T> = Result<T, TrackerError>;
