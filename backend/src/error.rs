//! Error types for the FIFA CSV pipelines.
//!
//! This module defines the error hierarchy used across the crate:
//!
//! - [`DatasourceError`] - failures raised inside a datasource (I/O, CSV, validation)
//! - [`LoadCsvError`] - failure kind carried by a load [`Outcome`](crate::transform::Outcome)
//! - [`SaveCsvError`] - failure kind carried by a save [`Outcome`](crate::transform::Outcome)
//! - [`PresenterError`] - errors returned to callers of the presenter
//! - [`ConfigError`] - malformed configuration values
//!
//! Datasource errors never cross the use-case boundary: a use case folds them
//! into its failure kind with [`FailureKind::caused_by`].

use std::fmt::Display;
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::CsvError;

// =============================================================================
// Failure kinds
// =============================================================================

/// A failure kind that a use case can return in its error outcome.
///
/// Parameters objects carry a default instance of their failure kind; the use
/// case attaches the underlying cause when an operation fails.
pub trait FailureKind: std::error::Error + Clone + Send + 'static {
    /// Returns a copy of this failure extended with `cause`.
    fn caused_by(&self, cause: impl Display) -> Self;
}

/// Failure while loading and ranking a players CSV.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadCsvError {
    pub message: String,
}

impl LoadCsvError {
    pub const DEFAULT_MESSAGE: &'static str = "failed to load CSV file";

    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl Default for LoadCsvError {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MESSAGE)
    }
}

impl FailureKind for LoadCsvError {
    fn caused_by(&self, cause: impl Display) -> Self {
        Self::new(format!("{}: {}", self.message, cause))
    }
}

/// Failure while validating or storing an uploaded CSV payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SaveCsvError {
    pub message: String,
}

impl SaveCsvError {
    pub const DEFAULT_MESSAGE: &'static str = "failed to save CSV file";

    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl Default for SaveCsvError {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MESSAGE)
    }
}

impl FailureKind for SaveCsvError {
    fn caused_by(&self, cause: impl Display) -> Self {
        Self::new(format!("{}: {}", self.message, cause))
    }
}

// =============================================================================
// Datasource Errors
// =============================================================================

/// Errors raised by a datasource. Caught by the use case that invoked it.
#[derive(Debug, Error)]
pub enum DatasourceError {
    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV or a row that cannot be mapped.
    #[error("{0}")]
    Csv(#[from] CsvError),

    /// The payload failed schema validation.
    #[error("invalid CSV: {0}")]
    InvalidCsv(String),

    /// Dataset name cannot be used as a file name in the storage directory.
    #[error("invalid dataset name '{0}'")]
    InvalidName(String),
}

// =============================================================================
// Presenter Errors
// =============================================================================

/// Errors surfaced at the presenter boundary.
#[derive(Debug, Error)]
pub enum PresenterError {
    /// The CSV path does not exist. Checked before any pipeline runs.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error(transparent)]
    Load(#[from] LoadCsvError),

    #[error(transparent)]
    Save(#[from] SaveCsvError),

    /// Listing the storage directory failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The worker thread running the pipeline panicked or was cancelled.
    #[error("worker thread failed: {0}")]
    Worker(String),
}

// =============================================================================
// Config Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' ({message})")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for datasource operations.
pub type DatasourceResult<T> = Result<T, DatasourceError>;

/// Result type for presenter operations.
pub type PresenterResult<T> = Result<T, PresenterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_failure_messages() {
        assert_eq!(LoadCsvError::default().to_string(), "failed to load CSV file");
        assert_eq!(SaveCsvError::default().to_string(), "failed to save CSV file");
    }

    #[test]
    fn test_caused_by_keeps_default_prefix() {
        let cause = DatasourceError::InvalidCsv("missing columns: Age".into());
        let err = SaveCsvError::default().caused_by(&cause);
        assert_eq!(err.message, "failed to save CSV file: invalid CSV: missing columns: Age");
    }

    #[test]
    fn test_presenter_not_found_format() {
        let err = PresenterError::FileNotFound(PathBuf::from("/nonexistent/path.csv"));
        assert_eq!(err.to_string(), "file not found: /nonexistent/path.csv");
    }

    #[test]
    fn test_error_conversion_chain() {
        let csv_err = CsvError::new(3, "bad row").with_column("Age");
        let ds_err: DatasourceError = csv_err.into();
        assert!(ds_err.to_string().contains("Age"));

        let load_err: PresenterError = LoadCsvError::new("boom").into();
        assert_eq!(load_err.to_string(), "boom");
    }
}
