//! Error types for sheet validation.

use roster_model::ModelError;
use thiserror::Error;

/// Errors that stop validation before any data is checked.
///
/// Bad user data is never an error here; it is reported as an
/// [`ErrorKind`](roster_model::ErrorKind) in the forecast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidateError {
    /// The sheet itself is malformed (row width differs from column count).
    #[error("malformed sheet: {0}")]
    Structure(#[from] ModelError),
}

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidateError>;
