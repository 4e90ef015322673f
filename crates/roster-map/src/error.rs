//! Error types for directory lookups and value resolution.

use roster_model::ModelError;
use thiserror::Error;

/// Failure of the directory itself, not a missing entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LookupError {
    #[error("directory unreachable: {reason}")]
    Unreachable { reason: String },

    #[error("directory rejected the lookup: {message}")]
    Rejected { message: String },
}

/// Errors that can occur while resolving a column.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// The column's field type has no directory to resolve against.
    #[error("column {index} ({label}) cannot be resolved against a directory")]
    NotResolvable { index: usize, label: String },

    /// The directory failed; reported once per resolution.
    #[error("resolution unavailable: {source}")]
    Unavailable {
        #[source]
        source: LookupError,
    },

    #[error("malformed sheet: {0}")]
    Structure(#[from] ModelError),
}

impl From<LookupError> for ResolveError {
    fn from(source: LookupError) -> Self {
        Self::Unavailable { source }
    }
}

/// Result type for resolution.
pub type Result<T> = std::result::Result<T, ResolveError>;
