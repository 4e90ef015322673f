//! Error types for the sheet model.

use thiserror::Error;

/// Structural problems with model values.
///
/// These indicate a bug in whoever built the value, not bad user data;
/// data-quality problems are reported as [`crate::ErrorKind`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// A row does not have one cell per column.
    #[error("row {row} has {found} cells but the sheet has {expected} columns")]
    ShapeMismatch {
        /// Zero-based row index.
        row: usize,
        /// Number of columns in the sheet.
        expected: usize,
        /// Number of cells found in the row.
        found: usize,
    },

    /// Country code is not two ASCII letters.
    #[error("invalid country code '{0}': expected an ISO 3166-1 alpha-2 code")]
    InvalidCountryCode(String),

    /// Field slug is not in the registry.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// Column index is out of range.
    #[error("column {index} out of range (sheet has {len} columns)")]
    ColumnOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of columns.
        len: usize,
    },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
