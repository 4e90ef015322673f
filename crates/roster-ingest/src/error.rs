//! Error types for sheet ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading sheets and configuration files.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    // === File System Errors ===
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file {path} is {size} bytes, larger than the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    #[error("unsupported encoding {encoding} in {path}; save the file as UTF-8")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Configuration Errors ===
    #[error("failed to parse configuration {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configuration describes a different number of columns than the sheet has.
    #[error("configuration has {expected} columns but the sheet has {found}")]
    WidthMismatch { expected: usize, found: usize },
}

impl IngestError {
    /// Map an I/O error on `path`, distinguishing a missing file.
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/people.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/people.csv");
    }

    #[test]
    fn test_not_found_is_distinguished() {
        let source = std::io::Error::from(std::io::ErrorKind::NotFound);
        let err = IngestError::io(std::path::Path::new("x.csv"), source);
        assert!(matches!(err, IngestError::FileNotFound { .. }));

        let source = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let err = IngestError::io(std::path::Path::new("x.csv"), source);
        assert!(matches!(err, IngestError::FileRead { .. }));
    }
}
