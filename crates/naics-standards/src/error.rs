//! Error types for loading code tables.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a code table.
///
/// Any of these aborts the load; no partial table is returned.
#[derive(Debug, Error)]
pub enum TableError {
    /// Table file not found.
    #[error("code table not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the table file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV (ragged rows, invalid UTF-8).
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Code or title column could not be located in the header.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Code and title resolved to the same column.
    #[error("code and title both resolve to column '{column}' in {path}")]
    SameColumn { column: String, path: PathBuf },

    /// Spreadsheet-style column range could not be parsed.
    #[error("invalid column range '{range}': {reason}")]
    InvalidColumnRange { range: String, reason: String },
}

impl TableError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

/// Result type for table loading.
pub type Result<T> = std::result::Result<T, TableError>;
