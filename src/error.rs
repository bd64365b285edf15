//! Error types for table and codec operations

use std::path::PathBuf;

use thiserror::Error;

/// The error type for all table, row and codec operations.
#[derive(Debug, Error)]
pub enum TableError {
    /// A caller passed an argument that can never be valid: an empty
    /// filename, an empty cell list, a non-integer offset, an empty separator.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// An integer offset fell outside `[0, len - 1]`.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: i128, len: usize },

    /// The file could not be opened, read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TableError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TableError::Io {
            path: path.into(),
            source,
        }
    }

    /// Invalid arguments and out-of-range offsets are bugs in the caller,
    /// I/O failures are not.
    pub fn is_programmer_error(&self) -> bool {
        matches!(
            self,
            TableError::InvalidArgument(_) | TableError::OutOfRange { .. }
        )
    }

    /// Check if this is an I/O error caused by a missing file
    pub fn is_not_found(&self) -> bool {
        match self {
            TableError::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

/// A convenience `Result` alias using [`TableError`].
pub type Result<T> = std::result::Result<T, TableError>;
