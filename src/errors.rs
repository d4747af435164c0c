//! Core error types for shelf
//!
//! Error codes:
//! - SHELF_VALIDATION_FAILED (REJECT)
//! - SHELF_CORRUPT_DATA (FATAL)
//! - SHELF_IO_ERROR (FATAL)

use std::fmt;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Result type for core library and store operations
pub type ShelfResult<T> = Result<T, ShelfError>;

/// How the caller is expected to react to an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Input rejected, nothing changed, keep going
    Reject,
    /// The operation in progress cannot complete
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Stable error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelfErrorCode {
    ValidationFailed,
    CorruptData,
    IoError,
}

impl ShelfErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            ShelfErrorCode::ValidationFailed => "SHELF_VALIDATION_FAILED",
            ShelfErrorCode::CorruptData => "SHELF_CORRUPT_DATA",
            ShelfErrorCode::IoError => "SHELF_IO_ERROR",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ShelfErrorCode::ValidationFailed => Severity::Reject,
            ShelfErrorCode::CorruptData | ShelfErrorCode::IoError => Severity::Fatal,
        }
    }
}

impl fmt::Display for ShelfErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised by the collection operations and the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShelfError {
    /// A required field was blank after trimming
    #[error("{field} cannot be empty")]
    Validation { field: &'static str },

    /// The library file exists but is not a list of book records
    #[error("corrupt library file {path}: {reason}")]
    CorruptData { path: String, reason: String },

    /// Reading or writing the library file failed
    #[error("I/O error on {path}: {reason}")]
    Io { path: String, reason: String },
}

impl ShelfError {
    pub fn blank_field(field: &'static str) -> Self {
        ShelfError::Validation { field }
    }

    pub fn corrupt(path: &Path, reason: impl fmt::Display) -> Self {
        ShelfError::CorruptData {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn io(path: &Path, err: io::Error) -> Self {
        Self::io_context(path, err.to_string())
    }

    pub fn io_context(path: &Path, reason: impl Into<String>) -> Self {
        ShelfError::Io {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ShelfErrorCode {
        match self {
            ShelfError::Validation { .. } => ShelfErrorCode::ValidationFailed,
            ShelfError::CorruptData { .. } => ShelfErrorCode::CorruptData,
            ShelfError::Io { .. } => ShelfErrorCode::IoError,
        }
    }

    /// True when the operation in progress must be abandoned.
    pub fn is_fatal(&self) -> bool {
        self.code().severity() == Severity::Fatal
    }
}
