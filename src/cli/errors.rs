//! CLI-specific error types
//!
//! Anything that reaches `main` is fatal: it is printed and the process
//! exits non-zero.

use std::fmt;
use std::io;

use crate::errors::{ShelfError, ShelfErrorCode};

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Title or author left blank
    ValidationFailed,
    /// Library file could not be parsed
    CorruptData,
    /// Terminal or library file I/O failed
    IoError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "SHELF_CLI_VALIDATION_FAILED",
            Self::CorruptData => "SHELF_CLI_CORRUPT_DATA",
            Self::IoError => "SHELF_CLI_IO_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<ShelfError> for CliError {
    fn from(e: ShelfError) -> Self {
        let code = match e.code() {
            ShelfErrorCode::ValidationFailed => CliErrorCode::ValidationFailed,
            ShelfErrorCode::CorruptData => CliErrorCode::CorruptData,
            ShelfErrorCode::IoError => CliErrorCode::IoError,
        };
        Self::new(code, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_from_shelf_error_keeps_category() {
        let err = CliError::from(ShelfError::corrupt(Path::new("library.json"), "eof"));
        assert_eq!(err.code(), &CliErrorCode::CorruptData);
        assert_eq!(err.message(), "corrupt library file library.json: eof");
    }

    #[test]
    fn test_display_includes_code() {
        let err = CliError::from(ShelfError::blank_field("title"));
        assert_eq!(
            err.to_string(),
            "SHELF_CLI_VALIDATION_FAILED: title cannot be empty"
        );
    }
}
