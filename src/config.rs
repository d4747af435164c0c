//! Compiled-in configuration
//!
//! The library file name is fixed: it is never read from the command line or
//! the environment. Tests build a config pointing somewhere else.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// File the library is persisted to, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "library.json";

/// Indentation used when pretty-printing the library file.
pub const DEFAULT_INDENT: usize = 4;

/// Earliest publication year accepted by the input surfaces.
pub const MIN_YEAR: i32 = 1000;

/// Latest publication year accepted by the input surfaces.
pub const MAX_YEAR: i32 = 2100;

/// Runtime settings for the store and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Path of the library file.
    pub data_file: PathBuf,
    /// Spaces per indentation level in the library file.
    pub indent: usize,
    /// Inclusive range of accepted years.
    pub years: RangeInclusive<i32>,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            indent: DEFAULT_INDENT,
            years: MIN_YEAR..=MAX_YEAR,
        }
    }
}

impl ShelfConfig {
    /// Default settings with the library file at `path`.
    pub fn with_data_file(path: impl Into<PathBuf>) -> Self {
        Self {
            data_file: path.into(),
            ..Self::default()
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_file
    }

    pub fn year_in_range(&self, year: i32) -> bool {
        self.years.contains(&year)
    }
}
