//! Whole-file persistence for the library
//!
//! The library is read in full on `load` and rewritten in full on every
//! `save`. There is a single writer and no locking; a load after another
//! process saved simply sees the new contents.

mod reader;
mod writer;

use std::path::{Path, PathBuf};

use crate::book::Library;
use crate::config::{ShelfConfig, DEFAULT_INDENT};
use crate::errors::ShelfResult;
use crate::observability::Logger;

pub use reader::read_library;
pub use writer::{encode_library, write_library};

/// Handle on the library file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    path: PathBuf,
    indent: usize,
}

impl Store {
    /// Store at `path` with the default indentation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            indent: DEFAULT_INDENT,
        }
    }

    pub fn from_config(config: &ShelfConfig) -> Self {
        Self {
            path: config.data_file.clone(),
            indent: config.indent,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole library. A missing file is an empty library.
    ///
    /// # Errors
    ///
    /// `CorruptData` if the file exists but is not a list of books, `Io`
    /// for any other read failure.
    pub fn load(&self) -> ShelfResult<Library> {
        let path = self.path.display().to_string();
        match read_library(&self.path) {
            Ok(library) => {
                let count = library.len().to_string();
                Logger::info("LIBRARY_LOADED", &[("books", count.as_str()), ("path", path.as_str())]);
                Ok(library)
            }
            Err(e) => {
                Logger::warn(
                    "LOAD_FAILED",
                    &[
                        ("code", e.code().code()),
                        ("path", path.as_str()),
                        ("reason", e.to_string().as_str()),
                    ],
                );
                Err(e)
            }
        }
    }

    /// Replaces the file contents with `library`, whether or not anything
    /// changed.
    pub fn save(&self, library: &Library) -> ShelfResult<()> {
        let path = self.path.display().to_string();
        match write_library(&self.path, library, self.indent) {
            Ok(()) => {
                let count = library.len().to_string();
                Logger::info("LIBRARY_SAVED", &[("books", count.as_str()), ("path", path.as_str())]);
                Ok(())
            }
            Err(e) => {
                Logger::warn(
                    "SAVE_FAILED",
                    &[
                        ("code", e.code().code()),
                        ("path", path.as_str()),
                        ("reason", e.to_string().as_str()),
                    ],
                );
                Err(e)
            }
        }
    }
}
