//! Library file reader

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::book::Library;
use crate::errors::{ShelfError, ShelfResult};

/// Parses the file at `path` as a library.
///
/// Returns an empty library if the file does not exist. An empty or
/// malformed file is `CorruptData`.
pub fn read_library(path: &Path) -> ShelfResult<Library> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Library::new()),
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            return Err(ShelfError::corrupt(path, "file is not valid UTF-8"))
        }
        Err(e) => return Err(ShelfError::io(path, e)),
    };

    serde_json::from_str(&content).map_err(|e| ShelfError::corrupt(path, e))
}
