//! Library file writer
//!
//! Writes go to `<file>.tmp`, are fsynced, then renamed over the target so a
//! reader sees either the old file or the new one.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::book::Library;
use crate::errors::{ShelfError, ShelfResult};

/// Pretty-prints `library` as a JSON array with `indent` spaces per level.
pub fn encode_library(library: &Library, indent: usize) -> serde_json::Result<Vec<u8>> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    library.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Replaces the contents of `path` with `library`.
pub fn write_library(path: &Path, library: &Library, indent: usize) -> ShelfResult<()> {
    let content = encode_library(library, indent).map_err(|e| {
        ShelfError::io_context(path, format!("failed to serialize library: {}", e))
    })?;

    let temp_path = temp_path_for(path);

    stage(&temp_path, |file| file.write_all(&content))
        .map_err(|e| ShelfError::io(&temp_path, e))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(ShelfError::io(path, e));
    }

    // Make the rename durable; not every platform lets a directory be opened.
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Ok(dir) = File::open(parent) {
            let _ = dir.sync_all();
        }
    }

    Ok(())
}

/// Creates `temp_path`, lets `fill` write it, then fsyncs. The temp file is
/// removed again if writing or syncing fails.
fn stage<F>(temp_path: &Path, fill: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)?;

    let result = fill(&mut file).and_then(|()| file.sync_all());
    drop(file);
    if result.is_err() {
        let _ = fs::remove_file(temp_path);
    }
    result
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
