//! Filesystem collaborators: reading the source table and writing outputs

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{AnalysisError, Result};

/// Read the whole source table as UTF-8.
///
/// # Errors
/// Any failure (absent file, permissions, invalid UTF-8) is reported as
/// [`AnalysisError::MissingInput`].
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    fs::read_to_string(path).map_err(|e| AnalysisError::MissingInput {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn prepare_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir),
        _ => Ok(()),
    }
}

/// Write a rendered report to `path`, replacing any previous one
pub fn write_file<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> io::Result<()> {
    let mut file = create_file(path)?;
    file.write_all(contents.as_ref())?;
    file.flush()
}

/// Open `path` as an export sink, creating its directory first
pub fn create_file<P: AsRef<Path>>(path: P) -> io::Result<fs::File> {
    let path = path.as_ref();
    prepare_parent(path)?;
    fs::File::create(path)
}
