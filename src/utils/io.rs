// src/utils/io.rs
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Platform data directory for the application. Nothing is created here;
/// `write_atomic` creates missing parents when a file is first saved.
pub fn app_data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "passcraft", "passcraft").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Replace `path` with `contents` via a temporary file in the same directory
/// and a rename, so readers see either the old or the new file.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    let mut temp = NamedTempFile::new_in(&dir)?;
    temp.write_all(contents)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
