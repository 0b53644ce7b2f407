//! Path resolution against the working directory.
//!
//! Paths are joined, not canonicalized: the printed path is the working
//! directory as the OS reports it plus the file name, whether or not the file
//! exists yet and without resolving symlinks.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Resolve `name` against the process's current working directory.
///
/// # Example
/// ```ignore
/// let path = resolve_in_working_dir("test.txt")?;
/// assert!(path.is_absolute());
/// ```
pub fn resolve_in_working_dir(name: impl AsRef<Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    Ok(resolve_in(cwd, name))
}

/// Resolve `name` against an explicit directory.
///
/// An absolute `name` replaces `dir`, as with [`Path::join`].
pub fn resolve_in(dir: impl AsRef<Path>, name: impl AsRef<Path>) -> PathBuf {
    dir.as_ref().join(name)
}
