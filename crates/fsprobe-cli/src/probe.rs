//! File steps of the probe: touch, write, and read back a single file.
//!
//! Every step opens the file afresh and closes it before returning, so each
//! one observes what the previous step left on disk.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fsprobe_config::{log_probe_debug, ProbeConfig};

use crate::error::{ContentKind, ProbeError, Result};

/// A file at a fixed location that the probe touches, writes, and verifies.
#[derive(Debug, Clone)]
pub struct ProbeFile {
    path: PathBuf,
}

impl ProbeFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `name` inside the process's working directory.
    pub fn in_working_dir(name: &str) -> anyhow::Result<Self> {
        Ok(Self::new(fsprobe_config::path::resolve_in_working_dir(name)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file if absent. An existing file keeps its content and only
    /// gets its modification time bumped.
    pub fn touch(&self) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ProbeError::io("create", &self.path, e))?;
        file.set_modified(SystemTime::now())
            .map_err(|e| ProbeError::io("touch", &self.path, e))?;
        log_probe_debug!("Touched", path = tracing::field::display(self.path.display()));
        Ok(())
    }

    pub fn ensure_exists(&self) -> Result<()> {
        if self.path.is_file() {
            Ok(())
        } else {
            Err(ProbeError::Missing {
                path: self.path.clone(),
            })
        }
    }

    /// Replace the whole file with `text`.
    pub fn write_text(&self, text: &str) -> Result<()> {
        self.write_bytes(text.as_bytes())
    }

    /// Replace the whole file with `bytes`.
    pub fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        fs::write(&self.path, bytes).map_err(|e| ProbeError::io("write", &self.path, e))?;
        log_probe_debug!(
            "Wrote",
            path = tracing::field::display(self.path.display()),
            len = bytes.len()
        );
        Ok(())
    }

    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(|e| ProbeError::io("read", &self.path, e))
    }

    /// Fails with an I/O error if the content is not UTF-8.
    pub fn read_text(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| ProbeError::io("read", &self.path, e))
    }

    pub fn verify_bytes(&self, expected: &[u8]) -> Result<()> {
        let actual = self.read_bytes()?;
        if actual == expected {
            return Ok(());
        }
        Err(ProbeError::ContentMismatch {
            kind: ContentKind::Bytes,
            path: self.path.clone(),
            expected: String::from_utf8_lossy(expected).into_owned(),
            actual: String::from_utf8_lossy(&actual).into_owned(),
        })
    }

    pub fn verify_text(&self, expected: &str) -> Result<()> {
        let actual = self.read_text()?;
        if actual == expected {
            return Ok(());
        }
        Err(ProbeError::ContentMismatch {
            kind: ContentKind::Text,
            path: self.path.clone(),
            expected: expected.to_string(),
            actual,
        })
    }
}

/// Touch, assert, write text, write bytes, then check both read-backs.
/// Stops at the first failing step.
pub fn run_file_steps(file: &ProbeFile, contents: &ProbeConfig) -> Result<()> {
    file.touch()?;
    file.ensure_exists()?;
    file.write_text(&contents.text)?;
    file.write_bytes(&contents.bytes)?;
    file.verify_bytes(&contents.bytes)?;
    file.verify_text(&contents.text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use tempfile::tempdir;

    fn probe_in(dir: &Path) -> ProbeFile {
        ProbeFile::new(dir.join("test.txt"))
    }

    #[test]
    fn test_touch_creates_empty_file() {
        let temp = tempdir().unwrap();
        let file = probe_in(temp.path());

        assert!(file.ensure_exists().is_err());
        file.touch().unwrap();
        file.ensure_exists().unwrap();
        assert!(fs::read(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_touch_keeps_existing_content() {
        let temp = tempdir().unwrap();
        let file = probe_in(temp.path());
        fs::write(file.path(), b"keep me").unwrap();

        file.touch().unwrap();
        assert_eq!(fs::read(file.path()).unwrap(), b"keep me");
    }

    #[test]
    fn test_byte_write_supersedes_text_write() {
        let temp = tempdir().unwrap();
        let file = probe_in(temp.path());

        file.write_text("a much longer first line").unwrap();
        file.write_bytes(b"short").unwrap();
        assert_eq!(file.read_bytes().unwrap(), b"short");
        assert_eq!(file.read_text().unwrap(), "short");
    }

    #[test]
    fn test_run_file_steps_leaves_byte_content() {
        let temp = tempdir().unwrap();
        let file = probe_in(temp.path());
        fs::write(file.path(), b"unrelated old content").unwrap();

        run_file_steps(&file, &ProbeConfig::default()).unwrap();
        assert_eq!(fs::read(file.path()).unwrap(), b"This is a test");

        // Second run ends in the same state
        run_file_steps(&file, &ProbeConfig::default()).unwrap();
        assert_eq!(fs::read(file.path()).unwrap(), b"This is a test");
    }

    #[test]
    fn test_missing_directory_fails_at_create() {
        let temp = tempdir().unwrap();
        let file = ProbeFile::new(temp.path().join("missing").join("test.txt"));

        let err = run_file_steps(&file, &ProbeConfig::default()).unwrap_err();
        match err {
            ProbeError::Io { op, source, .. } => {
                assert_eq!(op, "create");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!file.path().exists());
    }

    #[test]
    fn test_verify_bytes_reports_mismatch() {
        let temp = tempdir().unwrap();
        let file = probe_in(temp.path());
        file.write_bytes(b"other").unwrap();

        let err = file.verify_bytes(b"This is a test").unwrap_err();
        assert!(matches!(
            err,
            ProbeError::ContentMismatch { kind: ContentKind::Bytes, ref actual, .. } if actual == "other"
        ));
    }

    #[test]
    fn test_verify_text_reports_mismatch() {
        let temp = tempdir().unwrap();
        let file = probe_in(temp.path());
        file.write_text("other").unwrap();

        let err = file.verify_text("This is a test").unwrap_err();
        assert!(matches!(
            err,
            ProbeError::ContentMismatch {
                kind: ContentKind::Text,
                ..
            }
        ));
    }

    #[test]
    fn test_verify_text_rejects_invalid_utf8() {
        let temp = tempdir().unwrap();
        let file = probe_in(temp.path());
        file.write_bytes(&[0xff, 0xfe, 0x00]).unwrap();

        let err = file.verify_text("This is a test").unwrap_err();
        match err {
            ProbeError::Io { op, source, .. } => {
                assert_eq!(op, "read");
                assert_eq!(source.kind(), io::ErrorKind::InvalidData);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ensure_exists_rejects_directory() {
        let temp = tempdir().unwrap();
        let file = ProbeFile::new(temp.path());
        assert!(matches!(
            file.ensure_exists(),
            Err(ProbeError::Missing { .. })
        ));
    }
}
