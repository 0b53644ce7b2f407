//! Test environment abstraction for isolated testing.
//!
//! Provides:
//! - `TestEnvironment`: a throwaway working directory for running the probe
//! - `outputs_match`: stdout comparison that ignores trailing whitespace
//!
//! # Usage
//!
//! ```ignore
//! use fsprobe_config::testing::TestEnvironment;
//!
//! let env = TestEnvironment::new()?;
//! // run the probe with env.work_dir as its working directory
//! assert_eq!(env.read_probe_file()?, b"This is a test");
//! ```

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use tempfile::TempDir;

/// Atomic counter for unique test IDs
static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Isolated working directory, removed on drop
pub struct TestEnvironment {
    /// Temporary directory (dropped on cleanup)
    _temp_dir: TempDir,
    /// Directory the probe runs in
    pub work_dir: PathBuf,
    /// Unique test ID
    pub test_id: u32,
}

impl TestEnvironment {
    /// Create a new isolated test environment
    pub fn new() -> anyhow::Result<Self> {
        let test_id = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
        let temp_dir = TempDir::new()?;

        let work_dir = temp_dir.path().join(format!("work-{}", test_id));
        std::fs::create_dir_all(&work_dir)?;

        Ok(Self {
            _temp_dir: temp_dir,
            work_dir,
            test_id,
        })
    }

    /// Path of the probe file inside the working directory
    pub fn probe_path(&self) -> PathBuf {
        crate::path::resolve_in(&self.work_dir, &crate::ProbeConfig::default().file_name)
    }

    /// Read the probe file back
    pub fn read_probe_file(&self) -> anyhow::Result<Vec<u8>> {
        Ok(std::fs::read(self.probe_path())?)
    }

    /// Create a file in the working directory with content
    pub fn create_file(&self, relative_path: &str, content: &[u8]) -> anyhow::Result<PathBuf> {
        let path = self.work_dir.join(relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Make the working directory read-only (r-x).
    ///
    /// Has no effect on what root can do.
    pub fn make_read_only(&self) -> anyhow::Result<()> {
        self.set_mode(0o555)
    }

    /// Restore owner write access to the working directory
    pub fn make_writable(&self) -> anyhow::Result<()> {
        self.set_mode(0o755)
    }

    fn set_mode(&self, mode: u32) -> anyhow::Result<()> {
        std::fs::set_permissions(&self.work_dir, std::fs::Permissions::from_mode(mode))?;
        Ok(())
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new().expect("Failed to create test environment")
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        // TempDir cleanup cannot remove entries from a read-only directory
        let _ = self.make_writable();
    }
}

/// Compare program output with expected output line by line.
///
/// Trailing whitespace on each line is ignored, and so are extra lines on
/// either side as long as they are blank.
pub fn outputs_match(actual: &str, expected: &str) -> bool {
    let mut actual = actual.lines();
    let mut expected = expected.lines();

    loop {
        match (actual.next(), expected.next()) {
            (None, None) => return true,
            (Some(line), None) | (None, Some(line)) => {
                if !line.trim_end().is_empty() {
                    return false;
                }
            }
            (Some(a), Some(e)) => {
                if a.trim_end() != e.trim_end() {
                    return false;
                }
            }
        }
    }
}
