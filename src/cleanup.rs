//! Cleanup-on-failure guard for partially written destination files.

use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

/// Removes a destination file on drop unless disarmed.
///
/// Writing operations declare the guard *before* the destination handle and
/// arm it right after creation; reverse drop order then closes the handle
/// before the unlink runs, so removal works on platforms that refuse to
/// delete open files.
///
/// Removal is best-effort. A file that is already gone is fine; any other
/// removal failure is reported at `warn` level and never replaces the
/// error that triggered cleanup.
pub(crate) struct RemoveOnDrop<'a> {
    operation: &'static str,
    path: &'a Path,
    armed: bool,
}

impl<'a> RemoveOnDrop<'a> {
    /// New guard, not yet armed; dropping it does nothing until [`arm`](Self::arm).
    pub(crate) fn new(operation: &'static str, path: &'a Path) -> Self {
        Self {
            operation,
            path,
            armed: false,
        }
    }

    /// Start removing the file on drop. Call once the file exists on disk.
    pub(crate) fn arm(&mut self) {
        self.armed = true;
    }

    /// The operation succeeded; leave the file in place.
    pub(crate) fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for RemoveOnDrop<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(source) = fs::remove_file(self.path) {
            if source.kind() != io::ErrorKind::NotFound {
                warn!(
                    operation = self.operation,
                    path = %self.path.display(),
                    error = %source,
                    "failed to remove partially written file"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn armed_guard_removes_file_on_drop() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("partial.bin");
        std::fs::write(&path, b"half").unwrap();

        {
            let mut guard = RemoveOnDrop::new("test_op", &path);
            guard.arm();
        }

        assert!(!path.exists());
    }

    #[test]
    fn disarmed_guard_keeps_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("done.bin");
        std::fs::write(&path, b"complete").unwrap();

        {
            let mut guard = RemoveOnDrop::new("test_op", &path);
            guard.arm();
            guard.disarm();
        }

        assert!(path.exists());
        assert_eq!(std::fs::read(&path).unwrap(), b"complete");
    }

    #[test]
    fn unarmed_guard_is_inert() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("untouched.bin");
        std::fs::write(&path, b"data").unwrap();

        {
            let _guard = RemoveOnDrop::new("test_op", &path);
        }

        assert!(path.exists());
    }

    #[test]
    fn armed_guard_tolerates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("never-created.bin");

        // Must not panic even though there is nothing to remove.
        let mut guard = RemoveOnDrop::new("test_op", &path);
        guard.arm();
        drop(guard);
    }
}
