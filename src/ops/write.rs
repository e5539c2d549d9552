//! Whole-buffer writes to named files.

use std::fs::File;
use std::io::Write as _;
use std::path::Path;

use crate::FileError;
use crate::cleanup::RemoveOnDrop;

/// Write `contents` to the file at `path`, creating it or truncating an
/// existing file, then flush the data to stable storage.
///
/// On success the file at `path` contains exactly `contents` and the bytes
/// have been synced to disk, not just handed to the OS cache. On failure
/// after creation, the partially written file is removed (best-effort)
/// before the error is returned, so callers never observe a half-written
/// destination.
///
/// # Errors
///
/// - [`FileError::Create`] if the file cannot be created (missing parent
///   directory, permission denied, empty path)
/// - [`FileError::Write`] if writing the buffer fails (e.g. disk full)
/// - [`FileError::Sync`] if the durable flush fails
///
/// # Example
///
/// ```rust
/// use durafile::{read_file, write_file};
///
/// let dir = tempfile::tempdir()?;
/// let path = dir.path().join("greeting.txt");
///
/// write_file(&path, "hello")?;
/// assert_eq!(read_file(&path)?, b"hello");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_file(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<(), FileError> {
    let path = path.as_ref();

    // Guard declared before the handle: on error the handle closes first,
    // then the guard unlinks the partial file.
    let mut cleanup = RemoveOnDrop::new("write_file", path);
    let mut file = File::create(path).map_err(|source| FileError::Create {
        operation: "write_file",
        path: path.to_path_buf(),
        source,
    })?;
    cleanup.arm();

    file.write_all(contents.as_ref())
        .map_err(|source| FileError::Write {
            operation: "write_file",
            path: path.to_path_buf(),
            source,
        })?;
    file.sync_all().map_err(|source| FileError::Sync {
        operation: "write_file",
        path: path.to_path_buf(),
        source,
    })?;

    cleanup.disarm();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.bin");

        write_file(&path, b"some bytes").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"some bytes");
    }

    #[test]
    fn write_file_truncates_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        write_file(&path, "a much longer first version").unwrap();
        write_file(&path, "short").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"short");
    }

    #[test]
    fn write_file_empty_contents_creates_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty");

        write_file(&path, b"").unwrap();

        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn write_file_empty_path_is_create_error() {
        let err = write_file("", "abc").unwrap_err();

        assert!(matches!(err, FileError::Create { .. }));
        assert_eq!(err.operation(), "write_file");
    }

    #[test]
    fn write_file_missing_parent_is_create_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no/such/parent/out.txt");

        let err = write_file(&path, "abc").unwrap_err();

        assert!(matches!(err, FileError::Create { .. }));
        assert!(!path.exists());
    }
}
