//! Capture of caller-supplied streams into uniquely named temp files.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::FileError;

/// Drain `source` into a freshly created, uniquely named file and return
/// the file's path.
///
/// The file is created inside `dir`. A non-empty `dir` is created first
/// (with any missing parents) if it does not exist; an empty `dir` selects
/// the system temporary directory, which is used exactly as the platform
/// provides it. Name allocation is atomic with creation: the file
/// is opened with create-new semantics under a random name, retrying on
/// collision, so concurrent calls into the same directory never receive
/// the same path.
///
/// `pattern` is a naming hint: the random token replaces the last `*` in
/// the pattern, or is appended if the pattern has none. `"log-*.txt"`
/// yields names like `log-pVmQx1.txt`; an empty pattern yields a purely
/// random name.
///
/// On success the returned file contains every byte `source` produced, the
/// data is synced to disk, and the file is the caller's to keep or delete.
/// On failure the temp file (if it was created at all) is removed before
/// the error is returned. `source` is consumed, but a `File` passed by
/// `&mut` stays open and usable.
///
/// # Errors
///
/// - [`FileError::Directory`] if a non-empty `dir` cannot be created
/// - [`FileError::Create`] if no temp file could be created inside `dir`
/// - [`FileError::Copy`] if draining `source` into the file fails on
///   either side
/// - [`FileError::Sync`] if the durable flush fails
/// - [`FileError::Close`] if handing the file over (detaching it from
///   automatic deletion) fails
///
/// # Example
///
/// ```rust
/// use durafile::{read_file, write_temp_file};
///
/// let dir = tempfile::tempdir()?;
/// let captured = write_temp_file(&b"streamed bytes"[..], dir.path(), "cap-*.bin")?;
///
/// assert!(captured.starts_with(dir.path()));
/// assert_eq!(read_file(&captured)?, b"streamed bytes");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_temp_file<R: Read>(
    mut source: R,
    dir: impl AsRef<Path>,
    pattern: &str,
) -> Result<PathBuf, FileError> {
    let dir = dir.as_ref();
    let dir = if dir.as_os_str().is_empty() {
        env::temp_dir()
    } else {
        fs::create_dir_all(dir).map_err(|source| FileError::Directory {
            operation: "write_temp_file",
            path: dir.to_path_buf(),
            source,
        })?;
        dir.to_path_buf()
    };

    let (prefix, suffix) = split_pattern(pattern);
    let mut tmp = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(suffix)
        .tempfile_in(&dir)
        .map_err(|source| FileError::Create {
            operation: "write_temp_file",
            path: dir.clone(),
            source,
        })?;

    // Until keep() below, any early return drops `tmp` and deletes the file.
    io::copy(&mut source, tmp.as_file_mut()).map_err(|source| FileError::Copy {
        operation: "write_temp_file",
        path: tmp.path().to_path_buf(),
        source,
    })?;
    tmp.as_file().sync_all().map_err(|source| FileError::Sync {
        operation: "write_temp_file",
        path: tmp.path().to_path_buf(),
        source,
    })?;

    let (file, path) = tmp.keep().map_err(|err| {
        let path = err.file.path().to_path_buf();
        FileError::Close {
            operation: "write_temp_file",
            path,
            source: err.error,
        }
    })?;
    drop(file);

    Ok(path)
}

/// Split a naming pattern at its last `*`, the spot for the random token.
/// A pattern without `*` is all prefix.
fn split_pattern(pattern: &str) -> (&str, &str) {
    match pattern.rsplit_once('*') {
        Some((prefix, suffix)) => (prefix, suffix),
        None => (pattern, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// A reader whose first read fails, for exercising mid-copy failures.
    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("stream broke"))
        }
    }

    #[test]
    fn split_pattern_without_star_is_prefix() {
        assert_eq!(split_pattern("backup"), ("backup", ""));
    }

    #[test]
    fn split_pattern_at_star() {
        assert_eq!(split_pattern("log-*.txt"), ("log-", ".txt"));
    }

    #[test]
    fn split_pattern_uses_last_star() {
        assert_eq!(split_pattern("a*b*c"), ("a*b", "c"));
    }

    #[test]
    fn split_pattern_empty() {
        assert_eq!(split_pattern(""), ("", ""));
    }

    #[test]
    fn write_temp_file_captures_stream() {
        let dir = TempDir::new().unwrap();

        let path = write_temp_file(&b"captured"[..], dir.path(), "").unwrap();

        assert!(path.starts_with(dir.path()));
        assert_eq!(std::fs::read(&path).unwrap(), b"captured");
    }

    #[test]
    fn write_temp_file_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b/c");

        let path = write_temp_file(&b"x"[..], &nested, "").unwrap();

        assert!(nested.is_dir());
        assert!(path.starts_with(&nested));
    }

    #[test]
    fn write_temp_file_applies_pattern() {
        let dir = TempDir::new().unwrap();

        let path = write_temp_file(&b"x"[..], dir.path(), "cap-*.bin").unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("cap-"), "unexpected name: {name}");
        assert!(name.ends_with(".bin"), "unexpected name: {name}");
        assert!(name.len() > "cap-.bin".len(), "no random token in: {name}");
    }

    #[test]
    fn write_temp_file_empty_dir_uses_system_temp() {
        let path = write_temp_file(&b"x"[..], "", "durafile-test-*").unwrap();

        assert!(path.starts_with(env::temp_dir()));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn write_temp_file_paths_are_unique() {
        let dir = TempDir::new().unwrap();

        let first = write_temp_file(&b"a"[..], dir.path(), "same-*").unwrap();
        let second = write_temp_file(&b"b"[..], dir.path(), "same-*").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn write_temp_file_failing_source_cleans_up() {
        let dir = TempDir::new().unwrap();

        let err = write_temp_file(FailingReader, dir.path(), "doomed-*").unwrap_err();

        assert!(matches!(err, FileError::Copy { .. }), "got {err:?}");
        assert_eq!(err.operation(), "write_temp_file");
        assert!(err.path().starts_with(dir.path()));

        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 0, "temp file left behind after failed copy");
    }

    #[test]
    fn write_temp_file_leaves_caller_reader_open() {
        let dir = TempDir::new().unwrap();
        let backing = dir.path().join("source.txt");
        std::fs::write(&backing, "shared").unwrap();

        let mut reader = std::fs::File::open(&backing).unwrap();
        let path = write_temp_file(&mut reader, dir.path(), "").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"shared");
        // The caller's handle is still alive and positioned at EOF.
        use std::io::Seek as _;
        assert_eq!(reader.stream_position().unwrap(), 6);
    }
}
