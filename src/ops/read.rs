//! Whole-file reads.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::FileError;

/// Read the entire file at `path` into a byte vector.
///
/// The file is opened read-only and drained to end-of-file; the vector is
/// pre-sized from file metadata when available. An empty file yields an
/// empty vector.
///
/// # Errors
///
/// - [`FileError::Open`] if the file cannot be opened (missing, not a
///   file, or permission denied)
/// - [`FileError::Read`] if draining the contents fails
///
/// # Example
///
/// ```rust
/// use durafile::{read_file, write_file};
///
/// let dir = tempfile::tempdir()?;
/// let path = dir.path().join("note.txt");
/// write_file(&path, "remember this")?;
///
/// assert_eq!(read_file(&path)?, b"remember this");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>, FileError> {
    read_bytes("read_file", path.as_ref())
}

/// Read the entire file at `path` into a `String`.
///
/// Same as [`read_file`] with the additional requirement that the contents
/// are valid UTF-8.
///
/// # Errors
///
/// - [`FileError::Open`] / [`FileError::Read`] as for [`read_file`]
/// - [`FileError::Utf8`] if the contents are not valid UTF-8
///
/// # Example
///
/// ```rust
/// use durafile::{read_to_string, write_file};
///
/// let dir = tempfile::tempdir()?;
/// let path = dir.path().join("greeting.txt");
/// write_file(&path, "hello")?;
///
/// assert_eq!(read_to_string(&path)?, "hello");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String, FileError> {
    let bytes = read_bytes("read_to_string", path.as_ref())?;
    String::from_utf8(bytes).map_err(|source| FileError::Utf8 {
        operation: "read_to_string",
        path: path.as_ref().to_path_buf(),
        source,
    })
}

/// Shared read path; `operation` names the public entry point so errors
/// report the call the user actually made.
fn read_bytes(operation: &'static str, path: &Path) -> Result<Vec<u8>, FileError> {
    let mut file = File::open(path).map_err(|source| FileError::Open {
        operation,
        path: path.to_path_buf(),
        source,
    })?;

    let mut contents = match file.metadata() {
        Ok(meta) => Vec::with_capacity(meta.len() as usize),
        Err(_) => Vec::new(),
    };
    file.read_to_end(&mut contents)
        .map_err(|source| FileError::Read {
            operation,
            path: path.to_path_buf(),
            source,
        })?;

    Ok(contents)
}
