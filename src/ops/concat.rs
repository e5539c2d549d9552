//! In-order concatenation of files into one destination.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::FileError;
use crate::cleanup::RemoveOnDrop;

/// Concatenate the contents of `sources`, in order, into a file at `dest`.
///
/// `dest` is created if missing and truncated if present. Each source is
/// opened, copied whole onto the end of the destination, and closed before
/// the next source is opened, so the destination is the exact byte-for-byte
/// concatenation in list order. The destination is synced to disk before
/// the call returns.
///
/// An empty `sources` list is legal and produces an empty destination file.
///
/// On any failure after the destination was created, the partially written
/// destination is removed before the error is returned, so callers never
/// observe a half-merged file as if it were complete.
///
/// # Errors
///
/// - [`FileError::Create`] if `dest` cannot be created
/// - [`FileError::Open`] if a source cannot be opened; the error names
///   that source
/// - [`FileError::Copy`] if transferring a source's bytes fails on either
///   side; the error names that source
/// - [`FileError::Sync`] if the durable flush of `dest` fails
///
/// # Example
///
/// ```rust
/// use durafile::{concat_files, read_to_string, write_file};
///
/// let dir = tempfile::tempdir()?;
/// let header = dir.path().join("header.txt");
/// let body = dir.path().join("body.txt");
/// write_file(&header, "# report\n")?;
/// write_file(&body, "all good\n")?;
///
/// let report = dir.path().join("report.txt");
/// concat_files([&header, &body], &report)?;
///
/// assert_eq!(read_to_string(&report)?, "# report\nall good\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn concat_files<I, P>(sources: I, dest: impl AsRef<Path>) -> Result<(), FileError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let dest = dest.as_ref();

    // Declared before the handle: on early return the handle closes first,
    // then the guard unlinks.
    let mut cleanup = RemoveOnDrop::new("concat_files", dest);
    let mut dest_file = File::create(dest).map_err(|source| FileError::Create {
        operation: "concat_files",
        path: dest.to_path_buf(),
        source,
    })?;
    cleanup.arm();

    for source_path in sources {
        let source_path = source_path.as_ref();
        let mut source_file = File::open(source_path).map_err(|source| FileError::Open {
            operation: "concat_files",
            path: source_path.to_path_buf(),
            source,
        })?;
        io::copy(&mut source_file, &mut dest_file).map_err(|source| FileError::Copy {
            operation: "concat_files",
            path: source_path.to_path_buf(),
            source,
        })?;
        // source_file closes here, before the next source opens
    }

    dest_file.sync_all().map_err(|source| FileError::Sync {
        operation: "concat_files",
        path: dest.to_path_buf(),
        source,
    })?;
    cleanup.disarm();

    Ok(())
}
