//! Error types for durafile operations.

use std::path::{Path, PathBuf};

/// Error type for every durafile operation.
///
/// Each variant is one failure kind and carries the name of the operation
/// that failed, the path involved, and the underlying cause as a `source`.
/// Uses `#[non_exhaustive]` for forward compatibility.
///
/// # Examples
///
/// ```rust
/// use durafile::FileError;
/// use std::path::PathBuf;
///
/// let err = FileError::Open {
///     operation: "read_file",
///     path: PathBuf::from("/missing.txt"),
///     source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
/// };
/// assert_eq!(err.operation(), "read_file");
/// assert!(err.to_string().contains("/missing.txt"));
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// Destination or temporary file could not be created.
    #[error("{operation}: failed to create {path}: {source}")]
    Create {
        /// The operation that failed.
        operation: &'static str,
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The requested temp-file directory could not be created.
    #[error("{operation}: failed to create directory {path}: {source}")]
    Directory {
        /// The operation that failed.
        operation: &'static str,
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A source file could not be opened for reading.
    #[error("{operation}: failed to open {path}: {source}")]
    Open {
        /// The operation that failed.
        operation: &'static str,
        /// The path that could not be opened.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing a byte buffer to the destination failed.
    #[error("{operation}: failed to write {path}: {source}")]
    Write {
        /// The operation that failed.
        operation: &'static str,
        /// The destination being written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading file contents failed mid-stream.
    #[error("{operation}: failed to read {path}: {source}")]
    Read {
        /// The operation that failed.
        operation: &'static str,
        /// The path being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Copying bytes from a source onto the destination failed.
    ///
    /// Raised for failures on either side of the transfer; the wrapped
    /// `source` distinguishes them where the platform does.
    #[error("{operation}: copy failed for {path}: {source}")]
    Copy {
        /// The operation that failed.
        operation: &'static str,
        /// The file whose transfer failed: the source being appended for
        /// concatenation, the temp file for stream capture.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Flushing written data to stable storage failed.
    #[error("{operation}: failed to sync {path}: {source}")]
    Sync {
        /// The operation that failed.
        operation: &'static str,
        /// The file whose durable flush failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Releasing the file handle failed after an otherwise successful write.
    #[error("{operation}: failed to close {path}: {source}")]
    Close {
        /// The operation that failed.
        operation: &'static str,
        /// The file whose handle could not be released.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// File contents are not valid UTF-8.
    #[error("{operation}: {path} is not valid UTF-8: {source}")]
    Utf8 {
        /// The operation that failed.
        operation: &'static str,
        /// The file with non-UTF-8 contents.
        path: PathBuf,
        /// The conversion error, including the invalid byte position.
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl FileError {
    /// Name of the operation that produced this error (e.g. `"write_file"`).
    #[inline]
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Create { operation, .. }
            | Self::Directory { operation, .. }
            | Self::Open { operation, .. }
            | Self::Write { operation, .. }
            | Self::Read { operation, .. }
            | Self::Copy { operation, .. }
            | Self::Sync { operation, .. }
            | Self::Close { operation, .. }
            | Self::Utf8 { operation, .. } => operation,
        }
    }

    /// The path involved in the failure.
    ///
    /// For [`FileError::Directory`] this is the directory being created;
    /// for every other variant it is the file the operation was touching.
    #[inline]
    pub fn path(&self) -> &Path {
        match self {
            Self::Create { path, .. }
            | Self::Directory { path, .. }
            | Self::Open { path, .. }
            | Self::Write { path, .. }
            | Self::Read { path, .. }
            | Self::Copy { path, .. }
            | Self::Sync { path, .. }
            | Self::Close { path, .. }
            | Self::Utf8 { path, .. } => path,
        }
    }
}
