//! # durafile
//!
//! Whole-file I/O that cleans up after itself: write, read, temp-file
//! capture, and concatenation with **durable flush** and **no partial
//! files left behind on failure**.
//!
//! Four stateless free functions, no handles to manage. Each operation
//! opens, transfers, syncs, and closes within the one call:
//!
//! | Function | Does |
//! |----------|------|
//! | [`write_file`] | create-or-truncate a file and write a byte buffer to it |
//! | [`write_temp_file`] | capture a stream into a uniquely named new file, return its path |
//! | [`read_file`] | read a whole file into a `Vec<u8>` |
//! | [`read_to_string`] | read a whole file into a `String` (must be UTF-8) |
//! | [`concat_files`] | concatenate named files, in order, into a destination |
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust
//! use durafile::{concat_files, read_to_string, write_file};
//!
//! let dir = tempfile::tempdir()?;
//! let hello = dir.path().join("hello.txt");
//! let world = dir.path().join("world.txt");
//!
//! write_file(&hello, "hello, ")?;
//! write_file(&world, "world")?;
//!
//! let combined = dir.path().join("combined.txt");
//! concat_files([&hello, &world], &combined)?;
//! assert_eq!(read_to_string(&combined)?, "hello, world");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ---
//!
//! ## Durability & Cleanup
//!
//! The write-side operations follow one discipline:
//!
//! 1. Create the destination (or a uniquely named temp file).
//! 2. Transfer every byte.
//! 3. Sync to disk, so `Ok` means the data survives a crash or power loss.
//! 4. On any failure after creation, remove the destination before
//!    returning the error.
//!
//! Callers therefore never observe a partially written file as if it were
//! complete: either the destination exists with exactly the requested
//! contents, or it does not exist at all. Removal is best-effort; if the
//! filesystem itself is failing, a leftover file may remain, and the
//! removal failure is logged via [`tracing`] rather than masking the
//! original error.
//!
//! ---
//!
//! ## Error Handling
//!
//! All operations return `Result<T, FileError>`. Every error names the
//! operation, the path involved, and the underlying cause:
//!
//! ```rust
//! use durafile::read_file;
//! use std::path::Path;
//!
//! let err = read_file("/no/such/file").unwrap_err();
//! assert_eq!(err.operation(), "read_file");
//! assert_eq!(err.path(), Path::new("/no/such/file"));
//! assert!(err.to_string().starts_with("read_file: failed to open /no/such/file"));
//! ```
//!
//! ---
//!
//! ## Concurrency
//!
//! The operations are plain functions over the shared filesystem, safe to
//! call from any number of threads. [`write_temp_file`] guarantees unique
//! paths even for concurrent calls into the same directory with the same
//! pattern, because name allocation is atomic with file creation. The
//! other operations add no cross-process coordination: concurrent writers
//! to the *same* path race exactly as the underlying filesystem allows.

// Private modules
mod cleanup;
mod error;
mod ops;

// Public re-exports - error type
pub use error::FileError;

// Public re-exports - operations
pub use ops::{concat_files, read_file, read_to_string, write_file, write_temp_file};
