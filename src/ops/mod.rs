//! # File Operations
//!
//! The four operations this crate provides. Each is a free function that
//! opens, transfers, flushes, and closes within the one call; none keeps
//! state between calls.
//!
//! ## Quick Reference
//!
//! | Operation | Direction | On success | On failure |
//! |-----------|-----------|------------|------------|
//! | [`write_file`] | bytes → named file | file holds exactly the bytes, synced | destination removed |
//! | [`write_temp_file`] | stream → fresh unique file | path returned, caller owns the file | temp file removed |
//! | [`read_file`] / [`read_to_string`] | named file → memory | full contents returned | no side effects |
//! | [`concat_files`] | many named files → one file | exact in-order concatenation, synced | destination removed |
//!
//! The write-side operations sync data to disk before reporting success and
//! never leave a partially written destination behind on failure. See
//! [`FileError`](crate::FileError) for how failures are reported.

mod concat;
mod read;
mod temp;
mod write;

pub use concat::concat_files;
pub use read::{read_file, read_to_string};
pub use temp::write_temp_file;
pub use write::write_file;
