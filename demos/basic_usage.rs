//! Basic usage of every durafile operation.
//!
//! This example walks through writing, reading, temp-file capture,
//! concatenation, and error handling, all inside a throwaway directory.
//!
//! Run with: `cargo run --example basic_usage`

use durafile::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== durafile Basic Usage Example ===\n");

    let dir = tempfile::tempdir()?;

    // --- Writing files ---
    println!("1. Writing files...");
    let hello = dir.path().join("hello.txt");
    write_file(&hello, "Hello, World!")?;
    let data = dir.path().join("data.bin");
    write_file(&data, [0x00u8, 0x01, 0x02, 0x03])?;
    println!("   Created {} and {}", hello.display(), data.display());

    // --- Reading files ---
    println!("\n2. Reading files...");
    let text = read_to_string(&hello)?;
    println!("   hello.txt contains: {text}");
    let binary = read_file(&data)?;
    println!("   data.bin contains: {binary:?}");

    // --- Capturing a stream into a temp file ---
    println!("\n3. Capturing a stream...");
    let spool = dir.path().join("spool");
    let captured = write_temp_file(&b"streamed bytes"[..], &spool, "cap-*.bin")?;
    println!("   Captured stream into {}", captured.display());
    println!("   (the spool directory was created on demand)");

    // --- Concatenating files ---
    println!("\n4. Concatenating files...");
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    write_file(&first, "first half, ")?;
    write_file(&second, "second half")?;

    let merged = dir.path().join("merged.txt");
    concat_files([&first, &second], &merged)?;
    println!("   merged.txt contains: {}", read_to_string(&merged)?);

    // --- Error handling ---
    println!("\n5. Error handling...");
    match read_file(dir.path().join("missing.txt")) {
        Ok(_) => println!("   Unexpected success"),
        Err(err @ FileError::Open { .. }) => {
            println!(
                "   {} could not open {}",
                err.operation(),
                err.path().display()
            );
            println!("   Full message: {err}");
        }
        Err(err) => println!("   Unexpected error: {err}"),
    }

    println!("\n=== Example complete! ===");
    Ok(())
}
