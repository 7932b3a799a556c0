//! Shared test utilities for integration tests.
//!
//! Provides a sample post and a helper for writing markdown fixtures into
//! temporary directories.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Sample post exercising every rule of the dialect.
pub const SAMPLE_POST: &str = "# Shipping Rust at Scale!\n\
Lessons from a year of running *Rust* services in production.\n\
\n\
## Why Rust\n\
\n\
We wanted **predictable latency** and ***fearless*** refactoring.\n\
\n\
![youtube](https://www.youtube.com/watch?v=abc123)\n\
\n\
![architecture](img/arch.png)\n\
\n\
See [the book](https://doc.rust-lang.org/book/) and run `cargo test`.\n\
\n\
* fast\n\
* safe\n\
\n\
> Measure first.\n\
\n\
---\n\
\n\
Thanks for reading.";

/// Creates temporary directory containing a markdown file.
///
/// `name` may include subdirectories, which are created as needed.
///
/// # Returns
///
/// Temporary directory and path to the written file
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_markdown(name: &str, content: &str) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok((dir, path))
}
