// src/output/writer.rs

//! Writes the assembled document to its destinations.
//!
//! The primary write is mandatory and fatal on failure. The mirror write is
//! a convenience copy: its parent directories are created best-effort and
//! any filesystem error is logged as a warning without affecting the run.

use crate::errors::io_error_with_path;
use anyhow::Result;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Writes the document to the primary output path, UTF-8 encoded,
/// overwriting any existing file.
pub fn write_primary(path: &Path, document: &str) -> Result<()> {
    fs::write(path, document).map_err(|e| io_error_with_path(e, path))?;
    debug!(
        "Wrote {} bytes to primary output {}",
        document.len(),
        path.display()
    );
    Ok(())
}

/// Writes the same document to the mirror path, creating parent directories
/// as needed. Failures are reported as a warning and otherwise suppressed;
/// the primary artifact is authoritative.
pub fn write_mirror(path: &Path, document: &str) {
    if let Err(e) = try_write_mirror(path, document) {
        warn!(
            "Mirror write to '{}' failed (primary output unaffected): {}",
            path.display(),
            e
        );
    }
}

fn try_write_mirror(path: &Path, document: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_primary_overwrites() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("out.txt");
        fs::write(&path, "stale")?;

        write_primary(&path, "fresh contents\n")?;
        assert_eq!(fs::read_to_string(&path)?, "fresh contents\n");

        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_write_primary_failure_is_fatal() {
        let temp = tempdir().expect("tempdir");
        // Writing to a path whose parent does not exist fails.
        let path = temp.path().join("missing_dir/out.txt");
        let result = write_primary(&path, "doc");
        assert!(result.is_err());
    }

    #[test]
    fn test_write_mirror_creates_parent_directories() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("deep/nested/mirror.txt");

        write_mirror(&path, "mirrored\n");
        assert_eq!(fs::read_to_string(&path)?, "mirrored\n");

        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_write_mirror_failure_is_swallowed() {
        let temp = tempdir().expect("tempdir");
        // A mirror path whose parent is a regular file cannot be created.
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "file, not dir").expect("write blocker");

        // Must not panic or return an error.
        write_mirror(&blocker.join("mirror.txt"), "doc");
    }
}
