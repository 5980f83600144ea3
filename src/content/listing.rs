use crate::constants::{DIRECTORY_LISTING_HEADER, EMPTY_DIRECTORY_SENTINEL};
use crate::errors::io_error_with_path;
use crate::output::formatter::{group_thousands, posix_display};
use anyhow::Result;
use std::path::Path;
use walkdir::WalkDir;

/// Produces a deterministic listing of every descendant of `directory`.
///
/// Entries (files and directories) are sorted by their POSIX-style relative
/// path; directories are suffixed with `/`, files are annotated with their
/// byte size. A directory with no descendants yields a fixed sentinel.
pub fn directory_listing(directory: &Path) -> Result<String> {
    let mut items: Vec<(String, bool, u64)> = Vec::new();

    for entry in WalkDir::new(directory).min_depth(1) {
        let entry = entry.map_err(|e| io_error_with_path(e.into(), directory))?;
        let relative = entry.path().strip_prefix(directory).unwrap_or(entry.path());
        let relative_str = posix_display(relative);
        if entry.file_type().is_dir() {
            items.push((relative_str, true, 0));
        } else {
            let size = entry
                .metadata()
                .map_err(|e| io_error_with_path(e.into(), entry.path()))?
                .len();
            items.push((relative_str, false, size));
        }
    }

    items.sort_by(|a, b| a.0.cmp(&b.0));

    if items.is_empty() {
        return Ok(EMPTY_DIRECTORY_SENTINEL.to_string());
    }

    let mut lines = vec![DIRECTORY_LISTING_HEADER.to_string()];
    for (relative, is_dir, size) in items {
        if is_dir {
            lines.push(format!("- {}/", relative));
        } else {
            lines.push(format!("- {} ({} bytes)", relative, group_thousands(size)));
        }
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_empty_directory_sentinel() -> Result<()> {
        let temp = tempdir()?;
        assert_eq!(directory_listing(temp.path())?, "(directory is empty)");
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_listing_is_sorted_by_relative_path() -> Result<()> {
        let temp = tempdir()?;
        fs::create_dir(temp.path().join("sub"))?;
        fs::write(temp.path().join("sub/inner.txt"), "abc")?;
        fs::write(temp.path().join("b.txt"), "12345")?;
        fs::write(temp.path().join("a.txt"), "")?;

        let listing = directory_listing(temp.path())?;
        let expected = "Directory listing (relative paths):\n\
                        - a.txt (0 bytes)\n\
                        - b.txt (5 bytes)\n\
                        - sub/\n\
                        - sub/inner.txt (3 bytes)";
        assert_eq!(listing, expected);

        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_large_file_size_is_thousands_grouped() -> Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("big.bin"), vec![0u8; 1500])?;

        let listing = directory_listing(temp.path())?;
        assert!(listing.contains("- big.bin (1,500 bytes)"));

        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let result = directory_listing(Path::new("no_such_directory_for_srcbundle"));
        assert!(result.is_err());
    }
}
