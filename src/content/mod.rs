//! Loads a resolved filesystem entry and produces its textual representation.
//!
//! An entry is classified as a directory, a binary file, or a text file. A
//! directory yields a deterministic listing, a binary file yields a hash and
//! size summary, and a text file passes through the comment filter. Decode
//! failures are never surfaced as errors; they select the binary branch.

use crate::errors::io_error_with_path;
use crate::filters;
use anyhow::Result;
use content_inspector::ContentType;
use log::debug;
use std::fs;
use std::path::Path;

mod binary;
mod listing;

pub use binary::describe_binary;
pub use listing::directory_listing;

/// Produces the textual representation of a resolved entry.
///
/// # Errors
/// Returns an error only for filesystem failures (unreadable file or
/// directory). A file that fails to decode as UTF-8 is summarized as binary,
/// not treated as an error.
pub fn load(entry_path: &Path) -> Result<String> {
    if entry_path.is_dir() {
        return directory_listing(entry_path);
    }

    let bytes = fs::read(entry_path).map_err(|e| io_error_with_path(e, entry_path))?;
    match decode_text(bytes) {
        Ok(text) => Ok(filters::filter_comment_lines(&text)),
        Err(raw) => {
            debug!(
                "Treating '{}' as binary ({} bytes)",
                entry_path.display(),
                raw.len()
            );
            Ok(describe_binary(&raw))
        }
    }
}

/// Attempts to decode the raw bytes as UTF-8 text; hands the bytes back when
/// the content is binary or the decode fails.
fn decode_text(bytes: Vec<u8>) -> std::result::Result<String, Vec<u8>> {
    if content_inspector::inspect(&bytes) == ContentType::BINARY {
        return Err(bytes);
    }
    String::from_utf8(bytes).map_err(|e| e.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_text_file_is_comment_filtered() -> Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("code.rs");
        fs::write(&file_path, "fn main() {}\n// routine comment\n")?;

        let loaded = load(&file_path)?;
        assert_eq!(loaded, "fn main() {}");

        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_load_invalid_utf8_is_summarized_as_binary() -> Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("blob.dat");
        // 0x80 is an invalid UTF-8 start byte.
        fs::write(&file_path, [0x48, 0x65, 0x80, 0x6f])?;

        let loaded = load(&file_path)?;
        assert!(loaded.starts_with("Binary file; contents omitted."));
        assert!(loaded.contains("SHA256:"));

        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_load_null_bytes_is_summarized_as_binary() -> Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("blob.bin");
        fs::write(&file_path, b"data with a \0 null byte")?;

        let loaded = load(&file_path)?;
        assert!(loaded.starts_with("Binary file; contents omitted."));

        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_load_empty_file_is_empty_text() -> Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("empty.txt");
        fs::write(&file_path, "")?;

        // An empty file decodes as empty text, not as a binary summary.
        assert_eq!(load(&file_path)?, "");

        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_load_directory_produces_listing() -> Result<()> {
        let temp = tempdir()?;
        let dir_path = temp.path().join("assets");
        fs::create_dir(&dir_path)?;
        fs::write(dir_path.join("a.bin"), [1u8, 2, 3])?;

        let loaded = load(&dir_path)?;
        assert!(loaded.starts_with("Directory listing (relative paths):"));
        assert!(loaded.contains("- a.bin (3 bytes)"));

        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let result = load(Path::new("definitely_not_here_for_srcbundle.txt"));
        assert!(result.is_err());
    }
}
