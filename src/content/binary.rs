use crate::constants::BINARY_PREVIEW_LEN;
use crate::output::formatter::group_thousands;
use sha2::{Digest, Sha256};

/// Summarizes binary content instead of embedding it: a stable content hash,
/// the byte size (raw and in kilobytes), and a fixed-length hex preview of
/// the leading bytes. A zero-length file gets an explicit note instead of a
/// preview.
pub fn describe_binary(data: &[u8]) -> String {
    let digest = hex::encode(Sha256::digest(data));
    let size_bytes = data.len();

    let mut lines = vec![
        "Binary file; contents omitted.".to_string(),
        format!(
            "Size: {} bytes ({:.2} KB)",
            group_thousands(size_bytes as u64),
            size_bytes as f64 / 1024.0
        ),
        format!("SHA256: {}", digest),
    ];

    if data.is_empty() {
        lines.push("File is empty.".to_string());
    } else {
        let preview = data
            .iter()
            .take(BINARY_PREVIEW_LEN)
            .map(|byte| format!("{:02x}", byte))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("First 32 bytes (hex): {}", preview));
    }

    lines.join("\n")
}
