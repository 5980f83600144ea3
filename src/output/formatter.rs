// src/output/formatter.rs

//! Provides helper functions for formatting parts of the output.

use std::path::Path;

/// Formats a path with `/` separators for consistent display, even on Windows.
pub fn posix_display(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Renders an integer with thousands separators (`1234567` -> `"1,234,567"`).
pub fn group_thousands(value: u64) -> String {
    group_digit_str(&value.to_string())
}

/// Renders a non-negative value with two decimal places and a
/// thousands-grouped integer part (`1234.5` -> `"1,234.50"`).
pub fn group_thousands_fixed(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    match formatted.split_once('.') {
        Some((int_part, frac_part)) => format!("{}.{}", group_digit_str(int_part), frac_part),
        None => group_digit_str(&formatted),
    }
}

/// The file-name component of a reference, for the report's name column.
pub fn reference_file_name(reference: &str) -> String {
    Path::new(reference)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| reference.to_string())
}

/// The parent component of a reference, for the report's directory column.
/// A reference with no parent renders as `.`.
pub fn reference_parent(reference: &str) -> String {
    match Path::new(reference).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => posix_display(parent),
        _ => ".".to_string(),
    }
}

fn group_digit_str(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
