use crate::constants::{BLOCK_CLOSE, BLOCK_OPEN, LINE_COMMENT};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Whole-word, case-insensitive match on warn/warning/warnings/error/errors.
static DIAGNOSTIC_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:warn(?:ing|ings)?|errors?)\b").expect("diagnostic keyword regex is valid")
});

/// Returns true if the line contains a diagnostic keyword.
///
/// The whole original line is searched, including any comment markers and
/// leading whitespace.
pub fn is_diagnostic_line(line: &str) -> bool {
    DIAGNOSTIC_KEYWORD.is_match(line)
}

/// Removes ordinary comment lines and blocks from text in a single
/// left-to-right pass, always preserving lines that contain a diagnostic
/// keyword.
///
/// The filter is line-oriented with two states (normal, in-block-comment).
/// Leading whitespace is stripped only for classification; the original line
/// is what gets kept or dropped. Lines that are not comments are always kept
/// verbatim. Retained lines are rejoined with newline separators.
///
/// # Examples
/// ```
/// use srcbundle::filters::filter_comment_lines;
///
/// let input = "let x = 1; // keep the code, drop this? no: whole line kept\n\
///              // routine comment\n\
///              // Warning: load-bearing comment\n\
///              let y = 2;";
/// let expected = "let x = 1; // keep the code, drop this? no: whole line kept\n\
///                 // Warning: load-bearing comment\n\
///                 let y = 2;";
/// assert_eq!(filter_comment_lines(input), expected);
/// ```
pub fn filter_comment_lines(text: &str) -> String {
    let mut filtered: Vec<&str> = Vec::new();
    let mut in_block = false;

    for line in text.lines() {
        let stripped = line.trim_start();
        let has_keyword = is_diagnostic_line(line);

        if in_block {
            if has_keyword {
                filtered.push(line);
            }
            if stripped.contains(BLOCK_CLOSE) {
                in_block = false;
            }
            continue;
        }

        if stripped.starts_with(LINE_COMMENT) {
            if has_keyword {
                filtered.push(line);
            }
            continue;
        }

        if stripped.starts_with(BLOCK_OPEN) {
            if has_keyword {
                filtered.push(line);
            }
            // A close marker on the same line means a single-line block.
            if !stripped[BLOCK_OPEN.len()..].contains(BLOCK_CLOSE) {
                in_block = true;
            }
            continue;
        }

        filtered.push(line);
    }

    let result = filtered.join("\n");
    debug!(
        "Comment filter applied. Original len: {}, new len: {}",
        text.len(),
        result.len()
    );
    result
}
