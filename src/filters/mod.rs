//! Content filters applied to text files before aggregation.

mod comments;

pub use comments::{filter_comment_lines, is_diagnostic_line};
