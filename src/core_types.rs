//! Defines core data structures used throughout the aggregation pipeline.

use std::path::PathBuf;

/// The rendered unit for one reference: a header line naming the reference,
/// a blank line, and the loaded (and possibly filtered) content, trimmed of
/// trailing whitespace and terminated with one newline.
///
/// Sections are immutable once built and keep the order of the input
/// reference list.
#[derive(Debug, Clone)]
pub struct Section {
    /// The reference this section was built from, verbatim.
    pub reference: String,
    /// The fully rendered section text (header, blank line, content, newline).
    pub rendered: String,
}

/// Size statistics for one section as written into the output document.
///
/// The counts include the section's separator contribution: every section
/// after the first is preceded by one blank-line separator, which belongs to
/// that section's chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionStats {
    /// The reference the section was built from.
    pub reference: String,
    /// Character count of the chunk as written.
    pub chars: usize,
    /// Byte count of the chunk in UTF-8 encoding.
    pub bytes: usize,
}

/// The result of a successful aggregation run.
///
/// Carries the assembled document together with the statistics the reporter
/// renders. All counts are computed over the final document exactly as
/// written to the primary output path.
#[derive(Debug, Clone)]
pub struct AggregateOutcome {
    /// Where the primary document was written.
    pub output_path: PathBuf,
    /// The full output document.
    pub document: String,
    /// Total character count of the document.
    pub total_chars: usize,
    /// Total UTF-8 byte count of the document.
    pub total_bytes: usize,
    /// Characters from a `//` marker to end of line, summed over the document.
    pub comment_chars: usize,
    /// Per-section statistics, sorted ascending by character count.
    pub per_file: Vec<SectionStats>,
}
