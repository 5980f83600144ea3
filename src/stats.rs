//! Size and noise statistics over the assembled document.

use crate::constants::LINE_COMMENT;
use crate::core_types::{Section, SectionStats};

/// Counts, per line of the document, the characters from the first `//`
/// marker to the end of the line, cumulatively.
///
/// This is a coarse noise metric over the already-filtered document, not a
/// correctness gate.
pub fn comment_character_count(document: &str) -> usize {
    document
        .lines()
        .map(|line| match line.find(LINE_COMMENT) {
            Some(index) => line[index..].chars().count(),
            None => 0,
        })
        .sum()
}

/// Computes per-section size statistics, sorted ascending by character count.
///
/// The counted chunk for every section after the first includes the one
/// blank-line separator written before it.
pub fn per_section_stats(sections: &[Section]) -> Vec<SectionStats> {
    let mut stats: Vec<SectionStats> = sections
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let separator = usize::from(index > 0);
            SectionStats {
                reference: section.reference.clone(),
                chars: section.rendered.chars().count() + separator,
                bytes: section.rendered.len() + separator,
            }
        })
        .collect();
    stats.sort_by_key(|stat| stat.chars);
    stats
}
