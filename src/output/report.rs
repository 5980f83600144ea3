// src/output/report.rs

//! Renders the human-readable statistics summary for the operator.

use crate::core_types::AggregateOutcome;
use crate::output::formatter::{
    group_thousands, group_thousands_fixed, reference_file_name, reference_parent,
};
use anyhow::Result;
use std::io::Write;

/// Writes the console report: the primary output path, one row per section
/// (percentage of total characters, size in kilobytes, file name, parent
/// path, column-aligned), and the totals with the comment-character share.
///
/// Rows appear in the order of `outcome.per_file`, i.e. ascending by
/// per-section character count.
pub fn write_report(writer: &mut dyn Write, outcome: &AggregateOutcome) -> Result<()> {
    writeln!(
        writer,
        "Wrote concatenated file to {}",
        outcome.output_path.display()
    )?;
    writeln!(writer, "Per-file character totals:")?;

    let name_width = outcome
        .per_file
        .iter()
        .map(|stat| reference_file_name(&stat.reference).chars().count())
        .max()
        .unwrap_or(0);
    let parent_width = outcome
        .per_file
        .iter()
        .map(|stat| reference_parent(&stat.reference).chars().count())
        .max()
        .unwrap_or(0);

    for stat in &outcome.per_file {
        let kb = stat.bytes as f64 / 1024.0;
        let percent = if outcome.total_chars > 0 {
            stat.chars as f64 / outcome.total_chars as f64 * 100.0
        } else {
            0.0
        };
        writeln!(
            writer,
            "  {:>6.2}%  {:>7.2} KB  {:<name_width$}  {:<parent_width$}",
            percent,
            kb,
            reference_file_name(&stat.reference),
            reference_parent(&stat.reference),
        )?;
    }

    let comment_percent = if outcome.total_chars > 0 {
        outcome.comment_chars as f64 / outcome.total_chars as f64 * 100.0
    } else {
        0.0
    };
    let total_kb = outcome.total_bytes as f64 / 1024.0;

    writeln!(writer)?;
    writeln!(
        writer,
        "Total characters in output: {} ({} KB)",
        group_thousands(outcome.total_chars as u64),
        group_thousands_fixed(total_kb)
    )?;
    writeln!(
        writer,
        "Commented character count: {} ({}%)",
        group_thousands(outcome.comment_chars as u64),
        group_thousands_fixed(comment_percent)
    )?;
    Ok(())
}
