// src/output/mod.rs

//! Assembles sections into the output document and writes it out.

use crate::config::Config;
use crate::content;
use crate::core_types::{AggregateOutcome, Section};
use crate::resolve;
use crate::stats;
use anyhow::Result;
use log::debug;

pub mod formatter;
pub mod report;
pub mod section;
pub mod writer;

/// Runs the aggregation pipeline for every reference in input order:
/// resolve, load, render a section, concatenate, write, and compute
/// statistics.
///
/// The document is fully assembled in memory before anything is written, so
/// a resolution or load failure for any reference aborts the run with zero
/// bytes written to the primary path.
pub fn aggregate(config: &Config) -> Result<AggregateOutcome> {
    let total = config.references.len();
    let mut sections: Vec<Section> = Vec::with_capacity(total);

    for (index, reference) in config.references.iter().enumerate() {
        debug!("Processing reference {}/{}: {}", index + 1, total, reference);
        let entry_path = resolve::resolve(&config.base_dir, reference, &config.root_policy)?;
        let contents = content::load(&entry_path)?;
        sections.push(section::build_section(reference, &contents));
    }

    let document = assemble_document(&sections);

    writer::write_primary(&config.output_path, &document)?;
    if let Some(mirror_path) = &config.mirror_path {
        writer::write_mirror(mirror_path, &document);
    }

    let total_chars = document.chars().count();
    let total_bytes = document.len();
    let comment_chars = stats::comment_character_count(&document);
    let per_file = stats::per_section_stats(&sections);

    Ok(AggregateOutcome {
        output_path: config.output_path.clone(),
        document,
        total_chars,
        total_bytes,
        comment_chars,
        per_file,
    })
}

/// Concatenates sections in order, inserting a single blank-line separator
/// before every section except the first.
pub fn assemble_document(sections: &[Section]) -> String {
    let mut document = String::new();
    for (index, section) in sections.iter().enumerate() {
        if index > 0 {
            document.push('\n');
        }
        document.push_str(&section.rendered);
    }
    document
}
