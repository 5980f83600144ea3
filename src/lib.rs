//! `srcbundle` is a library and command-line tool for aggregating a curated,
//! ordered list of source files into a single flat text artifact, suitable
//! for external review or bulk ingestion.
//!
//! Each reference in the list is resolved against an ordered set of
//! candidate roots (tolerating project reorganizations, nested worktrees,
//! and renamed top-level directories), classified as directory, binary, or
//! text, and rendered into a labeled section. Text content passes through a
//! comment filter that strips routine comments but always keeps lines
//! mentioning warnings or errors. The concatenated document is written to a
//! primary destination (and optionally mirrored), and per-file size
//! statistics are reported.
//!
//! As a library, it provides a modular pipeline:
//! 1.  **Resolve**: Map each relative reference to an absolute path by
//!     searching candidate roots and path variants.
//! 2.  **Load**: Produce a textual representation of the entry — a directory
//!     listing, a binary summary, or comment-filtered text.
//! 3.  **Aggregate**: Render sections in input order, concatenate, write,
//!     and compute statistics.
//!
//! # Example: Library Usage
//!
//! ```
//! use srcbundle::{run, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. Set up a project tree with a manifest in a subdirectory.
//! let temp = tempdir().unwrap();
//! let project = temp.path().join("project");
//! let docs = project.join("docs");
//! fs::create_dir_all(&docs).unwrap();
//! fs::write(project.join("notes.txt"), "plain text\n").unwrap();
//! fs::write(docs.join("manifest.txt"), "notes.txt\n").unwrap();
//!
//! // 2. Build a Config and execute the pipeline.
//! let config = ConfigBuilder::new()
//!     .manifest_path(docs.join("manifest.txt"))
//!     .output_filename("combined.txt")
//!     .build()
//!     .unwrap();
//! let outcome = run(&config).unwrap();
//!
//! // 3. The document contains one section per reference, in order.
//! let document = fs::read_to_string(&outcome.output_path).unwrap();
//! assert_eq!(document, "==== notes.txt ====\n\nplain text\n");
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod content;
pub mod core_types;
pub mod errors;
pub mod filters;
pub mod output;
pub mod resolve;
pub mod stats;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder};
pub use core_types::{AggregateOutcome, Section, SectionStats};
pub use errors::AppError;
pub use resolve::RootPolicy;

use anyhow::Result;

/// Executes the complete aggregation pipeline for the given configuration.
///
/// This is the primary entry point for running the tool's logic
/// programmatically in a way that mirrors the command-line execution. The
/// document is assembled fully in memory before being written, so a
/// resolution or load failure for any reference aborts the run with nothing
/// written to the primary path.
///
/// # Returns
/// An [`AggregateOutcome`] carrying the output path, the document, and the
/// statistics the reporter renders. Use
/// [`output::report::write_report`] to print the operator summary.
pub fn run(config: &Config) -> Result<AggregateOutcome> {
    output::aggregate(config)
}
