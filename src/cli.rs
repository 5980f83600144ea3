// src/cli.rs

use crate::constants::{DEFAULT_OUTPUT_FILENAME, DEFAULT_WORKTREE_SUFFIX};
use clap::Parser;

/// Aggregates a curated, ordered list of source files into a single flat
/// text artifact.
///
/// srcbundle reads a manifest of relative path references, resolves each one
/// against a set of candidate roots (tolerating nested worktrees and renamed
/// top-level directories), strips routine comments while keeping lines that
/// mention warnings or errors, and writes the concatenated result along with
/// per-file size statistics.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the manifest listing the references to aggregate, one
    /// relative path per line. Blank lines and lines starting with '#' are
    /// skipped.
    #[arg(value_name = "MANIFEST")]
    pub manifest: String,

    // --- Output Options ---
    /// Name of the primary output file, written next to the manifest.
    /// An absolute path is used as-is.
    #[arg(short = 'o', long = "output", value_name = "FILE", default_value = DEFAULT_OUTPUT_FILENAME)]
    pub output: String,

    /// Also write the document to this path. Best-effort: parent directories
    /// are created as needed and failures are logged, not fatal.
    #[arg(long, value_name = "PATH")]
    pub mirror: Option<String>,

    // --- Resolution Options ---
    /// Base directory for reference resolution. Defaults to the parent of
    /// the manifest's directory.
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<String>,

    /// Reserved top-level module name, tried as an extra subdirectory under
    /// each candidate root and as a path-variant rewrite for references that
    /// start with it.
    #[arg(long = "module", value_name = "NAME")]
    pub module_name: Option<String>,

    /// Directory-name suffix identifying a detached worktree container.
    #[arg(long, value_name = "SUFFIX", default_value = DEFAULT_WORKTREE_SUFFIX, allow_hyphen_values = true)]
    pub worktree_suffix: String,

    // --- Console Output ---
    /// Suppress the statistics report printed after a successful run.
    #[arg(short = 'q', long, action = clap::ArgAction::SetTrue)]
    pub quiet: bool,
}
