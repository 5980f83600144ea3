//! Defines the core `Config` struct and its builder.
//!
//! This module consolidates all the settings parsed and validated from the
//! CLI, making them available to the rest of the application in a structured
//! and type-safe manner.

use crate::resolve::RootPolicy;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;

/// Validated configuration for one aggregation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ordered reference list. Order is preserved in the output document;
    /// duplicates are legal and processed independently.
    pub references: Vec<String>,
    /// Absolute base directory that candidate roots are derived from.
    pub base_dir: PathBuf,
    /// Primary output path. The write here is mandatory and fatal on failure.
    pub output_path: PathBuf,
    /// Optional best-effort mirror destination.
    pub mirror_path: Option<PathBuf>,
    /// Root/variant construction policy (module name, worktree suffix).
    pub root_policy: RootPolicy,
}

impl Config {
    /// Creates a minimal configuration for unit tests.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            references: Vec::new(),
            base_dir: PathBuf::from("."),
            output_path: PathBuf::from("out.txt"),
            mirror_path: None,
            root_policy: RootPolicy::default(),
        }
    }
}
