//! Builds a validated [`Config`] from CLI arguments or programmatic input.

use crate::cli::Cli;
use crate::config::Config;
use crate::constants::DEFAULT_OUTPUT_FILENAME;
use crate::errors::{io_error_with_path, AppError};
use crate::resolve::RootPolicy;
use anyhow::Result;
use log::debug;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Fluent builder for [`Config`].
///
/// The reference list comes either from a manifest file (one reference per
/// line, blank lines and `#` comments skipped) or from an explicit list set
/// with [`ConfigBuilder::references`]; the explicit list wins when both are
/// given.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    manifest_path: Option<PathBuf>,
    references: Option<Vec<String>>,
    output_filename: Option<String>,
    mirror_path: Option<PathBuf>,
    base_dir: Option<PathBuf>,
    root_policy: RootPolicy,
}

impl ConfigBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed CLI arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            manifest_path: Some(PathBuf::from(cli.manifest)),
            references: None,
            output_filename: Some(cli.output),
            mirror_path: cli.mirror.map(PathBuf::from),
            base_dir: cli.base_dir.map(PathBuf::from),
            root_policy: RootPolicy {
                module_name: cli.module_name,
                worktree_suffix: cli.worktree_suffix,
            },
        }
    }

    /// Sets the manifest file the reference list is read from.
    pub fn manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = Some(path.into());
        self
    }

    /// Sets the reference list directly, bypassing any manifest.
    pub fn references(mut self, references: Vec<String>) -> Self {
        self.references = Some(references);
        self
    }

    /// Sets the primary output filename (resolved next to the manifest, or
    /// used as-is when absolute).
    pub fn output_filename(mut self, filename: impl Into<String>) -> Self {
        self.output_filename = Some(filename.into());
        self
    }

    /// Sets the optional mirror destination.
    pub fn mirror_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.mirror_path = Some(path.into());
        self
    }

    /// Overrides the resolution base directory.
    pub fn base_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(path.into());
        self
    }

    /// Sets the reserved top-level module name.
    pub fn module_name(mut self, name: impl Into<String>) -> Self {
        self.root_policy.module_name = Some(name.into());
        self
    }

    /// Overrides the detached-worktree directory-name suffix.
    pub fn worktree_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.root_policy.worktree_suffix = suffix.into();
        self
    }

    /// Validates the settings and produces a [`Config`].
    ///
    /// The anchor directory (where a relative output filename lands) is the
    /// manifest's directory; the default base directory is the anchor's
    /// parent, matching a manifest kept in a subdirectory of the tree it
    /// describes.
    pub fn build(self) -> Result<Config> {
        let output_filename = self
            .output_filename
            .unwrap_or_else(|| DEFAULT_OUTPUT_FILENAME.to_string());
        if output_filename.is_empty() {
            return Err(AppError::Config("output filename must not be empty".to_string()).into());
        }

        let (references, anchor_dir) = match (self.references, &self.manifest_path) {
            (Some(references), _) => {
                let anchor = self
                    .base_dir
                    .clone()
                    .unwrap_or_else(|| PathBuf::from("."));
                (references, anchor)
            }
            (None, Some(manifest_path)) => {
                let references = parse_manifest(manifest_path)?;
                let anchor = manifest_path
                    .parent()
                    .filter(|parent| !parent.as_os_str().is_empty())
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."));
                (references, anchor)
            }
            (None, None) => {
                return Err(AppError::Config(
                    "no reference list provided: set a manifest path or an explicit list"
                        .to_string(),
                )
                .into());
            }
        };

        let anchor_dir = absolutize(&anchor_dir)?;
        let base_dir = match self.base_dir {
            Some(base) => absolutize(&base)?,
            None => anchor_dir
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| anchor_dir.clone()),
        };

        let output_path = anchor_dir.join(&output_filename);
        debug!(
            "Configuration: {} references, base {}, output {}",
            references.len(),
            base_dir.display(),
            output_path.display()
        );

        Ok(Config {
            references,
            base_dir,
            output_path,
            mirror_path: self.mirror_path,
            root_policy: self.root_policy,
        })
    }
}

/// Reads the ordered reference list from a manifest file. Blank lines and
/// lines starting with `#` are skipped; everything else is taken verbatim
/// (trimmed) and order is preserved.
fn parse_manifest(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path).map_err(|e| io_error_with_path(e, path))?;
    let references = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect();
    Ok(references)
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().map_err(|e| io_error_with_path(e, "."))?;
    Ok(cwd.join(path))
}
