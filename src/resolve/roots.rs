//! Candidate-root construction for reference resolution.
//!
//! Root construction is a pure function of the base directory and the
//! [`RootPolicy`]; the only filesystem access is the existence gate on the
//! canonical worktree root, which is injected so the logic can be tested
//! against a fake tree.

use crate::constants::DEFAULT_WORKTREE_SUFFIX;
use std::path::{Path, PathBuf};

/// Policy knobs for candidate-root and path-variant construction.
#[derive(Debug, Clone)]
pub struct RootPolicy {
    /// Reserved top-level module name. When set, a subdirectory of that name
    /// is tried under each root, and references starting with it get extra
    /// path variants.
    pub module_name: Option<String>,
    /// Directory-name suffix identifying a detached worktree container
    /// (e.g. `proj.worktrees` holding checkouts of `proj`).
    pub worktree_suffix: String,
}

impl Default for RootPolicy {
    fn default() -> Self {
        Self {
            module_name: None,
            worktree_suffix: DEFAULT_WORKTREE_SUFFIX.to_string(),
        }
    }
}

/// Builds the ordered, deduplicated set of candidate roots for `base_dir`.
///
/// Order determines search priority: the base root, its parent, the module
/// subdirectory under each (when configured), then the canonical worktree
/// root and its module subdirectory (when the naming convention applies and
/// the canonical root exists on disk).
pub fn candidate_roots(base_dir: &Path, policy: &RootPolicy) -> Vec<PathBuf> {
    candidate_roots_with(base_dir, policy, |path| path.exists())
}

/// Same as [`candidate_roots`] but with an injected existence check, used by
/// the canonical-worktree gate.
pub fn candidate_roots_with<F>(base_dir: &Path, policy: &RootPolicy, exists: F) -> Vec<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    let mut roots: Vec<PathBuf> = Vec::new();

    add_root(&mut roots, base_dir.to_path_buf());
    if let Some(parent) = base_dir.parent() {
        add_root(&mut roots, parent.to_path_buf());
    }
    if let Some(module) = &policy.module_name {
        add_root(&mut roots, base_dir.join(module));
        if let Some(parent) = base_dir.parent() {
            add_root(&mut roots, parent.join(module));
        }
    }

    if let Some(canonical) = canonical_worktree_root(base_dir, &policy.worktree_suffix, &exists) {
        add_root(&mut roots, canonical.clone());
        if let Some(module) = &policy.module_name {
            add_root(&mut roots, canonical.join(module));
        }
    }

    roots
}

/// Detects the detached-worktree layout and returns the sibling canonical
/// checkout, if it exists.
///
/// The base directory sits two levels below the worktree container
/// (`proj.worktrees/<checkout>/<base>`); the canonical root is the
/// container's sibling named without the suffix (`proj`).
fn canonical_worktree_root<F>(base_dir: &Path, suffix: &str, exists: &F) -> Option<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    let worktree_root = base_dir.parent()?;
    let container = worktree_root.parent()?;
    let container_name = container.file_name()?.to_str()?;
    let canonical_name = container_name.strip_suffix(suffix)?;
    if canonical_name.is_empty() {
        return None;
    }
    let canonical = container.parent()?.join(canonical_name);
    exists(&canonical).then_some(canonical)
}

fn add_root(roots: &mut Vec<PathBuf>, root: PathBuf) {
    if !roots.contains(&root) {
        roots.push(root);
    }
}
