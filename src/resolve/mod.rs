//! Resolves a relative reference to an absolute filesystem path.
//!
//! A reference may live at different depths depending on whether the base
//! directory points inside the module folder, inside a sibling checkout, or
//! inside a detached worktree. Resolution tries a small ordered product of
//! candidate roots and path variants instead of requiring exact caller
//! configuration.

use crate::errors::AppError;
use log::debug;
use std::path::{Path, PathBuf};

mod roots;
mod variants;

pub use roots::{candidate_roots, candidate_roots_with, RootPolicy};
pub use variants::path_variants;

/// Resolves `reference` against the candidate roots derived from `base_dir`.
///
/// Roots are iterated outer, variants inner, so root priority dominates
/// variant priority; the first combination that exists on disk wins.
///
/// # Errors
/// Returns [`AppError::ResolutionFailure`] listing every attempted absolute
/// path when no combination exists.
pub fn resolve(base_dir: &Path, reference: &str, policy: &RootPolicy) -> Result<PathBuf, AppError> {
    resolve_with(base_dir, reference, policy, |path| path.exists())
}

/// Same as [`resolve`] but with an injected existence check, so the search
/// order can be tested without touching the filesystem.
pub fn resolve_with<F>(
    base_dir: &Path,
    reference: &str,
    policy: &RootPolicy,
    exists: F,
) -> Result<PathBuf, AppError>
where
    F: Fn(&Path) -> bool,
{
    let roots = candidate_roots_with(base_dir, policy, &exists);
    let variants = path_variants(reference, policy.module_name.as_deref());

    let mut attempted: Vec<PathBuf> = Vec::with_capacity(roots.len() * variants.len());
    for root in &roots {
        for variant in &variants {
            let candidate = root.join(variant);
            if exists(&candidate) {
                debug!("Resolved '{}' -> {}", reference, candidate.display());
                return Ok(candidate);
            }
            attempted.push(candidate);
        }
    }

    Err(AppError::ResolutionFailure {
        reference: reference.to_string(),
        attempted,
    })
}
