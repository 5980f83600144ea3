//! Path-variant rewrites tried against each candidate root.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Builds the ordered, deduplicated set of relative paths to try for a
/// reference.
///
/// The reference itself always comes first, unverified. When its first path
/// segment equals the reserved module name, two rewrites are added: the
/// reference re-prefixed with the module name (for roots that already sit
/// one level inside the module) and the reference with the leading segment
/// stripped (for roots that sit above the module). Rewrites that reduce to
/// an empty or current-directory path are never included.
pub fn path_variants(reference: &str, module_name: Option<&str>) -> Vec<PathBuf> {
    let mut variants: Vec<PathBuf> = Vec::new();
    let rel = Path::new(reference);

    add_variant(&mut variants, rel.to_path_buf());

    if let Some(module) = module_name {
        let first = rel.components().next().map(|c| c.as_os_str());
        if first == Some(OsStr::new(module)) {
            add_variant(&mut variants, Path::new(module).join(rel));
            let stripped: PathBuf = rel.components().skip(1).collect();
            add_variant(&mut variants, stripped);
        }
    }

    variants
}

fn add_variant(variants: &mut Vec<PathBuf>, candidate: PathBuf) {
    if candidate.as_os_str().is_empty() || candidate == Path::new(".") {
        return;
    }
    if !variants.contains(&candidate) {
        variants.push(candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_without_module_yields_single_variant() {
        let variants = path_variants("src/main.rs", None);
        assert_eq!(variants, vec![PathBuf::from("src/main.rs")]);
    }

    #[test]
    fn test_reference_not_under_module_yields_single_variant() {
        let variants = path_variants("src/main.rs", Some("Core"));
        assert_eq!(variants, vec![PathBuf::from("src/main.rs")]);
    }

    #[test]
    fn test_module_reference_gets_prefixed_and_stripped_variants() {
        let variants = path_variants("Core/src/lib.rs", Some("Core"));
        assert_eq!(
            variants,
            vec![
                PathBuf::from("Core/src/lib.rs"),
                PathBuf::from("Core/Core/src/lib.rs"),
                PathBuf::from("src/lib.rs"),
            ]
        );
    }

    #[test]
    fn test_bare_module_reference_has_no_empty_variant() {
        // Stripping the only segment would leave an empty path.
        let variants = path_variants("Core", Some("Core"));
        assert_eq!(
            variants,
            vec![PathBuf::from("Core"), PathBuf::from("Core/Core")]
        );
    }

    #[test]
    fn test_repeated_module_segment() {
        let variants = path_variants("Core/Core", Some("Core"));
        assert_eq!(
            variants,
            vec![
                PathBuf::from("Core/Core"),
                PathBuf::from("Core/Core/Core"),
                PathBuf::from("Core"),
            ]
        );
    }
}
