use std::path::{Component, Path, PathBuf};

/// Relative path from `base` to `target`.
///
/// Returns `None` when the two paths share no resolvable relation
/// (mixed absolute/relative inputs, or different roots on platforms
/// that have them).
pub fn relative_to(base: &Path, target: &Path) -> Option<PathBuf> {
    pathdiff::diff_paths(target, base)
}

/// True when a relative path's first component climbs out of its base.
///
/// This is the containment check: `relative_to(container, target)` followed
/// by `is_outside` decides whether `target` lies inside `container`.
pub fn is_outside(relative: &Path) -> bool {
    matches!(relative.components().next(), Some(Component::ParentDir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_target_inside_base_when_diffing_then_plain_relative_path() {
        let rel = relative_to(Path::new("/docs/fund-a"), Path::new("/docs/fund-a/doc.pdf"));
        assert_eq!(rel, Some(PathBuf::from("doc.pdf")));
        assert!(!is_outside(rel.as_deref().unwrap()));
    }

    #[test]
    fn given_target_outside_base_when_diffing_then_parent_marker_leads() {
        let rel = relative_to(Path::new("/docs/fund-a"), Path::new("/docs/other/doc.pdf"));
        assert_eq!(rel, Some(PathBuf::from("../other/doc.pdf")));
        assert!(is_outside(rel.as_deref().unwrap()));
    }

    #[test]
    fn given_relative_target_against_absolute_base_when_diffing_then_unrelated() {
        assert_eq!(relative_to(Path::new("/docs"), Path::new("doc.pdf")), None);
    }

    #[test]
    fn given_base_equal_to_target_when_diffing_then_empty_path() {
        let rel = relative_to(Path::new("/docs/fund-a"), Path::new("/docs/fund-a"));
        assert_eq!(rel, Some(PathBuf::new()));
    }

    #[test]
    fn given_dotted_file_name_when_checking_then_not_outside() {
        // "..config" is a file name, not a parent marker.
        assert!(!is_outside(Path::new("..config")));
        assert!(is_outside(Path::new("../doc.pdf")));
    }
}
