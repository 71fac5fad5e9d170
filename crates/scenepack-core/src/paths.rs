//! Filesystem path utilities

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path
/// - Removes `.` components
/// - Resolves `..` components against preceding normal components
/// - Never touches the filesystem (purely textual, like `os.path.normpath`)
pub fn normalize(path: &Path) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => continue,
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                // `..` above the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                // Leading `..` components are preserved
                _ => components.push(component),
            },
            other => components.push(other),
        }
    }

    components.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_dots() {
        assert_eq!(
            normalize(Path::new("assets/./textures/wood.png")),
            PathBuf::from("assets/textures/wood.png")
        );
    }

    #[test]
    fn test_normalize_resolves_parent() {
        assert_eq!(
            normalize(Path::new("assets/meshes/../textures/wood.png")),
            PathBuf::from("assets/textures/wood.png")
        );
    }

    #[test]
    fn test_normalize_parent_above_root() {
        assert_eq!(normalize(Path::new("/../etc")), PathBuf::from("/etc"));
    }

    #[test]
    fn test_normalize_keeps_leading_parent() {
        assert_eq!(
            normalize(Path::new("../shared/tex.png")),
            PathBuf::from("../shared/tex.png")
        );
    }

    #[test]
    fn test_normalize_absolute_unchanged() {
        assert_eq!(
            normalize(Path::new("/srv/assets/tex.png")),
            PathBuf::from("/srv/assets/tex.png")
        );
    }
}
