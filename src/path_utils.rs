use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path without touching the filesystem.
///
/// Drops `.` segments, collapses repeated separators and resolves `..` against
/// a preceding normal segment. Leading `..` segments of a relative path are
/// kept, and `..` directly under the root is dropped. A path that normalizes
/// to nothing (`.`, `a/..`) becomes the empty path.
///
/// # Examples
///
/// - `./src/../include/a.h` normalizes to `include/a.h`
/// - `../lib/x.c` stays `../lib/x.c`
/// - `/../etc` normalizes to `/etc`
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    parts.iter().collect()
}

/// Check whether `path` equals `prefix` or lies beneath it.
///
/// Both sides are normalized first and compared segment by segment, so a
/// prefix `ab` never matches `abc/file.c`. A prefix that normalizes to the
/// empty path (`.`, `a/..`) matches nothing.
#[must_use]
pub fn path_within(path: &Path, prefix: &Path) -> bool {
    let prefix = normalize_path(prefix);
    if prefix.as_os_str().is_empty() {
        return false;
    }
    normalize_path(path).starts_with(prefix)
}

/// Express `path` relative to `base` when it lies beneath it.
///
/// Relative paths and absolute paths outside `base` are returned unchanged.
#[must_use]
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    if !path.is_absolute() {
        return path.to_path_buf();
    }

    let normalized = normalize_path(path);
    normalized
        .strip_prefix(normalize_path(base))
        .map_or(normalized.clone(), Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_removes_current_dir_segments() {
        assert_eq!(
            normalize_path(Path::new("./src/./a.c")),
            PathBuf::from("src/a.c")
        );
    }

    #[test]
    fn normalize_resolves_parent_segments() {
        assert_eq!(
            normalize_path(Path::new("src/../include/a.h")),
            PathBuf::from("include/a.h")
        );
    }

    #[test]
    fn normalize_keeps_leading_parent_segments() {
        assert_eq!(
            normalize_path(Path::new("../lib/x.c")),
            PathBuf::from("../lib/x.c")
        );
        assert_eq!(
            normalize_path(Path::new("a/../../b")),
            PathBuf::from("../b")
        );
    }

    #[test]
    fn normalize_collapses_separators_and_trailing_slash() {
        assert_eq!(normalize_path(Path::new("src//core/")), PathBuf::from("src/core"));
    }

    #[test]
    fn normalize_dot_is_empty() {
        assert_eq!(normalize_path(Path::new(".")), PathBuf::new());
        assert_eq!(normalize_path(Path::new("a/..")), PathBuf::new());
    }

    #[cfg(unix)]
    #[test]
    fn normalize_parent_of_root_is_root() {
        assert_eq!(normalize_path(Path::new("/../etc")), PathBuf::from("/etc"));
    }

    #[test]
    fn within_exact_match() {
        assert!(path_within(Path::new("src/a.c"), Path::new("src/a.c")));
    }

    #[test]
    fn within_nested_match() {
        assert!(path_within(Path::new("src/core/a.c"), Path::new("src")));
        assert!(path_within(Path::new("src/core/a.c"), Path::new("src/core/")));
    }

    #[test]
    fn within_rejects_partial_segment() {
        assert!(!path_within(Path::new("abc/file.c"), Path::new("ab")));
        assert!(!path_within(Path::new("src2/a.c"), Path::new("src")));
    }

    #[test]
    fn within_normalizes_both_sides() {
        assert!(path_within(Path::new("./src/../lib/a.c"), Path::new("lib/./")));
        assert!(!path_within(Path::new("src/../lib/a.c"), Path::new("src")));
    }

    #[test]
    fn within_dot_prefix_matches_nothing() {
        assert!(!path_within(Path::new("anything/x.c"), Path::new(".")));
        assert!(!path_within(Path::new("x.c"), Path::new("./")));
        assert!(!path_within(Path::new("src/a.c"), Path::new("src/..")));
    }

    #[test]
    fn within_rejects_escaping_path() {
        assert!(!path_within(Path::new("src/../../src/a.c"), Path::new("src")));
    }

    #[cfg(unix)]
    #[test]
    fn relative_to_strips_base() {
        assert_eq!(
            relative_to(Path::new("/repo/src/a.c"), Path::new("/repo")),
            PathBuf::from("src/a.c")
        );
    }

    #[cfg(unix)]
    #[test]
    fn relative_to_keeps_outside_paths() {
        assert_eq!(
            relative_to(Path::new("/other/a.c"), Path::new("/repo")),
            PathBuf::from("/other/a.c")
        );
    }

    #[test]
    fn relative_to_keeps_relative_paths() {
        assert_eq!(
            relative_to(Path::new("src/a.c"), Path::new("/repo")),
            PathBuf::from("src/a.c")
        );
    }
}
