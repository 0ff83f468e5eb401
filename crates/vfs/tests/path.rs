use vfs::{is_directory, normalize_path};

#[test]
fn test_normalize_path_absolute_unchanged() {
    assert_eq!(normalize_path("/foo/bar"), "/foo/bar");
    assert_eq!(normalize_path("/"), "/");
}

#[test]
fn test_normalize_path_prepends_separator() {
    assert_eq!(normalize_path("foo"), "/foo");
    assert_eq!(normalize_path("foo/bar"), "/foo/bar");
}

#[test]
fn test_normalize_path_permissive() {
    assert_eq!(normalize_path("//foo"), "//foo");
    assert_eq!(normalize_path("/foo/"), "/foo/");
    assert_eq!(normalize_path(""), "/");
}

#[test]
fn test_normalize_path_no_dot_resolution() {
    assert_eq!(normalize_path("/a/./b"), "/a/./b");
    assert_eq!(normalize_path("/a/../b"), "/a/../b");
    assert_eq!(normalize_path("a/.."), "/a/..");
}

#[test]
fn test_is_directory_trailing_separator() {
    assert!(is_directory("/a/"));
    assert!(is_directory("d/"));
    assert!(!is_directory("/a"));
    assert!(!is_directory("d"));
}

#[test]
fn test_is_directory_normalizes_first() {
    assert!(is_directory(""));
    assert!(is_directory("/"));
}
