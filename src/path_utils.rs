/// Normalize path separators to forward slashes.
///
/// Matched paths are reported relative to the target directory with `/`
/// separators so they can be split into subdirectory components the same
/// way on every platform.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Extract the first path segment of a relative path, if the path nests.
///
/// Returns `None` for bare filenames (`logo.png`), for paths that start
/// with a separator, and for empty strings. Handles both `/` and `\`.
///
/// # Examples
///
/// - `"domain-a/logo.png"` → `Some("domain-a")`
/// - `"logo.png"` → `None`
/// - `"/rooted"` → `None`
#[must_use]
pub fn first_segment(path: &str) -> Option<&str> {
    let idx = path.find(['/', '\\'])?;
    if idx == 0 { None } else { Some(&path[..idx]) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_backslashes() {
        assert_eq!(
            normalize_separators("domain-a\\img\\logo.png"),
            "domain-a/img/logo.png"
        );
    }

    #[test]
    fn test_normalize_leaves_forward_slashes() {
        assert_eq!(normalize_separators("a/b/c.png"), "a/b/c.png");
    }

    #[test]
    fn test_first_segment_nested_path() {
        assert_eq!(first_segment("domain-a/logo.png"), Some("domain-a"));
    }

    #[test]
    fn test_first_segment_deeply_nested() {
        assert_eq!(first_segment("domain-a/img/logo.png"), Some("domain-a"));
    }

    #[test]
    fn test_first_segment_backslash_separator() {
        assert_eq!(first_segment("domain-b\\logo.png"), Some("domain-b"));
    }

    #[test]
    fn test_first_segment_bare_filename() {
        assert_eq!(first_segment("logo.png"), None);
    }

    #[test]
    fn test_first_segment_leading_separator() {
        assert_eq!(first_segment("/rooted/logo.png"), None);
    }

    #[test]
    fn test_first_segment_empty_string() {
        assert_eq!(first_segment(""), None);
    }

    #[test]
    fn test_first_segment_whitespace_only() {
        assert_eq!(first_segment("   "), None);
    }
}
