//! Path utilities for validation and normalization
//!
//! All functions are **pure**: given same input, always produce same output
//! with no side effects.

use std::borrow::Cow;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use virgule_router::path::is_canonical;
///
/// assert!(is_canonical("/"));
/// assert!(is_canonical("/main"));
///
/// assert!(!is_canonical(""));
/// assert!(!is_canonical("main")); // Missing leading /
/// assert!(!is_canonical("/main/")); // Trailing /
/// assert!(!is_canonical("/main//view")); // Double //
/// ```
pub fn is_canonical(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when the input is already canonical (zero
/// allocations), `Cow::Owned` otherwise. Repairs trailing slashes, duplicate
/// slashes, and backslashes.
///
/// # Examples
///
/// ```
/// use virgule_router::path::normalize;
///
/// assert_eq!(normalize("/main"), "/main");
/// assert_eq!(normalize("/main/"), "/main");
/// assert_eq!(normalize("main"), "/main");
/// assert_eq!(normalize("/main//view"), "/main/view");
/// assert_eq!(normalize(""), "/");
/// ```
pub fn normalize(path: &str) -> Cow<'_, str> {
    if is_canonical(path) {
        return Cow::Borrowed(path);
    }

    let mut out = String::with_capacity(path.len() + 1);
    for segment in path.split(['/', '\\']).filter(|s| !s.is_empty()) {
        out.push('/');
        out.push_str(segment);
    }

    if out.is_empty() {
        out.push('/');
    }

    Cow::Owned(out)
}
