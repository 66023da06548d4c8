/// Path utilities for validation and normalization
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

use url::Url;

pub mod hierarchy;
pub use hierarchy::SegmentHierarchy;

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
/// use routeview_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/about"));
/// assert!(is_valid_path("/users/123"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("about")); // Missing leading /
/// assert!(!is_valid_path("/about/")); // Trailing /
/// assert!(!is_valid_path("/about//page")); // Double //
/// assert!(!is_valid_path("/about\\page")); // Backslash
/// ```
pub fn is_valid_path(path: &str) -> bool {
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
/// Returns `Cow::Borrowed` when input is already valid (zero allocations).
///
/// - Trailing slashes: `/path/` → `/path`
/// - Double slashes: `/path//to` → `/path/to`
/// - Backslashes: `\path\to` → `/path/to`
/// - Missing leading slash: `path/to` → `/path/to`
///
/// # Examples
///
/// ```
/// use routeview_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/about");
/// assert!(matches!(path, Cow::Borrowed("/about")));
///
/// assert_eq!(normalize_path("/about/"), "/about");
/// assert_eq!(normalize_path("\\users\\123"), "/users/123");
/// assert_eq!(normalize_path("/path//to///page"), "/path/to/page");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Reduces a free-form URL or bare path to a canonical route path
///
/// Absolute URLs (with a host) keep only their path. Anything that does not
/// parse as such is treated as a bare path. Query strings and fragments are
/// dropped before normalization.
///
/// # Examples
///
/// ```
/// use routeview_router::path::normalize_url;
///
/// assert_eq!(normalize_url("http://localhost:3000/blog/post?x=1#top"), "/blog/post");
/// assert_eq!(normalize_url("/blog//post/"), "/blog/post");
/// assert_eq!(normalize_url("blog/post?draft"), "/blog/post");
/// assert_eq!(normalize_url("https://example.com"), "/");
/// ```
pub fn normalize_url(input: &str) -> String {
    let input = input.trim();

    let raw_path = match Url::parse(input) {
        Ok(url) if url.has_host() => url.path().to_string(),
        _ => strip_query_and_fragment(input).to_string(),
    };

    normalize_path(&raw_path).into_owned()
}

/// Splits a free-form URL or path into percent-decoded segments
///
/// The root path yields an empty list. Segments that do not decode to valid
/// UTF-8 are kept verbatim.
///
/// # Examples
///
/// ```
/// use routeview_router::path::url_segments;
///
/// assert!(url_segments("/").is_empty());
/// assert_eq!(url_segments("/blog/hello%20world"), vec!["blog", "hello world"]);
/// ```
pub fn url_segments(input: &str) -> Vec<String> {
    normalize_url(input)
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|segment| match urlencoding::decode(segment) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => segment.to_string(),
        })
        .collect()
}

fn strip_query_and_fragment(input: &str) -> &str {
    input
        .find(['?', '#'])
        .map_or(input, |idx| &input[..idx])
}
