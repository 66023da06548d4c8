/// Route path building and specificity scoring
///
/// Pure functional builders that turn directory segments into the two route
/// projections: the displayed path (`/blog/:slug`) and the matchable segment
/// list used by the URL matcher. The two diverge for parallel slots, which are
/// shown but never consume a URL segment.

use std::collections::BTreeMap;

use super::pattern::{classify_segment, SegmentKind};

/// One positional element of a matchable route
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MatchSegment {
    /// Requires exact equality with the input segment
    Static(String),
    /// Consumes exactly one input segment
    Dynamic(String),
    /// Consumes one or more trailing input segments
    CatchAll(String),
    /// Consumes zero or more trailing input segments
    OptionalCatchAll(String),
}

/// Internal state accumulator for fold-based path building
#[derive(Default)]
struct DisplayState {
    pattern: String,
}

impl DisplayState {
    fn with_segment(mut self, text: &str) -> Self {
        self.pattern.push('/');
        self.pattern.push_str(text);
        self
    }

    fn with_param(mut self, sigil: char, name: &str) -> Self {
        self.pattern.push('/');
        self.pattern.push(sigil);
        self.pattern.push_str(name);
        self
    }

    fn finalize(self) -> String {
        if self.pattern.is_empty() {
            "/".to_string()
        } else {
            self.pattern
        }
    }
}

fn process_display_segment(state: DisplayState, segment: &str) -> DisplayState {
    match classify_segment(segment) {
        SegmentKind::RouteGroup(_) => state,
        SegmentKind::Parallel(slot) => state.with_segment(&slot),
        SegmentKind::Dynamic(name) => state.with_param(':', &name),
        SegmentKind::CatchAll(name) | SegmentKind::OptionalCatchAll(name) => {
            state.with_param('*', &name)
        }
        SegmentKind::Intercepting(_, target) if target.is_empty() => state,
        SegmentKind::Intercepting(_, target) => state.with_segment(&target),
        SegmentKind::Static(text) => state.with_segment(&text),
    }
}

/// Builds the displayed route path for a list of directory segments
///
/// - Route groups `(name)` are elided
/// - Parallel slots `@name` keep their name without the sigil
/// - `[name]` renders as `:name`
/// - `[...name]` and `[[...name]]` render as `*name`
/// - Interception markers are stripped, the intercepted target is kept
///
/// # Examples
///
/// ```
/// use routeview_router::build_route_path;
///
/// assert_eq!(build_route_path::<&str>(&[]), "/");
/// assert_eq!(build_route_path(&["blog", "[slug]"]), "/blog/:slug");
/// assert_eq!(build_route_path(&["docs", "[...slug]"]), "/docs/*slug");
/// assert_eq!(build_route_path(&["(marketing)", "products"]), "/products");
/// ```
pub fn build_route_path<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.is_empty())
        .fold(DisplayState::default(), process_display_segment)
        .finalize()
}

/// Builds the matchable projection of a list of directory segments
///
/// Route groups and parallel slots impose no positional constraint and are
/// dropped. Intercepting segments contribute their target as a static segment.
///
/// # Examples
///
/// ```
/// use routeview_router::{build_match_segments, MatchSegment};
///
/// let segs = build_match_segments(&["(shop)", "dashboard", "@team", "[id]"]);
/// assert_eq!(
///     segs,
///     vec![
///         MatchSegment::Static("dashboard".to_string()),
///         MatchSegment::Dynamic("id".to_string()),
///     ]
/// );
/// ```
pub fn build_match_segments<S: AsRef<str>>(segments: &[S]) -> Vec<MatchSegment> {
    segments
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.is_empty())
        .filter_map(|segment| match classify_segment(segment) {
            SegmentKind::RouteGroup(_) | SegmentKind::Parallel(_) => None,
            SegmentKind::Intercepting(_, target) if target.is_empty() => None,
            SegmentKind::Intercepting(_, target) => Some(MatchSegment::Static(target)),
            SegmentKind::Dynamic(name) => Some(MatchSegment::Dynamic(name)),
            SegmentKind::CatchAll(name) => Some(MatchSegment::CatchAll(name)),
            SegmentKind::OptionalCatchAll(name) => Some(MatchSegment::OptionalCatchAll(name)),
            SegmentKind::Static(text) => Some(MatchSegment::Static(text)),
        })
        .collect()
}

/// Generates a concrete URL path by substituting parameters into a route
///
/// Returns `None` if a required parameter is missing. An optional catch-all
/// with no value (or an empty value) contributes nothing.
///
/// # Examples
///
/// ```
/// use routeview_router::{build_match_segments, generate_url};
/// use std::collections::BTreeMap;
///
/// let segs = build_match_segments(&["users", "[id]"]);
/// let mut params = BTreeMap::new();
/// params.insert("id".to_string(), "123".to_string());
///
/// assert_eq!(generate_url(&segs, &params), Some("/users/123".to_string()));
/// ```
pub fn generate_url(
    segments: &[MatchSegment],
    params: &BTreeMap<String, String>,
) -> Option<String> {
    let parts: Option<Vec<String>> = segments
        .iter()
        .map(|segment| match segment {
            MatchSegment::Static(text) => Some(text.clone()),
            MatchSegment::Dynamic(name) | MatchSegment::CatchAll(name) => params
                .get(name)
                .filter(|v| !v.is_empty())
                .cloned(),
            MatchSegment::OptionalCatchAll(name) => {
                Some(params.get(name).cloned().unwrap_or_default())
            }
        })
        .collect();

    parts.map(|segs| {
        let filtered: Vec<String> = segs.into_iter().filter(|s| !s.is_empty()).collect();

        if filtered.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", filtered.join("/"))
        }
    })
}

/// Calculates match specificity for a route (pure function)
///
/// Returns one rank per segment, compared left to right. Lower sorts as
/// more specific, so the first differing segment decides and a route that
/// ends earlier wins over one that continues.
///
/// # Segment Ranks
///
/// 1. **Static** → 0
/// 2. **Dynamic** → 1
/// 3. **Required catch-all** → 2
/// 4. **Optional catch-all** → 3
///
/// # Examples
///
/// ```
/// use routeview_router::{build_match_segments, calculate_priority};
///
/// assert_eq!(calculate_priority(&build_match_segments(&["users", "[id]"])), vec![0, 1]);
///
/// // A static prefix outranks a catch-all in the same position
/// let docs = calculate_priority(&build_match_segments(&["docs", "[...slug]"]));
/// let all = calculate_priority(&build_match_segments(&["[...all]"]));
/// assert!(docs < all);
/// ```
pub fn calculate_priority(segments: &[MatchSegment]) -> Vec<u8> {
    segments
        .iter()
        .map(|segment| match segment {
            MatchSegment::Static(_) => 0,
            MatchSegment::Dynamic(_) => 1,
            MatchSegment::CatchAll(_) => 2,
            MatchSegment::OptionalCatchAll(_) => 3,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_route_path_root() {
        assert_eq!(build_route_path::<&str>(&[]), "/");
    }

    #[test]
    fn test_build_route_path_dynamic() {
        assert_eq!(build_route_path(&["blog", "[slug]"]), "/blog/:slug");
    }

    #[test]
    fn test_build_route_path_catch_all() {
        assert_eq!(build_route_path(&["docs", "[...slug]"]), "/docs/*slug");
        assert_eq!(build_route_path(&["docs", "[[...slug]]"]), "/docs/*slug");
    }

    #[test]
    fn test_build_route_path_elides_groups() {
        assert_eq!(build_route_path(&["(marketing)", "products"]), "/products");
        assert_eq!(build_route_path(&["(marketing)"]), "/");
    }

    #[test]
    fn test_build_route_path_keeps_parallel_slot_name() {
        assert_eq!(
            build_route_path(&["dashboard", "@analytics"]),
            "/dashboard/analytics"
        );
    }

    #[test]
    fn test_build_route_path_strips_intercept_marker() {
        assert_eq!(
            build_route_path(&["feed", "(..)photo", "[id]"]),
            "/feed/photo/:id"
        );
    }

    #[test]
    fn test_match_segments_drop_parallel_slots() {
        assert_eq!(
            build_match_segments(&["dashboard", "@analytics"]),
            vec![MatchSegment::Static("dashboard".to_string())]
        );
    }

    #[test]
    fn test_generate_url_catch_all() {
        let segs = build_match_segments(&["docs", "[...slug]"]);
        let mut params = BTreeMap::new();
        assert_eq!(generate_url(&segs, &params), None);

        params.insert("slug".to_string(), "a/b".to_string());
        assert_eq!(generate_url(&segs, &params), Some("/docs/a/b".to_string()));
    }

    #[test]
    fn test_generate_url_optional_catch_all_empty() {
        let segs = build_match_segments(&["docs", "[[...slug]]"]);
        assert_eq!(
            generate_url(&segs, &BTreeMap::new()),
            Some("/docs".to_string())
        );
    }

    #[test]
    fn test_calculate_priority_ordering() {
        let stat = calculate_priority(&build_match_segments(&["blog", "first"]));
        let dynamic = calculate_priority(&build_match_segments(&["blog", "[slug]"]));
        let catch_all = calculate_priority(&build_match_segments(&["blog", "[...slug]"]));
        let optional = calculate_priority(&build_match_segments(&["blog", "[[...slug]]"]));

        assert!(stat < dynamic);
        assert!(dynamic < catch_all);
        assert!(catch_all < optional);
    }

    #[test]
    fn test_calculate_priority_is_positional() {
        let shallow = calculate_priority(&build_match_segments(&["[...all]"]));
        let deep = calculate_priority(&build_match_segments(&["docs", "[...slug]"]));
        let nested = calculate_priority(&build_match_segments(&["docs", "[id]", "edit"]));

        assert!(deep < shallow);
        assert!(nested < deep);
        // Groups and slots carry no rank
        assert_eq!(
            calculate_priority(&build_match_segments(&["(shop)", "@modal", "cart"])),
            vec![0]
        );
    }
}
