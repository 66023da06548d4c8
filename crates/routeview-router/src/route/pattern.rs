/// Pattern parsing for route segments
///
/// Pure functional parsing of App Router directory names into typed segments.
/// All functions are **pure**: same input → same output, no side effects.

use crate::InterceptLevel;

/// Represents the routing role of one directory segment
///
/// Each variant carries the payload needed downstream: the parameter name
/// for dynamic kinds, the group or slot name, or the interception level plus
/// the intercepted target segment.
///
/// # Examples
///
/// ```
/// use routeview_router::route::pattern::{classify_segment, SegmentKind};
///
/// // Static segment
/// let seg = classify_segment("about");
/// assert!(matches!(seg, SegmentKind::Static(_)));
///
/// // Dynamic parameter
/// let seg = classify_segment("[id]");
/// assert!(matches!(seg, SegmentKind::Dynamic(_)));
///
/// // Catch-all
/// let seg = classify_segment("[...slug]");
/// assert!(matches!(seg, SegmentKind::CatchAll(_)));
///
/// // Optional catch-all
/// let seg = classify_segment("[[...slug]]");
/// assert!(matches!(seg, SegmentKind::OptionalCatchAll(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Optional catch-all segment: [[...slug]]
    OptionalCatchAll(String),
    /// Catch-all segment: [...slug]
    CatchAll(String),
    /// Dynamic segment: [id]
    Dynamic(String),
    /// Intercepting segment: (.)photo, (..)photo, (..)(..)photo, (...)photo
    Intercepting(InterceptLevel, String),
    /// Route group: (marketing)
    RouteGroup(String),
    /// Parallel route slot: @analytics
    Parallel(String),
    /// Static text segment
    Static(String),
}

impl SegmentKind {
    /// Whether this segment binds a runtime value
    pub fn is_dynamic(&self) -> bool {
        matches!(
            self,
            SegmentKind::Dynamic(_) | SegmentKind::CatchAll(_) | SegmentKind::OptionalCatchAll(_)
        )
    }

    /// Parameter name for dynamic kinds
    pub fn param_name(&self) -> Option<&str> {
        match self {
            SegmentKind::Dynamic(name)
            | SegmentKind::CatchAll(name)
            | SegmentKind::OptionalCatchAll(name) => Some(name),
            _ => None,
        }
    }
}

/// Classifies a segment into a pattern kind (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Optional catch-all**: `[[...name]]`
/// 2. **Catch-all**: `[...name]`
/// 3. **Dynamic**: `[name]`
/// 4. **Intercepting**: `(.)name`, `(..)name`, `(..)(..)name`, `(...)name`
/// 5. **Route group**: `(name)`
/// 6. **Parallel**: `@name`
/// 7. **Static**: Any other text
///
/// Intercepting markers are checked before route groups: `(..)` on its own
/// is an interception marker, never a group named `..`.
pub fn classify_segment(segment: &str) -> SegmentKind {
    if let Some(inner) = segment
        .strip_prefix("[[")
        .and_then(|s| s.strip_suffix("]]"))
    {
        if let Some(name) = inner.strip_prefix("...").filter(|n| is_param_name(n)) {
            return SegmentKind::OptionalCatchAll(name.to_string());
        }
    }

    if let Some(inner) = segment.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        if let Some(name) = inner.strip_prefix("...") {
            if is_param_name(name) {
                return SegmentKind::CatchAll(name.to_string());
            }
        } else if is_param_name(inner) && !inner.contains('.') {
            return SegmentKind::Dynamic(inner.to_string());
        }
    }

    if let Some((level, target)) = InterceptLevel::split_segment(segment) {
        return SegmentKind::Intercepting(level, target.to_string());
    }

    if let Some(name) = segment
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .filter(|n| !n.is_empty())
    {
        return SegmentKind::RouteGroup(name.to_string());
    }

    match segment.strip_prefix('@').filter(|n| !n.is_empty()) {
        Some(slot) => SegmentKind::Parallel(slot.to_string()),
        None => SegmentKind::Static(segment.to_string()),
    }
}

fn is_param_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['[', ']'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_static() {
        assert_eq!(classify_segment("about"), SegmentKind::Static("about".to_string()));
    }

    #[test]
    fn test_classify_dynamic() {
        assert_eq!(classify_segment("[id]"), SegmentKind::Dynamic("id".to_string()));
    }

    #[test]
    fn test_classify_catch_all_never_dynamic() {
        assert_eq!(
            classify_segment("[...slug]"),
            SegmentKind::CatchAll("slug".to_string())
        );
    }

    #[test]
    fn test_classify_optional_catch_all_never_catch_all() {
        assert_eq!(
            classify_segment("[[...slug]]"),
            SegmentKind::OptionalCatchAll("slug".to_string())
        );
    }

    #[test]
    fn test_classify_malformed_brackets_are_static() {
        assert_eq!(classify_segment("[]"), SegmentKind::Static("[]".to_string()));
        assert_eq!(classify_segment("[...]"), SegmentKind::Static("[...]".to_string()));
        assert_eq!(classify_segment("[a.b]"), SegmentKind::Static("[a.b]".to_string()));
    }

    #[test]
    fn test_classify_route_group() {
        assert_eq!(
            classify_segment("(marketing)"),
            SegmentKind::RouteGroup("marketing".to_string())
        );
    }

    #[test]
    fn test_classify_parallel() {
        assert_eq!(
            classify_segment("@analytics"),
            SegmentKind::Parallel("analytics".to_string())
        );
        assert_eq!(classify_segment("@"), SegmentKind::Static("@".to_string()));
    }

    #[test]
    fn test_classify_intercepting_before_group() {
        assert_eq!(
            classify_segment("(..)photo"),
            SegmentKind::Intercepting(InterceptLevel::OneLevelUp, "photo".to_string())
        );
        // Bare marker would also satisfy the group syntax
        assert_eq!(
            classify_segment("(..)"),
            SegmentKind::Intercepting(InterceptLevel::OneLevelUp, String::new())
        );
        assert_eq!(
            classify_segment("(.)"),
            SegmentKind::Intercepting(InterceptLevel::SameLevel, String::new())
        );
    }

    #[test]
    fn test_is_dynamic() {
        assert!(classify_segment("[id]").is_dynamic());
        assert!(classify_segment("[...a]").is_dynamic());
        assert!(classify_segment("[[...a]]").is_dynamic());
        assert!(!classify_segment("(group)").is_dynamic());
        assert!(!classify_segment("@slot").is_dynamic());
    }
}
