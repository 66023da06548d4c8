/// Level of route interception for intercepting routes
///
/// Intercepting routes overlay another route when navigated to from inside
/// the app (modals, photo viewers) instead of on a fresh load.
///
/// # Examples
///
/// ```
/// use routeview_router::InterceptLevel;
///
/// // app/feed/(.)photo/[id]/page.tsx → SameLevel
/// assert_eq!(InterceptLevel::from_marker("(.)"), Some(InterceptLevel::SameLevel));
///
/// // app/feed/(..)photo/[id]/page.tsx → OneLevelUp
/// assert_eq!(InterceptLevel::from_marker("(..)"), Some(InterceptLevel::OneLevelUp));
///
/// // app/feed/(...)photo/[id]/page.tsx → FromRoot
/// assert_eq!(InterceptLevel::from_marker("(...)"), Some(InterceptLevel::FromRoot));
/// ```
///
/// # Interception Patterns
///
/// - `(.)` → **SameLevel**: Intercept at same directory level
/// - `(..)` → **OneLevelUp**: Intercept one directory level up
/// - `(..)(..)` → **TwoLevelsUp**: Intercept two directory levels up
/// - `(...)` → **FromRoot**: Intercept from the app root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterceptLevel {
    /// (.) - Intercept segments at the same level
    SameLevel,
    /// (..) - Intercept segments one level up
    OneLevelUp,
    /// (..)(..) - Intercept segments two levels up
    TwoLevelsUp,
    /// (...) - Intercept segments from the root
    FromRoot,
}

impl InterceptLevel {
    /// Markers ordered longest first so `(..)(..)` wins over `(..)`
    const MARKERS: [(&'static str, InterceptLevel); 4] = [
        ("(..)(..)", InterceptLevel::TwoLevelsUp),
        ("(...)", InterceptLevel::FromRoot),
        ("(..)", InterceptLevel::OneLevelUp),
        ("(.)", InterceptLevel::SameLevel),
    ];

    /// Parses an exact marker string
    pub fn from_marker(marker: &str) -> Option<Self> {
        Self::MARKERS
            .iter()
            .find(|(m, _)| *m == marker)
            .map(|(_, level)| *level)
    }

    /// Splits a segment like `(..)photo` into its level and target (`photo`)
    pub fn split_segment(segment: &str) -> Option<(Self, &str)> {
        Self::MARKERS.iter().find_map(|(marker, level)| {
            segment
                .strip_prefix(marker)
                .map(|target| (*level, target))
        })
    }

    /// The marker text for this level
    pub fn marker(&self) -> &'static str {
        match self {
            InterceptLevel::SameLevel => "(.)",
            InterceptLevel::OneLevelUp => "(..)",
            InterceptLevel::TwoLevelsUp => "(..)(..)",
            InterceptLevel::FromRoot => "(...)",
        }
    }
}
