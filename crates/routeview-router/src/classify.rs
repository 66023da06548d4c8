/// File role classification for App Router special files
///
/// A fixed table of (role, filename regex) pairs compiled once. Patterns are
/// anchored and use distinct stems, so at most one role matches any filename.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The role a file plays in the routing directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileRole {
    Page,
    Layout,
    Template,
    Loading,
    Error,
    NotFound,
    ApiRoute,
    Default,
    GlobalError,
}

impl FileRole {
    pub const ALL: [FileRole; 9] = [
        FileRole::Page,
        FileRole::Layout,
        FileRole::Template,
        FileRole::Loading,
        FileRole::Error,
        FileRole::NotFound,
        FileRole::ApiRoute,
        FileRole::Default,
        FileRole::GlobalError,
    ];

    /// Conventional file stem (`page`, `not-found`, `route`, ...)
    pub fn stem(&self) -> &'static str {
        match self {
            FileRole::Page => "page",
            FileRole::Layout => "layout",
            FileRole::Template => "template",
            FileRole::Loading => "loading",
            FileRole::Error => "error",
            FileRole::NotFound => "not-found",
            FileRole::ApiRoute => "route",
            FileRole::Default => "default",
            FileRole::GlobalError => "global-error",
        }
    }

    /// Whether nodes of this role may own child nodes in the hierarchy
    ///
    /// Only layouts nest; templates stay leaves like their sibling pages.
    pub fn permits_children(&self) -> bool {
        matches!(self, FileRole::Layout)
    }
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

static ROLE_PATTERNS: Lazy<Vec<(FileRole, Regex)>> = Lazy::new(|| {
    FileRole::ALL
        .iter()
        .map(|role| {
            let extensions = match role {
                FileRole::Page => "tsx|ts|jsx|js|mdx",
                // Route handlers never render JSX
                FileRole::ApiRoute => "ts|js",
                _ => "tsx|ts|jsx|js",
            };
            let pattern = format!(r"^{}\.({})$", regex::escape(role.stem()), extensions);
            let regex = Regex::new(&pattern).expect("role pattern is a valid regex");
            (*role, regex)
        })
        .collect()
});

/// Classifies a filename (no directory part) into its routing role
///
/// # Examples
///
/// ```
/// use routeview_router::{classify_file, FileRole};
///
/// assert_eq!(classify_file("page.tsx"), Some(FileRole::Page));
/// assert_eq!(classify_file("route.js"), Some(FileRole::ApiRoute));
/// assert_eq!(classify_file("random.tsx"), None);
/// ```
pub fn classify_file(filename: &str) -> Option<FileRole> {
    ROLE_PATTERNS
        .iter()
        .find(|(_, regex)| regex.is_match(filename))
        .map(|(role, _)| *role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("page.tsx", Some(FileRole::Page))]
    #[case("page.js", Some(FileRole::Page))]
    #[case("page.mdx", Some(FileRole::Page))]
    #[case("layout.jsx", Some(FileRole::Layout))]
    #[case("template.ts", Some(FileRole::Template))]
    #[case("loading.tsx", Some(FileRole::Loading))]
    #[case("error.tsx", Some(FileRole::Error))]
    #[case("not-found.tsx", Some(FileRole::NotFound))]
    #[case("route.js", Some(FileRole::ApiRoute))]
    #[case("route.ts", Some(FileRole::ApiRoute))]
    #[case("default.tsx", Some(FileRole::Default))]
    #[case("global-error.tsx", Some(FileRole::GlobalError))]
    #[case("random.tsx", None)]
    #[case("route.tsx", None)]
    #[case("layout.mdx", None)]
    #[case("page.tsx.bak", None)]
    #[case("mypage.tsx", None)]
    #[case("page.css", None)]
    #[case("Page.tsx", None)]
    fn test_classify_file(#[case] filename: &str, #[case] expected: Option<FileRole>) {
        assert_eq!(classify_file(filename), expected);
    }

    #[test]
    fn test_patterns_are_disjoint() {
        for role in FileRole::ALL {
            let filename = format!("{}.tsx", role.stem());
            let matching = ROLE_PATTERNS
                .iter()
                .filter(|(_, regex)| regex.is_match(&filename))
                .count();
            assert!(matching <= 1, "{} matched {} roles", filename, matching);
        }
    }

    #[test]
    fn test_permits_children() {
        assert!(FileRole::Layout.permits_children());
        assert!(!FileRole::Template.permits_children());
        assert!(!FileRole::Page.permits_children());
        assert!(!FileRole::ApiRoute.permits_children());
    }
}
