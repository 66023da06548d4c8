/// URL matching against a route forest
///
/// Walks the forest in pre-order and tests every page node's matchable
/// segments against the normalized input. The first match wins unless the
/// matcher is configured to rank by specificity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::path::url_segments;
use crate::route::{calculate_priority, generate_url, MatchSegment};
use crate::tree::{RouteForest, RouteNode};

/// Result of matching a URL against the forest
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    /// The matched page node
    pub node: &'a RouteNode,
    /// Extracted parameters; catch-alls join their segments with `/`
    pub params: BTreeMap<String, String>,
}

impl RouteMatch<'_> {
    /// Concrete path of this match, rebuilt from the route and its params
    pub fn path(&self) -> Option<String> {
        generate_url(&self.node.match_segments, &self.params)
    }
}

/// How to pick among several page routes that all match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    /// First match in pre-order traversal wins
    #[default]
    TraversalOrder,
    /// Static beats dynamic beats catch-all beats optional catch-all;
    /// equal scores fall back to traversal order
    Specificity,
}

/// Configurable URL matcher
///
/// # Examples
///
/// ```
/// use routeview_router::{Matcher, MatchStrategy};
///
/// let matcher = Matcher::new()
///     .with_case_insensitive(true)
///     .with_strategy(MatchStrategy::Specificity);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    case_insensitive: bool,
    strategy: MatchStrategy,
}

impl Matcher {
    /// Case-sensitive matcher with traversal-order tie breaking
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures case sensitivity for static segments
    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Matches a free-form URL or path against the forest's page nodes
    pub fn match_url<'a>(&self, url: &str, forest: &'a RouteForest) -> Option<RouteMatch<'a>> {
        let input = url_segments(url);

        let mut candidates = forest.pages().filter_map(|node| {
            self.match_segments(&node.match_segments, &input)
                .map(|params| RouteMatch { node, params })
        });

        match self.strategy {
            MatchStrategy::TraversalOrder => candidates.next(),
            // min_by_key keeps the first of equal keys, so ties stay in traversal order
            MatchStrategy::Specificity => {
                candidates.min_by_key(|m| calculate_priority(&m.node.match_segments))
            }
        }
    }

    /// Matches route segments against already-split input segments
    ///
    /// # Examples
    ///
    /// ```
    /// use routeview_router::{build_match_segments, Matcher};
    ///
    /// let route = build_match_segments(&["docs", "[...slug]"]);
    /// let input = vec!["docs".to_string(), "a".to_string(), "b".to_string()];
    ///
    /// let params = Matcher::new().match_segments(&route, &input).unwrap();
    /// assert_eq!(params.get("slug").map(String::as_str), Some("a/b"));
    /// ```
    pub fn match_segments(
        &self,
        route: &[MatchSegment],
        input: &[String],
    ) -> Option<BTreeMap<String, String>> {
        // Tail-recursive helper walking route and input in lockstep
        fn step(
            route: &[MatchSegment],
            input: &[String],
            mut params: BTreeMap<String, String>,
            case_insensitive: bool,
        ) -> Option<BTreeMap<String, String>> {
            let Some((segment, rest)) = route.split_first() else {
                // Route exhausted: the input must be too
                return input.is_empty().then_some(params);
            };

            match segment {
                MatchSegment::CatchAll(name) => {
                    if input.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), input.join("/"));
                    Some(params)
                }
                MatchSegment::OptionalCatchAll(name) => {
                    params.insert(name.clone(), input.join("/"));
                    Some(params)
                }
                MatchSegment::Dynamic(name) => {
                    let (value, remaining) = input.split_first()?;
                    params.insert(name.clone(), value.clone());
                    step(rest, remaining, params, case_insensitive)
                }
                MatchSegment::Static(text) => {
                    let (value, remaining) = input.split_first()?;
                    let matches = if case_insensitive {
                        text.eq_ignore_ascii_case(value)
                    } else {
                        text == value
                    };
                    if !matches {
                        return None;
                    }
                    step(rest, remaining, params, case_insensitive)
                }
            }
        }

        step(route, input, BTreeMap::new(), self.case_insensitive)
    }
}

/// Matches a URL with the default matcher (case-sensitive, first match wins)
///
/// # Examples
///
/// ```
/// use routeview_router::{build_hierarchy, match_url, DiscoveredFile, SortingType};
/// use std::path::Path;
///
/// let files = vec![
///     DiscoveredFile::from_relative(Path::new("/app"), Path::new("blog/[slug]/page.tsx")).unwrap(),
/// ];
/// let forest = build_hierarchy(files, SortingType::Natural);
///
/// let m = match_url("/blog/my-post", &forest).unwrap();
/// assert_eq!(m.params.get("slug").map(String::as_str), Some("my-post"));
/// assert!(match_url("/blog", &forest).is_none());
/// ```
pub fn match_url<'a>(url: &str, forest: &'a RouteForest) -> Option<RouteMatch<'a>> {
    Matcher::new().match_url(url, forest)
}
