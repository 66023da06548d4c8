//! # Routeview Router
//!
//! File-system route discovery for App Router projects:
//! - Static routes (`/about`)
//! - Dynamic segments (`/blog/[slug]` → `/blog/:slug`)
//! - Catch-all and optional catch-all segments (`[...slug]`, `[[...slug]]`)
//! - Route groups (`(marketing)`) that never reach the URL
//! - Parallel slots (`@team`) and intercepting routes (`(..)photo`)
//! - Nested layouts, templates, loading and error boundaries
//!
//! ## Pipeline
//!
//! - **Scan**: walk the routing directory and classify each file by name
//! - **Build**: derive a display path per file, then link every node to the
//!   nearest covering layout
//! - **Match**: resolve a URL to the page that would render it, extracting
//!   parameters along the way
//!
//! The [`Engine`] runs the pipeline on demand and publishes each result as an
//! immutable [`Snapshot`]. A failed rebuild keeps the previous snapshot.
//!
//! ## Path Normalization
//!
//! URLs are matched leniently:
//! - Scheme and host are dropped: `https://site.dev/about` → `/about`
//! - Query and fragment are dropped: `/about?x=1#top` → `/about`
//! - Repeated and trailing slashes are ignored
//! - Percent-encoded segments are decoded before comparison
//!
//! ## Example
//!
//! ```
//! use routeview_router::{build_hierarchy, match_url, DiscoveredFile, SortingType};
//! use std::path::Path;
//!
//! let root = Path::new("/project/app");
//! let files = ["layout.tsx", "page.tsx", "blog/[slug]/page.tsx", "docs/[[...path]]/page.tsx"]
//!     .iter()
//!     .filter_map(|p| DiscoveredFile::from_relative(root, Path::new(p)))
//!     .collect();
//!
//! let forest = build_hierarchy(files, SortingType::Natural);
//!
//! let m = match_url("/blog/hello-world", &forest).unwrap();
//! assert_eq!(m.node.display_path, "/blog/:slug");
//! assert_eq!(m.params.get("slug"), Some(&"hello-world".to_string()));
//!
//! let docs = match_url("/docs", &forest).unwrap();
//! assert_eq!(docs.params.get("path"), Some(&String::new()));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod classify;
mod config;
mod engine;
mod intercept;
mod matcher;
pub mod path;
mod project;
pub mod route;
mod scan;
pub mod tree;

// ============================================================================
// Re-exports
// ============================================================================

pub use classify::{classify_file, FileRole};
pub use config::{Config, ViewType, CONFIG_FILE_NAME};
pub use engine::{Engine, Snapshot};
pub use intercept::InterceptLevel;
pub use matcher::{match_url, MatchStrategy, Matcher, RouteMatch};
pub use path::{normalize_path, normalize_url, url_segments, SegmentHierarchy};
pub use project::{find_routing_root, is_nextjs_project, APP_DIR_CANDIDATES};
pub use route::{
    build_match_segments, build_route_path, calculate_priority, classify_segment, generate_url,
    MatchSegment, SegmentKind,
};
pub use scan::{scan, DiscoveredFile, ScanOptions, SKIPPED_DIRS};
pub use tree::{build_hierarchy, natural_cmp, RouteForest, RouteId, RouteNode, SortingType};
