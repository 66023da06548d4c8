/// Route module for App Router segment grammar
///
/// Contains pure functional components for segment classification and
/// route path building:
/// - `pattern`: directory name → `SegmentKind`
/// - `parser`: segment list → display path, matchable segments, specificity

pub mod parser;
pub mod pattern;

// Re-export commonly used types
pub use parser::{
    build_match_segments, build_route_path, calculate_priority, generate_url, MatchSegment,
};
pub use pattern::{classify_segment, SegmentKind};
