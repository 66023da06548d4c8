/// Route hierarchy assembly
///
/// Turns the flat list of discovered files into a forest of route nodes:
/// every file becomes one node, linked to the nearest layout that covers its
/// directory. Construction happens in two phases: all nodes are registered in
/// an arena first, then parent edges are resolved by key lookup, and only then
/// is the owned tree materialized.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

use crate::classify::FileRole;
use crate::path::SegmentHierarchy;
use crate::route::{build_match_segments, classify_segment, MatchSegment, SegmentKind};
use crate::scan::DiscoveredFile;
use crate::InterceptLevel;

pub mod sort;
pub use sort::{natural_cmp, SortingType};

/// Stable node key derived from (segments, role), e.g. `blog/[slug]#page`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RouteId(String);

impl RouteId {
    pub fn new<S: AsRef<str>>(segments: &[S], role: FileRole) -> Self {
        let joined = segments
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("/");
        RouteId(format!("{}#{}", joined, role))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One node of the route forest, backed by exactly one discovered file
#[derive(Debug, Clone, Serialize)]
pub struct RouteNode {
    pub id: RouteId,
    pub display_path: String,
    pub is_dynamic: bool,
    pub is_page: bool,
    pub parent_id: Option<RouteId>,
    pub children: Vec<RouteNode>,
    pub file: DiscoveredFile,
    /// Matchable projection (groups and parallel slots removed)
    #[serde(skip)]
    pub match_segments: Vec<MatchSegment>,
    /// Innermost `@slot` this node lives under
    pub parallel_slot: Option<String>,
    #[serde(skip)]
    pub intercept: Option<InterceptLevel>,
}

impl RouteNode {
    fn from_file(file: DiscoveredFile) -> Self {
        let kinds: Vec<SegmentKind> = file.segments.iter().map(|s| classify_segment(s)).collect();

        let is_dynamic = kinds.iter().any(SegmentKind::is_dynamic);
        let parallel_slot = kinds.iter().rev().find_map(|kind| match kind {
            SegmentKind::Parallel(slot) => Some(slot.clone()),
            _ => None,
        });
        let intercept = kinds.iter().find_map(|kind| match kind {
            SegmentKind::Intercepting(level, _) => Some(*level),
            _ => None,
        });

        Self {
            id: RouteId::new(&file.segments, file.role),
            display_path: file.route_path.clone(),
            is_dynamic,
            is_page: file.role == FileRole::Page,
            parent_id: None,
            children: Vec::new(),
            match_segments: build_match_segments(&file.segments),
            parallel_slot,
            intercept,
            file,
        }
    }

    pub fn role(&self) -> FileRole {
        self.file.role
    }

    pub fn segments(&self) -> &[String] {
        &self.file.segments
    }

    pub fn depth(&self) -> usize {
        self.file.segments.len()
    }

    /// Whether any ancestor directory is a route group
    pub fn in_route_group(&self) -> bool {
        self.file
            .segments
            .iter()
            .any(|s| matches!(classify_segment(s), SegmentKind::RouteGroup(_)))
    }

    fn sort_key_cmp(&self, other: &Self, sorting: SortingType) -> std::cmp::Ordering {
        sorting
            .compare(&self.display_path, &other.display_path)
            .then_with(|| self.role().cmp(&other.role()))
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// The set of top-level route trees produced by one rebuild
#[derive(Debug, Clone, Default, Serialize)]
pub struct RouteForest {
    roots: Vec<RouteNode>,
    #[serde(skip)]
    locations: HashMap<RouteId, Vec<usize>>,
    #[serde(skip)]
    sorting: SortingType,
}

impl RouteForest {
    pub fn roots(&self) -> &[RouteNode] {
        &self.roots
    }

    pub fn sorting(&self) -> SortingType {
        self.sorting
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Looks up a node by id (child-index path from the roots)
    pub fn get(&self, id: &RouteId) -> Option<&RouteNode> {
        let path = self.locations.get(id)?;
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.roots.get(*first)?, |node, idx| node.children.get(*idx))
    }

    /// Pre-order traversal over every node
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            stack: self.roots.iter().rev().collect(),
        }
    }

    /// Only nodes backed by a page file
    pub fn pages(&self) -> impl Iterator<Item = &RouteNode> {
        self.iter().filter(|node| node.is_page)
    }

    /// Every node in a linear order: shallower first, then by sorting type
    pub fn flatten(&self) -> Vec<&RouteNode> {
        let mut nodes: Vec<&RouteNode> = self.iter().collect();
        nodes.sort_by(|a, b| {
            a.depth()
                .cmp(&b.depth())
                .then_with(|| a.sort_key_cmp(b, self.sorting))
        });
        nodes
    }
}

/// Pre-order iterator over a forest
pub struct PreOrder<'a> {
    stack: Vec<&'a RouteNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a RouteNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Assembles the route forest from discovered files
///
/// Files are processed shallowest first. Each node's parent is the layout at
/// its own directory (unless it is that layout), else the first layout found
/// walking up one segment at a time. Nodes without a layout ancestor, or
/// whose ancestor cannot hold children, become roots.
///
/// Two files that map to the same id (e.g. `page.tsx` and `page.js` in one
/// directory) keep the first; the duplicate is logged and dropped.
pub fn build_hierarchy(files: Vec<DiscoveredFile>, sorting: SortingType) -> RouteForest {
    let mut files = files;
    files.sort_by_key(|file| file.segments.len());

    // Phase 1: arena
    let mut arena: Vec<RouteNode> = Vec::with_capacity(files.len());
    let mut by_id: HashMap<RouteId, usize> = HashMap::new();
    let mut layouts: HashMap<Vec<String>, usize> = HashMap::new();

    for file in files {
        let node = RouteNode::from_file(file);
        if by_id.contains_key(&node.id) {
            warn!(
                "Duplicate route file {:?} for {}, keeping the first",
                node.file.relative_path, node.id
            );
            continue;
        }

        let idx = arena.len();
        by_id.insert(node.id.clone(), idx);
        if node.role().permits_children() {
            layouts.insert(node.file.segments.clone(), idx);
        }
        arena.push(node);
    }

    // Phase 2: resolve parent edges by lookup
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); arena.len()];
    let mut roots: Vec<usize> = Vec::new();

    for idx in 0..arena.len() {
        let parent = SegmentHierarchy::new(arena[idx].segments())
            .filter_map(|prefix| layouts.get(prefix).copied())
            .find(|&candidate| candidate != idx);

        match parent {
            Some(parent_idx) => {
                let parent_id = arena[parent_idx].id.clone();
                arena[idx].parent_id = Some(parent_id);
                children[parent_idx].push(idx);
            }
            None => roots.push(idx),
        }
    }

    // Phase 3: materialize owned trees
    let mut slots: Vec<Option<RouteNode>> = arena.into_iter().map(Some).collect();
    let mut root_nodes: Vec<RouteNode> = roots
        .iter()
        .filter_map(|&idx| materialize(idx, &mut slots, &children, sorting))
        .collect();
    root_nodes.sort_by(|a, b| a.sort_key_cmp(b, sorting));

    let mut locations = HashMap::new();
    for (idx, root) in root_nodes.iter().enumerate() {
        record_locations(root, vec![idx], &mut locations);
    }

    RouteForest {
        roots: root_nodes,
        locations,
        sorting,
    }
}

fn materialize(
    idx: usize,
    slots: &mut [Option<RouteNode>],
    children: &[Vec<usize>],
    sorting: SortingType,
) -> Option<RouteNode> {
    let mut node = slots[idx].take()?;
    node.children = children[idx]
        .iter()
        .filter_map(|&child| materialize(child, slots, children, sorting))
        .collect();
    node.children.sort_by(|a, b| a.sort_key_cmp(b, sorting));
    Some(node)
}

fn record_locations(node: &RouteNode, path: Vec<usize>, out: &mut HashMap<RouteId, Vec<usize>>) {
    for (idx, child) in node.children.iter().enumerate() {
        let mut child_path = path.clone();
        child_path.push(idx);
        record_locations(child, child_path, out);
    }
    out.insert(node.id.clone(), path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn files(paths: &[&str]) -> Vec<DiscoveredFile> {
        paths
            .iter()
            .filter_map(|p| DiscoveredFile::from_relative(Path::new("/app"), Path::new(p)))
            .collect()
    }

    fn id(s: &str) -> RouteId {
        RouteId(s.to_string())
    }

    #[test]
    fn test_route_id_is_deterministic() {
        assert_eq!(RouteId::new(&["blog", "[slug]"], FileRole::Page).as_str(), "blog/[slug]#page");
        assert_eq!(RouteId::new::<&str>(&[], FileRole::Layout).as_str(), "#layout");
    }

    #[test]
    fn test_page_and_layout_same_directory() {
        let forest = build_hierarchy(
            files(&["layout.tsx", "blog/layout.tsx", "blog/page.tsx"]),
            SortingType::Natural,
        );

        let page = forest.get(&id("blog#page")).unwrap();
        assert_eq!(page.parent_id, Some(id("blog#layout")));

        let blog_layout = forest.get(&id("blog#layout")).unwrap();
        assert_eq!(blog_layout.parent_id, Some(id("#layout")));
        assert_eq!(forest.roots().len(), 1);
    }

    #[test]
    fn test_walks_up_to_nearest_layout() {
        let forest = build_hierarchy(
            files(&["layout.tsx", "a/b/c/page.tsx"]),
            SortingType::Natural,
        );
        let page = forest.get(&id("a/b/c#page")).unwrap();
        assert_eq!(page.parent_id, Some(id("#layout")));
    }

    #[test]
    fn test_no_layout_means_root() {
        let forest = build_hierarchy(files(&["about/page.tsx", "blog/page.tsx"]), SortingType::Natural);
        assert_eq!(forest.roots().len(), 2);
        assert!(forest.iter().all(|n| n.parent_id.is_none()));
    }

    #[test]
    fn test_every_file_reachable() {
        let input = files(&[
            "layout.tsx",
            "page.tsx",
            "loading.tsx",
            "(shop)/layout.tsx",
            "(shop)/cart/page.tsx",
            "dashboard/@team/page.tsx",
            "api/route.ts",
        ]);
        let count = input.len();
        let forest = build_hierarchy(input, SortingType::Natural);
        assert_eq!(forest.len(), count);
        assert_eq!(forest.iter().count(), count);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let forest = build_hierarchy(files(&["page.tsx", "page.js"]), SortingType::Natural);
        assert_eq!(forest.len(), 1);
    }

    #[test]
    fn test_node_flags() {
        let forest = build_hierarchy(
            files(&["dashboard/@team/[id]/page.tsx", "feed/(..)photo/layout.tsx"]),
            SortingType::Natural,
        );
        let team = forest.get(&id("dashboard/@team/[id]#page")).unwrap();
        assert!(team.is_dynamic);
        assert!(team.is_page);
        assert_eq!(team.parallel_slot.as_deref(), Some("team"));
        assert_eq!(team.display_path, "/dashboard/team/:id");

        let photo = forest.get(&id("feed/(..)photo#layout")).unwrap();
        assert!(!photo.is_dynamic);
        assert!(!photo.is_page);
        assert_eq!(photo.intercept, Some(InterceptLevel::OneLevelUp));
    }

    #[test]
    fn test_siblings_sorted_naturally() {
        let forest = build_hierarchy(
            files(&["layout.tsx", "page10/page.tsx", "page2/page.tsx", "page1/page.tsx"]),
            SortingType::Natural,
        );
        let paths: Vec<&str> = forest.roots()[0]
            .children
            .iter()
            .map(|n| n.display_path.as_str())
            .collect();
        assert_eq!(paths, vec!["/page1", "/page2", "/page10"]);
    }

    #[test]
    fn test_siblings_sorted_basic() {
        let forest = build_hierarchy(
            files(&["layout.tsx", "page10/page.tsx", "page2/page.tsx"]),
            SortingType::Basic,
        );
        let paths: Vec<&str> = forest.roots()[0]
            .children
            .iter()
            .map(|n| n.display_path.as_str())
            .collect();
        assert_eq!(paths, vec!["/page10", "/page2"]);
    }

    #[test]
    fn test_flatten_depth_first() {
        let forest = build_hierarchy(
            files(&["z/page.tsx", "a/b/page.tsx", "page.tsx"]),
            SortingType::Natural,
        );
        let flat: Vec<&str> = forest.flatten().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(flat, vec!["#page", "z#page", "a/b#page"]);
    }
}
