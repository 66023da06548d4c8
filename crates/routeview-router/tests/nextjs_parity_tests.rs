/// Integration tests for Next.js App Router conventions
///
/// Each test documents the equivalent App Router layout it models. Trees are
/// built from relative paths so no filesystem is involved.

use routeview_router::{
    build_hierarchy, build_route_path, classify_file, classify_segment, match_url, DiscoveredFile,
    FileRole, InterceptLevel, RouteForest, RouteId, RouteNode, SegmentKind, SortingType,
};
use rstest::rstest;
use std::path::Path;

fn forest(paths: &[&str]) -> RouteForest {
    let files = paths
        .iter()
        .filter_map(|p| DiscoveredFile::from_relative(Path::new("/project/app"), Path::new(p)))
        .collect();
    build_hierarchy(files, SortingType::Natural)
}

fn node<'a>(forest: &'a RouteForest, id: &str) -> &'a RouteNode {
    forest
        .iter()
        .find(|n| n.id.as_str() == id)
        .unwrap_or_else(|| panic!("missing node {id}"))
}

fn matched(forest: &RouteForest, url: &str) -> Option<String> {
    match_url(url, forest).map(|m| m.node.id.to_string())
}

// ============================================================================
// File Conventions
// ============================================================================

#[rstest]
#[case("page.tsx", Some(FileRole::Page))]
#[case("page.jsx", Some(FileRole::Page))]
#[case("layout.tsx", Some(FileRole::Layout))]
#[case("template.js", Some(FileRole::Template))]
#[case("loading.tsx", Some(FileRole::Loading))]
#[case("error.ts", Some(FileRole::Error))]
#[case("not-found.jsx", Some(FileRole::NotFound))]
#[case("route.js", Some(FileRole::ApiRoute))]
#[case("default.js", Some(FileRole::Default))]
#[case("global-error.jsx", Some(FileRole::GlobalError))]
#[case("random.tsx", None)]
#[case("page.module.css", None)]
#[case("opengraph-image.tsx", None)]
fn test_nextjs_file_conventions(#[case] filename: &str, #[case] expected: Option<FileRole>) {
    assert_eq!(classify_file(filename), expected);
}

#[rstest]
#[case("[...slug]", SegmentKind::CatchAll("slug".into()))]
#[case("[[...slug]]", SegmentKind::OptionalCatchAll("slug".into()))]
#[case("[id]", SegmentKind::Dynamic("id".into()))]
#[case("(marketing)", SegmentKind::RouteGroup("marketing".into()))]
#[case("@analytics", SegmentKind::Parallel("analytics".into()))]
#[case("(.)photo", SegmentKind::Intercepting(InterceptLevel::SameLevel, "photo".into()))]
#[case("(..)(..)photo", SegmentKind::Intercepting(InterceptLevel::TwoLevelsUp, "photo".into()))]
#[case("(...)photo", SegmentKind::Intercepting(InterceptLevel::FromRoot, "photo".into()))]
#[case("blog", SegmentKind::Static("blog".into()))]
fn test_nextjs_segment_grammar(#[case] segment: &str, #[case] expected: SegmentKind) {
    assert_eq!(classify_segment(segment), expected);
}

// ============================================================================
// Route Paths
// ============================================================================

#[test]
fn test_nextjs_route_paths() {
    // app/page.tsx → /
    assert_eq!(build_route_path::<&str>(&[]), "/");
    // app/blog/[slug]/page.tsx → /blog/:slug
    assert_eq!(build_route_path(&["blog", "[slug]"]), "/blog/:slug");
    // app/docs/[...slug]/page.tsx → /docs/*slug
    assert_eq!(build_route_path(&["docs", "[...slug]"]), "/docs/*slug");
    // app/(marketing)/products/page.tsx → /products
    assert_eq!(build_route_path(&["(marketing)", "products"]), "/products");
    // app/shop/[category]/[item]/page.tsx → /shop/:category/:item
    assert_eq!(
        build_route_path(&["shop", "[category]", "[item]"]),
        "/shop/:category/:item"
    );
}

// ============================================================================
// Layouts
// ============================================================================

#[test]
fn test_nextjs_nested_layouts() {
    // app/layout.tsx
    // app/dashboard/layout.tsx
    // app/dashboard/settings/page.tsx
    let forest = forest(&[
        "layout.tsx",
        "dashboard/layout.tsx",
        "dashboard/settings/page.tsx",
    ]);

    let settings = node(&forest, "dashboard/settings#page");
    assert_eq!(
        settings.parent_id,
        Some(node(&forest, "dashboard#layout").id.clone())
    );
    assert_eq!(
        node(&forest, "dashboard#layout").parent_id,
        Some(node(&forest, "#layout").id.clone())
    );
}

#[test]
fn test_nextjs_boundaries_share_segment_layout() {
    // app/blog/{layout,page,loading,error,not-found}.tsx
    let forest = forest(&[
        "blog/layout.tsx",
        "blog/page.tsx",
        "blog/loading.tsx",
        "blog/error.tsx",
        "blog/not-found.tsx",
    ]);

    assert_eq!(forest.roots().len(), 1);
    let layout = &forest.roots()[0];
    assert_eq!(layout.id, RouteId::new(&["blog"], FileRole::Layout));

    let roles: Vec<FileRole> = layout.children.iter().map(|c| c.role()).collect();
    assert_eq!(
        roles,
        vec![
            FileRole::Page,
            FileRole::Loading,
            FileRole::Error,
            FileRole::NotFound
        ]
    );
}

#[test]
fn test_nextjs_templates_are_not_layout_parents() {
    // app/template.tsx
    // app/about/page.tsx
    let forest = forest(&["template.tsx", "about/page.tsx"]);
    assert_eq!(forest.roots().len(), 2);
    assert!(forest.iter().all(|n| n.parent_id.is_none()));
}

#[test]
fn test_nextjs_template_nests_under_segment_layout() {
    // app/layout.tsx
    // app/template.tsx
    // app/page.tsx
    let forest = forest(&["layout.tsx", "template.tsx", "page.tsx"]);
    assert_eq!(forest.roots().len(), 1);

    let template = node(&forest, "#template");
    assert_eq!(template.parent_id, Some(node(&forest, "#layout").id.clone()));
    assert!(template.children.is_empty());
    assert_eq!(node(&forest, "#page").parent_id, template.parent_id);
}

// ============================================================================
// Route Groups
// ============================================================================

#[test]
fn test_nextjs_route_groups() {
    // app/(marketing)/about/page.tsx → /about
    // app/(shop)/cart/page.tsx → /cart
    let forest = forest(&[
        "(marketing)/layout.tsx",
        "(marketing)/about/page.tsx",
        "(shop)/cart/page.tsx",
    ]);

    let about = node(&forest, "(marketing)/about#page");
    assert_eq!(about.display_path, "/about");
    assert!(about.in_route_group());
    assert_eq!(about.parent_id, Some(node(&forest, "(marketing)#layout").id.clone()));

    assert_eq!(matched(&forest, "/about").as_deref(), Some("(marketing)/about#page"));
    assert_eq!(matched(&forest, "/cart").as_deref(), Some("(shop)/cart#page"));
    assert_eq!(matched(&forest, "/marketing/about"), None);
}

// ============================================================================
// Parallel Routes
// ============================================================================

#[test]
fn test_nextjs_parallel_routes() {
    // app/dashboard/layout.tsx
    // app/dashboard/page.tsx
    // app/dashboard/@analytics/page.tsx
    // app/dashboard/@team/[member]/page.tsx
    let forest = forest(&[
        "dashboard/layout.tsx",
        "dashboard/page.tsx",
        "dashboard/@analytics/page.tsx",
        "dashboard/@team/[member]/page.tsx",
    ]);

    let analytics = node(&forest, "dashboard/@analytics#page");
    assert_eq!(analytics.display_path, "/dashboard/analytics");
    assert_eq!(analytics.parallel_slot.as_deref(), Some("analytics"));

    // Slots never consume a URL segment
    assert_eq!(matched(&forest, "/dashboard").as_deref(), Some("dashboard#page"));

    let m = match_url("/dashboard/alice", &forest).unwrap();
    assert_eq!(m.node.parallel_slot.as_deref(), Some("team"));
    assert_eq!(m.params.get("member"), Some(&"alice".to_string()));
}

// ============================================================================
// Intercepting Routes
// ============================================================================

#[test]
fn test_nextjs_intercepting_routes() {
    // app/photo/[id]/page.tsx
    // app/feed/(..)photo/[id]/page.tsx
    let forest = forest(&["photo/[id]/page.tsx", "feed/(..)photo/[id]/page.tsx"]);

    let modal = node(&forest, "feed/(..)photo/[id]#page");
    assert_eq!(modal.intercept, Some(InterceptLevel::OneLevelUp));
    assert_eq!(modal.display_path, "/feed/photo/:id");

    assert_eq!(matched(&forest, "/photo/7").as_deref(), Some("photo/[id]#page"));
    assert_eq!(
        matched(&forest, "/feed/photo/7").as_deref(),
        Some("feed/(..)photo/[id]#page")
    );
}

// ============================================================================
// Dynamic Segments
// ============================================================================

#[test]
fn test_nextjs_multiple_dynamic_segments() {
    // app/shop/[category]/[item]/page.tsx
    let forest = forest(&["shop/[category]/[item]/page.tsx"]);

    let m = match_url("/shop/shoes/sneaker-42", &forest).unwrap();
    assert!(m.node.is_dynamic);
    assert_eq!(m.params.get("category"), Some(&"shoes".to_string()));
    assert_eq!(m.params.get("item"), Some(&"sneaker-42".to_string()));
    assert!(match_url("/shop/shoes", &forest).is_none());
}

#[test]
fn test_nextjs_catch_all_next_to_optional() {
    // app/docs/[...slug]/page.tsx
    // app/shop/[[...filters]]/page.tsx
    let forest = forest(&["docs/[...slug]/page.tsx", "shop/[[...filters]]/page.tsx"]);

    assert_eq!(matched(&forest, "/docs"), None);
    assert_eq!(matched(&forest, "/docs/a/b/c").as_deref(), Some("docs/[...slug]#page"));
    assert_eq!(matched(&forest, "/shop").as_deref(), Some("shop/[[...filters]]#page"));
    assert_eq!(
        matched(&forest, "/shop/red/large").as_deref(),
        Some("shop/[[...filters]]#page")
    );
}
