// Route tree and route list rendering

use colored::Colorize;
use routeview_router::{FileRole, RouteForest, RouteNode};
use std::fmt::Write;

fn role_label(role: FileRole) -> String {
    let label = format!("[{}]", role);
    match role {
        FileRole::Page => label.green().to_string(),
        FileRole::Layout | FileRole::Template => label.blue().to_string(),
        FileRole::ApiRoute => label.magenta().to_string(),
        FileRole::Error | FileRole::GlobalError | FileRole::NotFound => label.red().to_string(),
        FileRole::Loading | FileRole::Default => label.dimmed().to_string(),
    }
}

fn node_line(node: &RouteNode) -> String {
    let mut line = format!(
        "{} {} {}",
        node.display_path.bold(),
        role_label(node.role()),
        node.file.relative_path.display().to_string().dimmed()
    );

    if node.is_dynamic {
        line.push_str(&format!(" {}", "dynamic".yellow()));
    }
    if let Some(slot) = &node.parallel_slot {
        line.push_str(&format!(" {}", format!("@{}", slot).cyan()));
    }
    if let Some(level) = node.intercept {
        line.push_str(&format!(" {}", format!("intercepts {}", level.marker()).cyan()));
    }
    line
}

fn write_subtree(out: &mut String, node: &RouteNode, prefix: &str, last: bool) {
    let branch = if last { "└── " } else { "├── " };
    let _ = writeln!(out, "{}{}{}", prefix, branch, node_line(node));

    let child_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
    let count = node.children.len();
    for (idx, child) in node.children.iter().enumerate() {
        write_subtree(out, child, &child_prefix, idx + 1 == count);
    }
}

/// Renders the forest as an indented tree, one root per block
pub fn tree(forest: &RouteForest) -> String {
    let mut out = String::new();

    for root in forest.roots() {
        let _ = writeln!(out, "{}", node_line(root));
        let count = root.children.len();
        for (idx, child) in root.children.iter().enumerate() {
            write_subtree(&mut out, child, "", idx + 1 == count);
        }
    }
    out
}

/// Renders every node on its own line, shallowest first
pub fn flat(forest: &RouteForest, pages_only: bool) -> String {
    let nodes: Vec<&RouteNode> = forest
        .flatten()
        .into_iter()
        .filter(|node| !pages_only || node.is_page)
        .collect();

    let width = nodes
        .iter()
        .map(|node| node.display_path.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for node in nodes {
        let _ = writeln!(
            out,
            "{:<width$}  {:<14}  {}",
            node.display_path,
            node.role().to_string(),
            node.file.relative_path.display(),
            width = width
        );
    }
    out
}
