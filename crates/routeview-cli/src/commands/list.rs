use anyhow::Result;
use routeview_router::{Engine, FileRole, RouteNode};
use serde::Serialize;
use std::path::Path;

use crate::render;

/// One row of `routeview list --json`
#[derive(Serialize)]
struct RouteEntry<'a> {
    id: &'a str,
    path: &'a str,
    role: FileRole,
    file: &'a Path,
    dynamic: bool,
    parent: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    slot: Option<&'a str>,
}

impl<'a> From<&'a RouteNode> for RouteEntry<'a> {
    fn from(node: &'a RouteNode) -> Self {
        Self {
            id: node.id.as_str(),
            path: &node.display_path,
            role: node.role(),
            file: &node.file.relative_path,
            dynamic: node.is_dynamic,
            parent: node.parent_id.as_ref().map(|id| id.as_str()),
            slot: node.parallel_slot.as_deref(),
        }
    }
}

pub fn execute(engine: &Engine, json: bool, pages_only: bool) -> Result<()> {
    let Some(snapshot) = super::load_snapshot(engine)? else {
        if json {
            println!("[]");
        }
        return Ok(());
    };

    if json {
        let entries: Vec<RouteEntry<'_>> = snapshot
            .forest
            .flatten()
            .into_iter()
            .filter(|node| !pages_only || node.is_page)
            .map(RouteEntry::from)
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", render::flat(&snapshot.forest, pages_only));
    }

    Ok(())
}
