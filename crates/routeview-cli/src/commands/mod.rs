pub mod list;
pub mod lookup;
pub mod tree;
pub mod watch;

use anyhow::Result;
use colored::Colorize;
use routeview_router::{Engine, Snapshot};
use std::sync::Arc;

/// Builds a fresh snapshot, or explains why there is nothing to show
pub(crate) fn load_snapshot(engine: &Engine) -> Result<Option<Arc<Snapshot>>> {
    let snapshot = engine.rebuild()?;

    if !snapshot.is_active() {
        println!(
            "{} No App Router directory found in {}",
            "⚠".yellow(),
            engine.project_root().display()
        );
        println!("  Expected a Next.js project with src/app or app, or set appDirectory in routeview.toml");
        return Ok(None);
    }

    Ok(Some(snapshot))
}
