use anyhow::Result;
use colored::Colorize;
use routeview_router::{Engine, ViewType};

use crate::render;

pub fn execute(engine: &Engine, view: ViewType) -> Result<()> {
    let Some(snapshot) = super::load_snapshot(engine)? else {
        return Ok(());
    };

    if snapshot.forest.is_empty() {
        println!("{}", "No route files found".yellow());
        return Ok(());
    }

    if let Some(root) = &snapshot.routing_root {
        println!("{} {}", "Routes in".cyan(), root.display());
        println!();
    }

    match view {
        ViewType::Hierarchical => print!("{}", render::tree(&snapshot.forest)),
        ViewType::Flat => print!("{}", render::flat(&snapshot.forest, false)),
    }

    println!();
    println!(
        "{} files, {} pages",
        snapshot.forest.len(),
        snapshot.forest.pages().count()
    );

    Ok(())
}
