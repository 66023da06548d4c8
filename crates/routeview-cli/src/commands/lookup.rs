use anyhow::Result;
use colored::Colorize;
use routeview_router::{normalize_url, Engine};

pub fn execute(engine: &Engine, url: &str) -> Result<()> {
    let Some(snapshot) = super::load_snapshot(engine)? else {
        return Ok(());
    };

    let Some(route) = snapshot.match_url(url) else {
        println!("{} No page matches {}", "✗".yellow(), normalize_url(url).bold());
        return Ok(());
    };

    let path = route.path().unwrap_or_else(|| normalize_url(url));
    let config = engine.config();

    println!("{} {} → {}", "✓".green(), path.bold(), route.node.display_path.cyan());
    println!("  file:   {}", route.node.file.absolute_path.display());
    for (name, value) in &route.params {
        println!("  param:  {} = {}", name.yellow(), value);
    }
    println!("  open:   {}", config.browser_url(&path).underline());

    Ok(())
}
