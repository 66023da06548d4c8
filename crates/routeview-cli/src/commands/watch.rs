use anyhow::Result;
use colored::Colorize;
use routeview_router::Engine;

#[cfg(feature = "watch")]
pub fn execute(engine: Engine) -> Result<()> {
    use crate::watcher::RouteWatcher;
    use std::sync::Arc;

    println!("{}", "Starting route watcher...".green().bold());
    println!();

    let engine = Arc::new(engine);
    if let Some(snapshot) = super::load_snapshot(&engine)? {
        println!(
            "  {} {} pages in {}",
            "✓".green(),
            snapshot.forest.pages().count(),
            snapshot
                .routing_root
                .as_deref()
                .map(|root| root.display().to_string())
                .unwrap_or_default()
        );
    }

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let watcher = RouteWatcher::new(engine);
            tokio::select! {
                result = watcher.watch() => result,
                _ = tokio::signal::ctrl_c() => {
                    println!();
                    println!("{}", "Stopped watching".dimmed());
                    Ok(())
                }
            }
        })
}

#[cfg(not(feature = "watch"))]
pub fn execute(_engine: Engine) -> Result<()> {
    println!("{}", "⚠ Watch mode not available".yellow());
    println!();
    println!("Watching requires the 'watch' feature.");
    println!("Rebuild with: cargo build --features watch");
    Ok(())
}
