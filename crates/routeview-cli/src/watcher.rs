use anyhow::Result;
use colored::Colorize;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use routeview_router::{Config, Engine, Snapshot, CONFIG_FILE_NAME, SKIPPED_DIRS};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Quiet period after the last change before routes are rebuilt
const DEBOUNCE: Duration = Duration::from_millis(300);

/// Watches the project directory and rebuilds the engine on change
pub struct RouteWatcher {
    engine: Arc<Engine>,
}

/// Whether a changed path can affect routes or configuration
fn is_relevant(path: &Path) -> bool {
    !path.components().any(|component| {
        let name = component.as_os_str().to_string_lossy();
        name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref())
    })
}

fn page_paths(snapshot: &Snapshot) -> BTreeSet<String> {
    snapshot
        .forest
        .pages()
        .map(|node| node.display_path.clone())
        .collect()
}

impl RouteWatcher {
    pub fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Runs until the event channel closes
    pub async fn watch(&self) -> Result<()> {
        let project_root = self.engine.project_root();
        let (tx, mut rx) = mpsc::channel::<PathBuf>(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            match res {
                Ok(event) => {
                    if matches!(
                        event.kind,
                        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
                    ) {
                        for path in event.paths {
                            let _ = tx.blocking_send(path);
                        }
                    }
                }
                Err(e) => warn!("Watch error: {}", e),
            }
        })?;

        watcher.watch(&project_root, RecursiveMode::Recursive)?;
        println!("  {} Watching: {}", "👀".cyan(), project_root.display());
        println!();

        while let Some(first) = rx.recv().await {
            let mut changed = vec![first];

            // Debounce: keep collecting until the channel goes quiet
            loop {
                match tokio::time::timeout(DEBOUNCE, rx.recv()).await {
                    Ok(Some(path)) => changed.push(path),
                    Ok(None) | Err(_) => break,
                }
            }

            let relative: Vec<PathBuf> = changed
                .into_iter()
                .filter_map(|path| path.strip_prefix(&project_root).ok().map(Path::to_path_buf))
                .filter(|path| is_relevant(path))
                .collect();

            if relative.is_empty() {
                continue;
            }

            if relative.iter().any(|path| path == Path::new(CONFIG_FILE_NAME)) {
                self.reload_config(&project_root);
            }

            debug!("{} relevant changes, rebuilding", relative.len());
            self.rebuild().await;
        }

        // Keep watcher alive until the loop ends
        drop(watcher);
        Ok(())
    }

    fn reload_config(&self, project_root: &Path) {
        let current = self.engine.config();
        match Config::load_from_project(project_root) {
            Ok(mut config) => {
                // The project root was fixed at startup
                config.project_root = current.project_root;
                self.engine.set_config(config);
                println!("{} Reloaded {}", "⚙".cyan(), CONFIG_FILE_NAME);
            }
            Err(e) => warn!("Failed to reload config, keeping previous: {:#}", e),
        }
    }

    async fn rebuild(&self) {
        let before = self.engine.snapshot();
        let engine = Arc::clone(&self.engine);

        let result = match tokio::task::spawn_blocking(move || engine.rebuild()).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Rebuild task failed: {}", e);
                return;
            }
        };

        let after = match result {
            Ok(snapshot) => snapshot,
            Err(e) => {
                eprintln!("{} Rebuild failed, keeping previous routes: {:#}", "❌".red(), e);
                return;
            }
        };

        let old = page_paths(&before);
        let new = page_paths(&after);

        for added in new.difference(&old) {
            println!("  {} {}", "+".green(), added);
        }
        for removed in old.difference(&new) {
            println!("  {} {}", "-".red(), removed);
        }

        println!(
            "{} Routes rebuilt: {} pages (generation {})",
            "✓".green(),
            new.len(),
            after.generation
        );
    }
}
