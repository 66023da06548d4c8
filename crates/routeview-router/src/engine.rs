// File: src/engine.rs
// Purpose: Owns the latest route snapshot and serializes rebuilds

use anyhow::{Context, Result};
use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::matcher::{Matcher, RouteMatch};
use crate::project::{find_routing_root, is_nextjs_project};
use crate::scan::{scan, DiscoveredFile};
use crate::tree::{build_hierarchy, RouteForest};

/// Immutable result of one rebuild
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// `None` when the project has no routing directory
    pub routing_root: Option<PathBuf>,
    pub files: Vec<DiscoveredFile>,
    pub forest: RouteForest,
    pub built_at: DateTime<Utc>,
    /// Number of successful rebuilds that produced this snapshot
    pub generation: u64,
    matcher: Matcher,
}

impl Snapshot {
    /// Inactive snapshot with no routes
    pub fn empty() -> Self {
        Self {
            routing_root: None,
            files: Vec::new(),
            forest: RouteForest::default(),
            built_at: Utc::now(),
            generation: 0,
            matcher: Matcher::new(),
        }
    }

    /// Whether a routing directory was found
    pub fn is_active(&self) -> bool {
        self.routing_root.is_some()
    }

    /// Matches a URL with the matcher configured at build time
    pub fn match_url(&self, url: &str) -> Option<RouteMatch<'_>> {
        self.matcher.match_url(url, &self.forest)
    }
}

/// Route engine
///
/// Readers take the current snapshot with [`Engine::snapshot`] and never
/// block. Rebuilds are serialized; a failed rebuild keeps the previous
/// snapshot in place.
pub struct Engine {
    /// Directory the configured `project_root` is resolved against
    base_dir: PathBuf,
    config: RwLock<Config>,
    current: ArcSwap<Snapshot>,
    /// Held for the duration of a rebuild; stores the last generation
    gate: Mutex<u64>,
}

impl Engine {
    pub fn new(base_dir: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            base_dir: base_dir.into(),
            config: RwLock::new(config),
            current: ArcSwap::from_pointee(Snapshot::empty()),
            gate: Mutex::new(0),
        }
    }

    /// The latest successfully built snapshot
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current.load_full()
    }

    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    /// Replaces the configuration; takes effect on the next rebuild
    pub fn set_config(&self, config: Config) {
        *self.config.write() = config;
    }

    pub fn project_root(&self) -> PathBuf {
        self.config.read().resolve_project_root(&self.base_dir)
    }

    /// Rescans the project and atomically publishes a new snapshot
    pub fn rebuild(&self) -> Result<Arc<Snapshot>> {
        let mut generation = self.gate.lock();
        let config = self.config();

        match self.build(&config, *generation + 1) {
            Ok(snapshot) => {
                *generation += 1;
                let snapshot = Arc::new(snapshot);
                self.current.store(Arc::clone(&snapshot));
                Ok(snapshot)
            }
            Err(e) => {
                warn!("Rebuild failed, keeping previous routes: {:#}", e);
                Err(e)
            }
        }
    }

    fn build(&self, config: &Config, generation: u64) -> Result<Snapshot> {
        let project_root = config.resolve_project_root(&self.base_dir);

        let Some(routing_root) = self.routing_root(config, &project_root)? else {
            return Ok(Snapshot {
                generation,
                matcher: config.matcher(),
                ..Snapshot::empty()
            });
        };

        fs::read_dir(&routing_root)
            .with_context(|| format!("Failed to read routing directory: {:?}", routing_root))?;

        let files = scan(&routing_root, &config.scan_options());
        let forest = build_hierarchy(files.clone(), config.sorting_type);

        debug!(
            "Rebuilt routes from {:?}: {} files, {} pages (generation {})",
            routing_root,
            files.len(),
            forest.pages().count(),
            generation
        );

        Ok(Snapshot {
            routing_root: Some(routing_root),
            files,
            forest,
            built_at: Utc::now(),
            generation,
            matcher: config.matcher(),
        })
    }

    fn routing_root(&self, config: &Config, project_root: &Path) -> Result<Option<PathBuf>> {
        // An explicit app directory skips project detection but must exist
        if let Some(dir) = config.app_directory.as_deref() {
            let root = find_routing_root(project_root, Some(dir)).with_context(|| {
                format!("Configured app directory {:?} not found under {:?}", dir, project_root)
            })?;
            return Ok(Some(root));
        }

        // A conventional app directory is enough on its own
        let root = find_routing_root(project_root, None);
        match (&root, is_nextjs_project(project_root)) {
            (Some(dir), false) => {
                debug!("No Next.js config or dependency, using {:?} by convention", dir)
            }
            (None, true) => {
                info!("No app directory found under {:?}, no routes loaded", project_root)
            }
            (None, false) => {
                info!("{:?} is not a Next.js project, no routes loaded", project_root)
            }
            (Some(_), true) => {}
        }
        Ok(root)
    }
}
