/// Project detection and routing root resolution
///
/// A project qualifies when it carries a Next.js config file or lists `next`
/// as a dependency in `package.json`. The routing root is the configured app
/// directory, or the first existing conventional candidate.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const CONFIG_FILES: &[&str] = &[
    "next.config.js",
    "next.config.mjs",
    "next.config.cjs",
    "next.config.ts",
];

/// Conventional app directory locations, in lookup order
pub const APP_DIR_CANDIDATES: &[&str] = &["src/app", "app"];

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageManifest {
    #[serde(default)]
    dependencies: HashMap<String, serde_json::Value>,
    #[serde(default)]
    dev_dependencies: HashMap<String, serde_json::Value>,
}

/// Whether `project_root` looks like a Next.js project
pub fn is_nextjs_project(project_root: &Path) -> bool {
    if CONFIG_FILES
        .iter()
        .any(|name| project_root.join(name).is_file())
    {
        return true;
    }

    let manifest_path = project_root.join("package.json");
    let Ok(content) = fs::read_to_string(&manifest_path) else {
        return false;
    };

    match serde_json::from_str::<PackageManifest>(&content) {
        Ok(manifest) => {
            manifest.dependencies.contains_key("next")
                || manifest.dev_dependencies.contains_key("next")
        }
        Err(e) => {
            warn!("Failed to parse {:?}: {}", manifest_path, e);
            false
        }
    }
}

/// Resolves the routing root for a project
///
/// An explicit `app_directory` wins (relative paths are joined onto the
/// project root). Otherwise the conventional candidates are tried in order.
/// Returns `None` when nothing suitable exists.
pub fn find_routing_root(project_root: &Path, app_directory: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = app_directory {
        let candidate = if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            project_root.join(dir)
        };
        return candidate.is_dir().then_some(candidate);
    }

    let found = APP_DIR_CANDIDATES
        .iter()
        .map(|candidate| project_root.join(candidate))
        .find(|candidate| candidate.is_dir());

    debug!("Routing root for {:?}: {:?}", project_root, found);
    found
}
