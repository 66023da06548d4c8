// File: src/scan.rs
// Purpose: Walks the routing directory and collects classified route files

use glob::{MatchOptions, Pattern};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::classify::{classify_file, FileRole};
use crate::route::build_route_path;

/// Directory names whose whole subtree is never scanned
pub const SKIPPED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".next",
    "dist",
    "build",
    "out",
    "coverage",
    "__tests__",
    "__mocks__",
    "test",
    "tests",
];

/// One file under the routing root that matched a known role
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredFile {
    pub absolute_path: PathBuf,
    /// Relative to the routing root
    pub relative_path: PathBuf,
    /// Directory names between the routing root and the file
    pub segments: Vec<String>,
    pub role: FileRole,
    /// Display route path derived from `segments`
    pub route_path: String,
}

impl DiscoveredFile {
    /// Builds a discovered file from a root-relative path, or `None` if the
    /// filename has no routing role
    pub fn from_relative(root: &Path, relative: &Path) -> Option<Self> {
        let filename = relative.file_name()?.to_str()?;
        let role = classify_file(filename)?;

        let segments: Vec<String> = relative
            .parent()
            .map(|parent| {
                parent
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let route_path = build_route_path(&segments);

        Some(Self {
            absolute_path: root.join(relative),
            relative_path: relative.to_path_buf(),
            segments,
            role,
            route_path,
        })
    }
}

/// Scanner options beyond the fixed skip set
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    excludes: Vec<Pattern>,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds exclude globs matched against root-relative paths
    ///
    /// Invalid globs are logged and ignored.
    pub fn with_excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for raw in patterns {
            match Pattern::new(raw.as_ref()) {
                Ok(pattern) => self.excludes.push(pattern),
                Err(e) => warn!("Ignoring invalid exclude pattern {:?}: {}", raw.as_ref(), e),
            }
        }
        self
    }

    fn is_excluded(&self, relative: &Path) -> bool {
        let options = MatchOptions {
            require_literal_separator: true,
            ..MatchOptions::new()
        };
        self.excludes
            .iter()
            .any(|pattern| pattern.matches_path_with(relative, options))
    }
}

fn is_skipped_dir_name(name: &str) -> bool {
    name.starts_with('.') || SKIPPED_DIRS.contains(&name)
}

/// Recursively scans `root` for files with a routing role
///
/// Unreadable entries are logged and skipped; a missing root yields an empty
/// list. Output follows directory-entry order sorted by file name.
pub fn scan(root: &Path, options: &ScanOptions) -> Vec<DiscoveredFile> {
    if !root.is_dir() {
        warn!("Routing root is not a directory: {:?}", root);
        return Vec::new();
    }

    let keep = |entry: &DirEntry| -> bool {
        if entry.depth() == 0 {
            return true;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if entry.file_type().is_dir() {
            let name = entry.file_name().to_string_lossy();
            if is_skipped_dir_name(&name) {
                debug!("Skipping directory: {:?}", relative);
                return false;
            }
        }
        !options.is_excluded(relative)
    };

    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(keep)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {:?}: {}", root, e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let relative = match entry.path().strip_prefix(root) {
            Ok(relative) => relative,
            Err(_) => continue,
        };

        if let Some(file) = DiscoveredFile::from_relative(root, relative) {
            files.push(file);
        }
    }

    debug!("Scanned {:?}: {} route files", root, files.len());
    files
}
