// File: src/config.rs
// Purpose: Configuration parsing from routeview.toml

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::matcher::{MatchStrategy, Matcher};
use crate::scan::ScanOptions;
use crate::tree::SortingType;

pub const CONFIG_FILE_NAME: &str = "routeview.toml";

/// How the route forest is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    #[default]
    Hierarchical,
    Flat,
}

/// Application configuration
///
/// Read key by key from a TOML table, see [`Config::load`].
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub view_type: ViewType,
    pub sorting_type: SortingType,

    /// Project directory, relative to the working directory (default: "./")
    pub project_root: PathBuf,

    /// Routing directory relative to the project root; auto-detected when unset
    pub app_directory: Option<PathBuf>,

    pub port: u16,
    pub exclude_patterns: Vec<String>,

    /// Base URL for browser links (default: http://localhost:<port>)
    pub host_url: Option<String>,

    /// Whether static segments match case-insensitively (default: false)
    pub case_insensitive: bool,

    pub match_strategy: MatchStrategy,
}

// Default values
fn default_project_root() -> PathBuf {
    PathBuf::from("./")
}

fn default_port() -> u16 {
    3000
}

fn default_exclude_patterns() -> Vec<String> {
    vec![
        "**/node_modules/**".to_string(),
        "**/.git/**".to_string(),
        "**/.next/**".to_string(),
        "**/dist/**".to_string(),
        "**/build/**".to_string(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            view_type: ViewType::default(),
            sorting_type: SortingType::default(),
            project_root: default_project_root(),
            app_directory: None,
            port: default_port(),
            exclude_patterns: default_exclude_patterns(),
            host_url: None,
            case_insensitive: false,
            match_strategy: MatchStrategy::default(),
        }
    }
}

/// Deserializes one field, logging and discarding invalid values
fn field<T: DeserializeOwned>(key: &str, value: toml::Value, path: &Path) -> Option<T> {
    match value.try_into() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Ignoring invalid `{}` in {:?}: {}", key, path, e);
            None
        }
    }
}

impl Config {
    /// Load configuration from a routeview.toml file
    ///
    /// A missing or empty file yields the defaults. Invalid TOML yields the
    /// defaults with a warning. Fields with invalid values are ignored one by
    /// one while the valid ones are kept. Keys may be snake_case or camelCase.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Ok(Self::from_toml_str(&content, path))
    }

    /// Load configuration from the default file inside a project directory
    pub fn load_from_project(project_root: impl AsRef<Path>) -> Result<Self> {
        Self::load(project_root.as_ref().join(CONFIG_FILE_NAME))
    }

    fn from_toml_str(content: &str, path: &Path) -> Self {
        let mut config = Self::default();

        if content.trim().is_empty() {
            return config;
        }

        let table = match content.parse::<toml::Table>() {
            Ok(table) => table,
            Err(e) => {
                warn!("Failed to parse config file {:?}, using defaults: {}", path, e);
                return config;
            }
        };

        for (key, value) in table {
            match key.as_str() {
                "view_type" | "viewType" => {
                    if let Some(v) = field(&key, value, path) {
                        config.view_type = v;
                    }
                }
                "sorting_type" | "sortingType" => {
                    if let Some(v) = field(&key, value, path) {
                        config.sorting_type = v;
                    }
                }
                "project_root" | "projectRoot" => {
                    if let Some(v) = field(&key, value, path) {
                        config.project_root = v;
                    }
                }
                "app_directory" | "appDirectory" => {
                    if let Some(v) = field::<PathBuf>(&key, value, path) {
                        config.app_directory = Some(v);
                    }
                }
                "port" => {
                    if let Some(v) = field(&key, value, path) {
                        config.port = v;
                    }
                }
                "exclude_patterns" | "excludePatterns" => {
                    if let Some(v) = field(&key, value, path) {
                        config.exclude_patterns = v;
                    }
                }
                "host_url" | "hostUrl" => {
                    if let Some(v) = field::<String>(&key, value, path) {
                        config.host_url = Some(v);
                    }
                }
                "case_insensitive" | "caseInsensitive" => {
                    if let Some(v) = field(&key, value, path) {
                        config.case_insensitive = v;
                    }
                }
                "match_strategy" | "matchStrategy" => {
                    if let Some(v) = field(&key, value, path) {
                        config.match_strategy = v;
                    }
                }
                other => warn!("Ignoring unknown config key `{}` in {:?}", other, path),
            }
        }

        config
    }

    /// Project root resolved against a base directory
    pub fn resolve_project_root(&self, base: &Path) -> PathBuf {
        if self.project_root.is_absolute() {
            self.project_root.clone()
        } else {
            base.join(&self.project_root)
        }
    }

    /// Base URL used for "open in browser" links, without trailing slash
    pub fn host_url(&self) -> String {
        match &self.host_url {
            Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
            _ => format!("http://localhost:{}", self.port),
        }
    }

    /// Full browser URL for a concrete route path
    ///
    /// # Examples
    ///
    /// ```
    /// use routeview_router::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.browser_url("/blog/post"), "http://localhost:3000/blog/post");
    /// assert_eq!(config.browser_url("/"), "http://localhost:3000/");
    /// ```
    pub fn browser_url(&self, route_path: &str) -> String {
        format!("{}/{}", self.host_url(), route_path.trim_start_matches('/'))
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::new().with_excludes(&self.exclude_patterns)
    }

    pub fn matcher(&self) -> Matcher {
        Matcher::new()
            .with_case_insensitive(self.case_insensitive)
            .with_strategy(self.match_strategy)
    }
}
