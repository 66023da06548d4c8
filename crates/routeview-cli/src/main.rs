mod commands;
mod render;

#[cfg(feature = "watch")]
mod watcher;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use routeview_router::{Config, Engine, SortingType, ViewType};
use std::env;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "routeview")]
#[command(version, about = "Routeview - browse App Router routes from the terminal", long_about = None)]
struct Cli {
    /// Project directory (defaults to `project_root` from routeview.toml)
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    /// Routing directory relative to the project root (default: src/app, then app)
    #[arg(long, global = true)]
    app_dir: Option<PathBuf>,

    /// Sibling ordering
    #[arg(long, global = true, value_enum)]
    sort: Option<SortArg>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route tree
    Tree {
        /// Print a flat list instead of the hierarchy
        #[arg(long)]
        flat: bool,
    },

    /// List every route file, shallowest first
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Only list page routes
        #[arg(long)]
        pages: bool,
    },

    /// Resolve a URL to the page file that renders it
    #[command(name = "match")]
    Match {
        /// URL or path, e.g. /blog/hello or http://localhost:3000/blog/hello
        url: String,
    },

    /// Watch the project and rebuild routes on change
    Watch,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum SortArg {
    /// Numeric-aware, case-insensitive (page2 before page10)
    Natural,
    /// Plain lexicographic
    Basic,
}

impl From<SortArg> for SortingType {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Natural => SortingType::Natural,
            SortArg::Basic => SortingType::Basic,
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("routeview=info,routeview_router=info")),
        1 => EnvFilter::new("routeview=debug,routeview_router=debug"),
        _ => EnvFilter::new("routeview=trace,routeview_router=trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads routeview.toml and applies command-line overrides
///
/// The config file is read from `--project` when given, else from `cwd`.
/// An unreadable file falls back to the defaults.
fn load_config(cli: &Cli, cwd: &Path) -> Config {
    let config_dir = cli
        .project
        .as_ref()
        .map_or_else(|| cwd.to_path_buf(), |project| cwd.join(project));

    let mut config = Config::load_from_project(&config_dir).unwrap_or_else(|e| {
        warn!("Failed to load config: {:#}, using defaults", e);
        Config::default()
    });

    if let Some(project) = &cli.project {
        config.project_root = project.clone();
    }
    if let Some(app_dir) = &cli.app_dir {
        config.app_directory = Some(app_dir.clone());
    }
    if let Some(sort) = cli.sort {
        config.sorting_type = sort.into();
    }

    config
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = env::current_dir().context("Failed to read current directory")?;
    let config = load_config(&cli, &cwd);
    let engine = Engine::new(&cwd, config);

    // Execute command
    match cli.command {
        Commands::Tree { flat } => {
            let mut config = engine.config();
            if flat {
                config.view_type = ViewType::Flat;
            }
            commands::tree::execute(&engine, config.view_type)?;
        }
        Commands::List { json, pages } => {
            commands::list::execute(&engine, json, pages)?;
        }
        Commands::Match { url } => {
            commands::lookup::execute(&engine, &url)?;
        }
        Commands::Watch => {
            commands::watch::execute(engine)?;
        }
    }

    Ok(())
}
