//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

use crate::catalog::Catalog;

/// appshelf - browse, select and install system applications from a curated catalog
#[derive(Parser, Debug, Default)]
#[command(name = "appshelf")]
#[command(version)]
#[command(about = "Browse, select and install system applications from a curated catalog", long_about = None)]
pub struct Args {
    /// Log the package-manager commands instead of running them
    #[arg(long)]
    pub dry_run: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Load the catalog from this TOML file instead of the configured/built-in one
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Print the catalog grouped by category as JSON and exit
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Print applications matching QUERY (name and description words) and exit
    #[arg(short, long, value_name = "QUERY")]
    pub search: Option<String>,
}

/// What: Handle early-exit flags before the TUI starts.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `catalog`: Loaded catalog
///
/// Output:
/// - Returns normally when the TUI should start; exits the process for `--list` / `--search`.
pub fn process_args(args: &Args, catalog: &Catalog) {
    use crate::args::{list, search};

    if args.list {
        list::handle_list(catalog);
    }
    if let Some(query) = &args.search {
        search::handle_search(catalog, query);
    }
}
