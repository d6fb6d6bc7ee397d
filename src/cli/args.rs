//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::commands::cache::CacheArgs;
use super::commands::config::ConfigArgs;

/// Skycast - Weather in your terminal and status bar.
#[derive(Debug, Parser)]
#[command(name = "skycast")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides the per-user config.json)
    #[arg(short, long, global = true, env = "SKYCAST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to cache file (overrides the per-user forecast cache)
    #[arg(long, global = true, env = "SKYCAST_CACHE_FILE")]
    pub cache_file: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the forecast (default if no command specified)
    Show(ShowArgs),

    /// Look up cities by name
    Search(SearchArgs),

    /// Print the forecast as waybar JSON
    Waybar,

    /// Show or change settings
    Config(ConfigArgs),

    /// Inspect or clear the forecast cache
    Cache(CacheArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ShowArgs {
    /// City to look up instead of the default
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub city: Option<String>,

    /// Latitude in decimal degrees
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Ignore a fresh cache entry and fetch live
    #[arg(long)]
    pub refresh: bool,

    /// Print the forecast as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `search` command.
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// City name, at least two characters
    pub query: String,

    /// Maximum number of results (defaults to `search_results` in settings)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Pick one of the results and save it as the default city
    #[arg(long)]
    pub set_default: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
