//! Command enum definitions
//!
//! This module contains the top-level parser and all command enums that
//! define the command structure.

use crate::args::*;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "glocal-cli")]
#[command(about = "Rank search results and trending content for TheGlocal", long_about = None)]
#[command(version = glocal::VERSION)]
pub struct Cli {
    /// Configuration file (toml, yaml or json)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json) - use json for tool integration
    #[arg(long, short, default_value = "table", global = true)]
    pub output: String,

    /// Use machine-readable output (alias for --output json)
    #[arg(long, global = true)]
    pub machine: bool,

    /// Verbose output (debug level logging)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode (suppress all logging output)
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display version information
    Version,

    /// Search relevance commands
    #[command(subcommand)]
    Search(SearchCommands),

    /// Trending content commands
    #[command(subcommand)]
    Trending(TrendingCommands),

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Subcommand, Debug)]
pub enum SearchCommands {
    /// Filter, rank and paginate search results from a JSON file
    Rank(SearchRankArgs),

    /// Show the per-axis relevance breakdown for each result
    #[command(
        long_about = r#"
Show how each result scores against a query.

AXES (weights are configurable):
  • text       - title, description and tag matches (0-20)
  • location   - distance band and place-name match (0-15)
  • category   - neutral placeholder (5)
  • engagement - likes, comments, shares and views (0-10)
  • freshness  - age bands from an hour to a month (2-10)
"#
    )]
    Score(SearchScoreArgs),

    /// Suggest completions for a partial query
    Suggest(SuggestArgs),

    /// Great-circle distance in kilometers between two points
    Distance(DistanceArgs),
}

#[derive(Subcommand, Debug)]
pub enum TrendingCommands {
    /// Rank content from a JSON file by trending score
    #[command(
        long_about = r#"
Rank content by trending score for a period.

PERIODS:
  • hour  - favors velocity
  • day   - balanced
  • week  - favors engagement and category
  • month - favors cumulative engagement and quality
"#
    )]
    Rank(TrendingRankArgs),

    /// Classify each item as rising, stable or declining
    Pattern(TrendingFileArgs),

    /// Describe where each item is heading
    Insights(TrendingFileArgs),

    /// Velocity and momentum of an engagement history
    Velocity(VelocityArgs),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
}
