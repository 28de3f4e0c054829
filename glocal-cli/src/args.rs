//! Command argument structures
//!
//! This module contains all CLI argument structs organized by command category.

use clap::Args;
use std::path::PathBuf;

/// Searcher position shared by the search commands
#[derive(Args, Debug, Clone, Default)]
pub struct LocationArgs {
    /// Searcher latitude
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Searcher longitude
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Search radius in kilometers (0 disables the radius filter)
    #[arg(long, default_value_t = 0.0)]
    pub radius: f64,
}

// Search command arguments
#[derive(Args, Debug)]
pub struct SearchRankArgs {
    /// JSON file containing an array of search results
    pub file: PathBuf,

    /// Search query text
    #[arg(long, default_value = "")]
    pub query: String,

    /// Sort order (relevance, distance, date, popularity, rating)
    #[arg(long, short, default_value = "relevance")]
    pub sort: String,

    /// Only keep results of this type (artist, event, post, group)
    #[arg(long = "type", short = 't')]
    pub content_type: Option<String>,

    #[command(flatten)]
    pub location: LocationArgs,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Results per page (defaults to the configured page size)
    #[arg(long, short)]
    pub limit: Option<usize>,
}

#[derive(Args, Debug)]
pub struct SearchScoreArgs {
    /// JSON file containing an array of search results
    pub file: PathBuf,

    /// Search query text
    #[arg(long)]
    pub query: String,

    /// Only score the result with this ID
    #[arg(long)]
    pub id: Option<String>,

    #[command(flatten)]
    pub location: LocationArgs,
}

#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Partial query to complete
    #[arg(default_value = "")]
    pub query: String,

    /// Previous searches, most recent first
    #[arg(long = "history", short = 'H')]
    pub history: Vec<String>,

    /// Maximum number of suggestions (defaults to the configured limit)
    #[arg(long, short)]
    pub limit: Option<usize>,
}

#[derive(Args, Debug)]
pub struct DistanceArgs {
    #[arg(allow_negative_numbers = true)]
    pub lat1: f64,

    #[arg(allow_negative_numbers = true)]
    pub lon1: f64,

    #[arg(allow_negative_numbers = true)]
    pub lat2: f64,

    #[arg(allow_negative_numbers = true)]
    pub lon2: f64,
}

// Trending command arguments
#[derive(Args, Debug)]
pub struct TrendingRankArgs {
    /// JSON file containing an array of trending content
    pub file: PathBuf,

    /// Trending period (hour, day, week, month); defaults to the configured period
    #[arg(long, short)]
    pub period: Option<String>,

    /// Maximum number of items to show
    #[arg(long, short)]
    pub limit: Option<usize>,

    /// Drop items whose quality score is below this value
    #[arg(long)]
    pub min_quality: Option<f64>,
}

#[derive(Args, Debug)]
pub struct TrendingFileArgs {
    /// JSON file containing an array of trending content
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct VelocityArgs {
    /// JSON file containing a chronological array of {timestamp, engagement} samples
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[clap(name = "powershell")]
    Power,
    Elvish,
}

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::Power => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
