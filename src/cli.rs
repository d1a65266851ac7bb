//! Command-line interface argument parsing for top-racers.
//!
//! - `top-racers show --base-url "http://localhost:3000"`
//! - `top-racers list --timeout 5`

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

/// Base URL used when neither `--base-url` nor `TOP_RACERS_URL` is set
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// A terminal leaderboard of the top racers.
#[derive(Parser, Debug)]
#[command(name = "top-racers")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive leaderboard
    Show {
        /// Base URL of the racers API
        #[arg(short, long, env = "TOP_RACERS_URL")]
        base_url: Option<String>,

        /// Request timeout in seconds (transport default when omitted)
        #[arg(short, long)]
        timeout: Option<u64>,

        /// Directory for the log file
        /// Defaults to the platform cache directory
        #[arg(long)]
        log_dir: Option<String>,
    },
    /// Fetch the leaderboard once and print it
    List {
        /// Base URL of the racers API
        #[arg(short, long, env = "TOP_RACERS_URL")]
        base_url: Option<String>,

        /// Request timeout in seconds (transport default when omitted)
        #[arg(short, long)]
        timeout: Option<u64>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from the `show` subcommand
    pub fn from_show_command(
        base_url: Option<String>,
        timeout: Option<u64>,
        log_dir: Option<String>,
    ) -> Self {
        let log_dir = log_dir
            .map(PathBuf::from)
            .unwrap_or_else(default_log_dir);

        AppConfig {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: timeout.map(Duration::from_secs),
            log_dir,
        }
    }

    /// Create AppConfig from the `list` subcommand
    pub fn from_list_command(base_url: Option<String>, timeout: Option<u64>) -> Self {
        Self::from_show_command(base_url, timeout, None)
    }
}

fn default_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("top-racers")
}
