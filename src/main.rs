//! top-racers: a terminal leaderboard of the top racers
//!
//! Fetches the leaderboard from `GET /api/top-racers` once and shows it in a
//! keyboard-driven dashboard with session-only bookmarks.

mod app;
mod cli;
mod data;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use cli::{AppConfig, Cli, Commands};
use data::RacerClient;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "top-racers.log";

/// Log to a file, since the terminal belongs to the dashboard
fn init_file_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {log_dir:?}"))?;
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(log_dir)
        .context("Failed to open log file")?;
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("top_racers=info")))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    Ok(guard)
}

/// Log warnings to stderr so stdout stays clean for the listing
fn init_stderr_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("top_racers=warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Show {
            base_url,
            timeout,
            log_dir,
        } => {
            let config = AppConfig::from_show_command(base_url, timeout, log_dir);
            let _guard = init_file_logging(&config.log_dir)?;
            tracing::info!("top-racers starting");

            // Run the TUI application
            app::run(config)?;
        }
        Commands::List { base_url, timeout } => {
            init_stderr_logging();
            let config = AppConfig::from_list_command(base_url, timeout);
            let client = RacerClient::new(config.base_url, config.timeout);

            let racers = client
                .fetch_top_racers()
                .with_context(|| format!("Failed to fetch {}", client.endpoint()))?;
            for (rank, racer) in racers.iter().enumerate() {
                println!("{}. {}", rank + 1, racer.summary());
            }
        }
    }

    Ok(())
}
