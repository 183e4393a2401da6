//! matchday - manage a football club's squad, stadiums and fixtures from the
//! terminal.
//!
//! Every data command mirrors the web client: it fetches players, places and
//! events from the Remote Store once, then reads from or mutates the cache.

mod commands;
mod output;

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use matchday_core::{ApiClient, Config, DataCache};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::config::ConfigCommand;
use commands::events::EventsCommand;
use commands::places::PlacesCommand;
use commands::players::PlayersCommand;

#[derive(Parser, Debug)]
#[command(name = "matchday", version, about = "Manage a football club's players, stadiums and fixtures")]
struct Cli {
    /// Remote Store base URL, overriding the config file and MATCHDAY_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Squad roster
    #[command(subcommand)]
    Players(PlayersCommand),
    /// Stadiums and the stadium map
    #[command(subcommand)]
    Places(PlacesCommand),
    /// Fixtures and the fixture calendar
    #[command(subcommand)]
    Events(EventsCommand),
    /// Fixture statistics
    Charts,
    /// Local settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Build the cache and run the initial fetch of all three collections.
/// Fetch failures are reported but do not stop the command.
async fn load_cache(config: &Config) -> Result<DataCache<ApiClient>> {
    let cache = DataCache::new(ApiClient::from_config(config)?);
    let report = cache.initialize().await;

    if !report.all_applied() {
        let errors = [
            cache.players().error(),
            cache.places().error(),
            cache.events().error(),
        ];
        for error in errors.into_iter().flatten() {
            eprintln!("warning: {}", error);
        }
    }
    Ok(cache)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();
    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }
    info!(base_url = %config.base_url, "matchday starting");

    let result = match cli.command {
        Command::Players(cmd) => commands::players::run(&load_cache(&config).await?, cmd).await,
        Command::Places(cmd) => {
            commands::places::run(&load_cache(&config).await?, cmd, &config).await
        }
        Command::Events(cmd) => commands::events::run(&load_cache(&config).await?, cmd).await,
        Command::Charts => commands::charts::run(&load_cache(&config).await?),
        Command::Config(cmd) => commands::config::run(cmd, &config),
    };
    result
}
