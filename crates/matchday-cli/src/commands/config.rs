use std::time::Duration;

use anyhow::Result;
use clap::Subcommand;
use matchday_core::{ApiClient, Config};

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration and where it is stored
    Show,
    /// Persist the backend base URL
    SetBaseUrl { url: String },
    /// Persist the default stadium map filter; omitted values are cleared
    SetMapFilter {
        #[arg(long)]
        min_capacity: Option<u32>,
        #[arg(long)]
        community: Option<String>,
    },
}

pub fn run(command: ConfigCommand, effective: &Config) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            println!("# {}", Config::config_path()?.display());
            println!("{}", serde_json::to_string_pretty(effective)?);
            Ok(())
        }
        ConfigCommand::SetBaseUrl { url } => {
            // Reject URLs the client could not use before writing them
            ApiClient::new(&url, Duration::from_secs(effective.request_timeout_secs))?;
            let mut stored = Config::load_file()?;
            stored.base_url = url.trim_end_matches('/').to_string();
            stored.save()?;
            println!("Base URL set to {}", stored.base_url);
            Ok(())
        }
        ConfigCommand::SetMapFilter {
            min_capacity,
            community,
        } => {
            let mut stored = Config::load_file()?;
            stored.default_min_capacity = min_capacity;
            stored.default_community = community.filter(|c| !c.trim().is_empty());
            stored.save()?;
            println!("Map filter saved");
            Ok(())
        }
    }
}
