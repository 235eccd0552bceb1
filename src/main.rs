//! Main application entry point.
//!
//! A thin wrapper around the `visited_countries` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use visited_countries::initialization::init_logger_with;
use visited_countries::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so its values feed the env-backed options
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Ignoring unreadable .env file: {e}");
        }
    }

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run_server(config).await {
        log::error!("{e:#}");
        eprintln!("visited_countries error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}
