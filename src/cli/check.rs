//! Configuration validation command.

use std::path::Path;

use crate::config::{Config, API_KEY_ENV};

/// Validate configuration file without starting the poller.
pub fn execute_config<P: AsRef<Path>>(config_path: P) {
    let path = config_path.as_ref();
    println!("Checking configuration: {}", path.display());
    println!();

    if !path.exists() {
        eprintln!("Error: Configuration file not found: {}", path.display());
        std::process::exit(1);
    }

    match Config::load(path) {
        Ok(config) => {
            println!("✓ Configuration file is valid");
            println!();
            println!("Summary:");
            println!("  Game: {}", config.game.id);
            println!("  Season: {} {}", config.game.competition, config.game.season);
            println!("  Players: {}", config.game.players.len());
            println!("  Provider: {}", config.provider.base_url);
            println!("  Poll interval: {}s", config.service.poll_interval_secs);
            println!("  Fetch timeout: {}ms", config.service.fetch_timeout_ms);
            println!();

            if config.provider.api_key.is_some() {
                println!("✓ Provider API key found (from {API_KEY_ENV} env var)");
            } else {
                println!("⚠ No provider API key configured");
                println!("  Set {API_KEY_ENV} environment variable");
            }
            if config.game.players.is_empty() {
                println!("⚠ Roster is empty, nobody will be scored");
            }
        }
        Err(e) => {
            eprintln!("✗ Configuration error: {e}");
            std::process::exit(1);
        }
    }
}
