//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable overrides
//! for sensitive values like `MATCHDAY_API_KEY`.

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{ConfigError, Result};

mod game;
mod logging;
mod provider;
mod scoring;
mod service;

pub use game::{GameConfig, PlayerConfig};
pub use logging::LoggingConfig;
pub use provider::ProviderConfig;
pub use scoring::ScoringConfig;
pub use service::{ServiceConfig, StorageConfig};

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "MATCHDAY_API_KEY";

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub game: GameConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse(&content)?;

        // API key comes from the environment only
        config.provider.api_key = std::env::var(API_KEY_ENV).ok();

        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.service.poll_interval_secs == 0 {
            return Err(invalid("poll_interval_secs", "must be greater than zero"));
        }
        if self.service.fetch_timeout_ms == 0 {
            return Err(invalid("fetch_timeout_ms", "must be greater than zero"));
        }
        if self.storage.cache_capacity == 0 {
            return Err(invalid("cache_capacity", "must be greater than zero"));
        }
        if self.storage.bet_capacity == 0 {
            return Err(invalid("bet_capacity", "must be greater than zero"));
        }
        if self.provider.base_url.is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" }.into());
        }
        if self.game.id.is_empty() {
            return Err(ConfigError::MissingField { field: "game.id" }.into());
        }
        if self.game.competition.is_empty() {
            return Err(ConfigError::MissingField {
                field: "game.competition",
            }
            .into());
        }
        if self.game.season.is_empty() {
            return Err(ConfigError::MissingField {
                field: "game.season",
            }
            .into());
        }

        let scoring = &self.scoring;
        if scoring.draw_multiplier < Decimal::ONE {
            return Err(invalid("draw_multiplier", "must be at least 1"));
        }
        if scoring.outsider_multiplier < Decimal::ONE {
            return Err(invalid("outsider_multiplier", "must be at least 1"));
        }
        if scoring.favorite_margin < Decimal::ZERO || scoring.favorite_margin >= Decimal::ONE {
            return Err(invalid("favorite_margin", "must be in [0, 1)"));
        }
        if scoring.wrong_points > 0 {
            return Err(invalid("wrong_points", "must be zero or negative"));
        }
        if scoring.no_bet_points > 0 {
            return Err(invalid("no_bet_points", "must be zero or negative"));
        }
        if scoring.outcome_points > scoring.exact_points {
            return Err(invalid("outcome_points", "must not exceed exact_points"));
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

fn invalid(field: &'static str, reason: &str) -> crate::error::Error {
    ConfigError::InvalidValue {
        field,
        reason: reason.into(),
    }
    .into()
}
