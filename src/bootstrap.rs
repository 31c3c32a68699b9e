//! Wiring from configuration to a running [`GameService`].

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::provider::HttpMatchSource;
use crate::adapter::store::in_memory;
use crate::application::{Game, GameService};
use crate::config::Config;
use crate::domain::{ScoringRules, StandardScorer};
use crate::error::Result;
use crate::port::{MatchDataSource, Repositories, SystemClock, TimeService};

/// Build the game described by the `[game]` and `[scoring]` sections.
#[must_use]
pub fn build_game(config: &Config) -> Game {
    let rules: ScoringRules = config.scoring.clone().into();
    let mut game = Game::new(
        config.game.game_id(),
        config.game.competition.clone(),
        config.game.season.clone(),
        Arc::new(StandardScorer::new(rules)),
    );
    for player in config.game.roster() {
        game.add_player(player);
    }
    game
}

/// Build the HTTP provider source for the configured season.
#[must_use]
pub fn build_source(config: &Config) -> Arc<dyn MatchDataSource> {
    if config.provider.api_key.is_none() {
        warn!(
            env = crate::config::API_KEY_ENV,
            "No provider API key set, requests will be unauthenticated"
        );
    }
    Arc::new(HttpMatchSource::from_config(
        &config.provider,
        config.service.fetch_timeout_ms,
        config.game.competition.clone(),
        config.game.season.clone(),
    ))
}

/// Assemble and bootstrap a service from explicit collaborators.
pub fn build_service_with(
    config: &Config,
    repos: Repositories,
    source: Arc<dyn MatchDataSource>,
    clock: Arc<dyn TimeService>,
) -> Result<Arc<GameService>> {
    let service = GameService::new(
        build_game(config),
        repos,
        source,
        clock,
        config.service.fetch_timeout(),
    );
    service.bootstrap()?;
    info!(
        game = %config.game.id,
        competition = %config.game.competition,
        season = %config.game.season,
        players = config.game.players.len(),
        "Game service ready"
    );
    Ok(Arc::new(service))
}

/// Production wiring: in-memory repositories, HTTP provider, system clock.
pub fn build_service(config: &Config) -> Result<Arc<GameService>> {
    build_service_with(
        config,
        in_memory(config.storage.cache_capacity, config.storage.bet_capacity),
        build_source(config),
        Arc::new(SystemClock),
    )
}
