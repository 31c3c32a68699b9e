//! Persistence ports.
//!
//! Repositories are synchronous and assume at most one writer per key. The
//! core never depends on a concrete storage engine.

use std::sync::Arc;

use crate::domain::{Bet, GameId, GameRecord, Match, MatchKey, Player, PlayerId, ScoreEntry};
use crate::error::Result;

/// Storage operations for bets, scoped by game.
pub trait BetRepository: Send + Sync {
    /// Save a bet, replacing the player's previous bet on the same match.
    fn save(&self, game: &GameId, bet: Bet) -> Result<()>;

    /// Get one player's bet on one match.
    fn get(&self, game: &GameId, player: &PlayerId, match_key: &MatchKey) -> Result<Option<Bet>>;

    /// All bets of a player in a game.
    fn for_player(&self, game: &GameId, player: &PlayerId) -> Result<Vec<Bet>>;

    /// All bets placed on a match in a game.
    fn for_match(&self, game: &GameId, match_key: &MatchKey) -> Result<Vec<Bet>>;
}

/// Storage operations for fixtures.
pub trait MatchRepository: Send + Sync {
    /// Save a match, replacing if it exists.
    fn save(&self, fixture: &Match) -> Result<()>;

    fn get(&self, key: &MatchKey) -> Result<Option<Match>>;

    /// All matches of a competition season, ordered by kickoff.
    fn list(&self, competition: &str, season: &str) -> Result<Vec<Match>>;
}

/// Storage operations for games.
pub trait GameRepository: Send + Sync {
    fn save(&self, game: &GameRecord) -> Result<()>;

    fn get(&self, id: &GameId) -> Result<Option<GameRecord>>;

    fn list(&self) -> Result<Vec<GameRecord>>;
}

/// Storage operations for players.
pub trait PlayerRepository: Send + Sync {
    fn save(&self, player: &Player) -> Result<()>;

    fn get(&self, id: &PlayerId) -> Result<Option<Player>>;

    fn list(&self) -> Result<Vec<Player>>;
}

/// Storage operations for score entries.
pub trait ScoreRepository: Send + Sync {
    /// Append entries. An entry for an already-stored (game, match, player)
    /// triple replaces the stored one.
    fn save_all(&self, entries: &[ScoreEntry]) -> Result<()>;

    fn for_game(&self, game: &GameId) -> Result<Vec<ScoreEntry>>;

    fn for_player(&self, game: &GameId, player: &PlayerId) -> Result<Vec<ScoreEntry>>;
}

/// The repositories a game service is wired with.
#[derive(Clone)]
pub struct Repositories {
    pub bets: Arc<dyn BetRepository>,
    pub matches: Arc<dyn MatchRepository>,
    pub games: Arc<dyn GameRepository>,
    pub players: Arc<dyn PlayerRepository>,
    pub scores: Arc<dyn ScoreRepository>,
}
