//! Storable summary of a prediction game.

use serde::{Deserialize, Serialize};

use super::id::{GameId, PlayerId};

/// What a game repository persists: identity, season and roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub competition: String,
    pub season: String,
    pub players: Vec<PlayerId>,
}
