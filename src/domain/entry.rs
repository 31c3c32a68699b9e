//! Persisted point awards.

use serde::{Deserialize, Serialize};

use super::id::{GameId, MatchKey, PlayerId};
use super::scoring::{Award, AwardKind, Bonus};

/// Points for one player on one finished match of one game.
///
/// Written exactly once per (match, player) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub game_id: GameId,
    pub match_key: MatchKey,
    pub player_id: PlayerId,
    pub points: i64,
    pub kind: AwardKind,
    pub bonus: Bonus,
}

impl ScoreEntry {
    #[must_use]
    pub fn new(game_id: GameId, match_key: MatchKey, player_id: PlayerId, award: Award) -> Self {
        Self {
            game_id,
            match_key,
            player_id,
            points: award.points,
            kind: award.kind,
            bonus: award.bonus,
        }
    }

    /// The (match, player) pair this entry settles.
    #[must_use]
    pub fn pair(&self) -> (MatchKey, PlayerId) {
        (self.match_key.clone(), self.player_id.clone())
    }
}
