//! Fixture snapshots as delivered by the upstream provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::MatchKey;
use super::odds::Odds;
use super::score::ScoreFragment;

/// Everything the provider reports about one fixture in one poll.
///
/// Odds are already reduced to a single triplet by the adapter's bookmaker
/// selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureUpdate {
    #[serde(default)]
    pub external_id: Option<u64>,
    pub competition: String,
    pub season: String,
    pub home_team: String,
    pub away_team: String,
    pub matchday: u32,
    pub kickoff: DateTime<Utc>,
    /// Raw upstream status code.
    pub status: String,
    #[serde(default)]
    pub scores: Vec<ScoreFragment>,
    #[serde(default)]
    pub odds: Option<Odds>,
}

impl FixtureUpdate {
    #[must_use]
    pub fn key(&self) -> MatchKey {
        MatchKey::new(
            self.competition.clone(),
            self.season.clone(),
            self.home_team.clone(),
            self.away_team.clone(),
            self.matchday,
        )
    }
}
