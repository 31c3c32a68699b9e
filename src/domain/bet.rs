//! A player's score prediction for one fixture.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::fixture::Match;
use super::id::{MatchKey, PlayerId};
use super::score::{Outcome, Score};

/// A prediction. Holds no scoring logic; see [`Scorer`](super::scoring::Scorer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    match_key: MatchKey,
    player_id: PlayerId,
    predicted: Score,
    placed_at: DateTime<Utc>,
}

impl Bet {
    /// Validate and build a bet from signed input.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeGoals`] if either prediction is negative.
    pub fn try_new(
        match_key: MatchKey,
        player_id: PlayerId,
        home_goals: i64,
        away_goals: i64,
        placed_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let negative = || DomainError::NegativeGoals {
            home: home_goals,
            away: away_goals,
        };
        let home = u32::try_from(home_goals).map_err(|_| negative())?;
        let away = u32::try_from(away_goals).map_err(|_| negative())?;
        Ok(Self {
            match_key,
            player_id,
            predicted: Score::new(home, away),
            placed_at,
        })
    }

    #[must_use]
    pub const fn match_key(&self) -> &MatchKey {
        &self.match_key
    }

    #[must_use]
    pub const fn player_id(&self) -> &PlayerId {
        &self.player_id
    }

    #[must_use]
    pub const fn predicted(&self) -> Score {
        self.predicted
    }

    #[must_use]
    pub const fn home_goals(&self) -> u32 {
        self.predicted.home
    }

    #[must_use]
    pub const fn away_goals(&self) -> u32 {
        self.predicted.away
    }

    #[must_use]
    pub const fn predicted_outcome(&self) -> Outcome {
        self.predicted.outcome()
    }

    #[must_use]
    pub const fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    /// A bet can change only while its match is scheduled and kickoff is
    /// strictly in the future.
    #[must_use]
    pub fn is_modifiable(fixture: &Match, now: DateTime<Utc>) -> bool {
        fixture.status().is_scheduled() && fixture.kickoff() > now
    }
}
