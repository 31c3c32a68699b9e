//! A single fixture: identity, schedule, score, odds and status lifecycle.
//!
//! A [`Match`] is one record for every stage of its life. It starts
//! `Scheduled`, is updated on every poll while scheduled or in play, and
//! freezes once `Finished`: from then on every update is ignored.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::warn;

use super::error::DomainError;
use super::id::MatchKey;
use super::odds::Odds;
use super::score::{extract_score, Score, ScoreFragment, ScoreSource, Side};
use super::status::MatchStatus;
use super::update::FixtureUpdate;

/// Minimum implied-probability lead for a side to count as favorite.
pub const DEFAULT_FAVORITE_MARGIN: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

#[derive(Debug, Clone)]
pub struct Match {
    key: MatchKey,
    /// Provider fixture id; cached for lookups, never part of identity.
    external_id: Option<u64>,
    kickoff: DateTime<Utc>,
    status: MatchStatus,
    /// Raw provider code of the latest in-play state, for display only.
    phase_label: Option<String>,
    goals: Option<Score>,
    score_source: Option<ScoreSource>,
    /// Last odds seen before kickoff.
    odds: Option<Odds>,
}

/// What an applied update changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchChange {
    pub status: Option<(MatchStatus, MatchStatus)>,
    pub score: bool,
    pub odds: bool,
    pub kickoff: bool,
}

impl MatchChange {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && !self.score && !self.odds && !self.kickoff
    }

    /// Whether this update moved the match into `Finished`.
    #[must_use]
    pub const fn finished(&self) -> bool {
        matches!(self.status, Some((_, MatchStatus::Finished)))
    }
}

impl Match {
    /// A newly discovered fixture.
    #[must_use]
    pub fn new(key: MatchKey, kickoff: DateTime<Utc>) -> Self {
        Self {
            key,
            external_id: None,
            kickoff,
            status: MatchStatus::Scheduled,
            phase_label: None,
            goals: None,
            score_source: None,
            odds: None,
        }
    }

    #[must_use]
    pub fn with_odds(mut self, odds: Odds) -> Self {
        self.odds = Some(odds);
        self
    }

    #[must_use]
    pub fn with_external_id(mut self, id: u64) -> Self {
        self.external_id = Some(id);
        self
    }

    /// Build a match from its first provider snapshot.
    pub fn from_update(update: &FixtureUpdate) -> Result<Self, DomainError> {
        let mut fixture = Self::new(update.key(), update.kickoff);
        fixture.apply(update)?;
        Ok(fixture)
    }

    #[must_use]
    pub const fn key(&self) -> &MatchKey {
        &self.key
    }

    #[must_use]
    pub fn home_team(&self) -> &str {
        self.key.home_team()
    }

    #[must_use]
    pub fn away_team(&self) -> &str {
        self.key.away_team()
    }

    #[must_use]
    pub fn competition(&self) -> &str {
        self.key.competition()
    }

    #[must_use]
    pub fn season(&self) -> &str {
        self.key.season()
    }

    #[must_use]
    pub const fn matchday(&self) -> u32 {
        self.key.matchday()
    }

    #[must_use]
    pub const fn external_id(&self) -> Option<u64> {
        self.external_id
    }

    #[must_use]
    pub const fn kickoff(&self) -> DateTime<Utc> {
        self.kickoff
    }

    #[must_use]
    pub const fn status(&self) -> MatchStatus {
        self.status
    }

    #[must_use]
    pub fn phase_label(&self) -> Option<&str> {
        self.phase_label.as_deref()
    }

    #[must_use]
    pub const fn goals(&self) -> Option<Score> {
        self.goals
    }

    #[must_use]
    pub const fn score_source(&self) -> Option<ScoreSource> {
        self.score_source
    }

    #[must_use]
    pub const fn odds(&self) -> Option<Odds> {
        self.odds
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    #[must_use]
    pub const fn is_in_progress(&self) -> bool {
        self.status.is_started()
    }

    /// True only for a finished match that ended level.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.is_finished() && self.goals.is_some_and(|g| g.home == g.away)
    }

    /// The favored side by pre-match odds, if the lead is at least `margin`.
    #[must_use]
    pub fn favorite_side(&self, margin: Decimal) -> Option<Side> {
        self.odds.and_then(|odds| odds.favorite(margin))
    }

    #[must_use]
    pub fn has_clear_favorite(&self, margin: Decimal) -> bool {
        self.favorite_side(margin).is_some()
    }

    /// Name of the favored team, if there is a clear favorite.
    #[must_use]
    pub fn favorite_team(&self, margin: Decimal) -> Option<&str> {
        match self.favorite_side(margin)? {
            Side::Home => Some(self.home_team()),
            Side::Away => Some(self.away_team()),
        }
    }

    /// Move the status forward from an upstream code.
    ///
    /// Unknown codes are rejected without mutation. Codes for an earlier stage
    /// than the current one are a no-op. A match that finishes without any
    /// score on record is settled at a defaulted 0-0. Returns the status after
    /// the call.
    pub fn update_status(&mut self, code: &str) -> Result<MatchStatus, DomainError> {
        let next = MatchStatus::from_code(code)?;
        if next > self.status {
            self.status = next;
        }
        if self.status.is_finished() && self.goals.is_none() {
            warn!(
                error = %DomainError::InconsistentScoreData(self.key.clone()),
                status = %code,
                "Finished match has no score, defaulting to 0-0"
            );
            self.goals = Some(Score::default());
            self.score_source = Some(ScoreSource::Defaulted);
        }
        if next.is_started() && self.status.is_started() {
            self.phase_label = Some(code.trim().to_ascii_uppercase());
        }
        Ok(self.status)
    }

    /// Replace the score from upstream fragments.
    ///
    /// Ignored once the match is finished, and for a scheduled match that has
    /// no fragments at all. Returns the source the score was read from.
    pub fn update_score(&mut self, fragments: &[ScoreFragment]) -> Option<ScoreSource> {
        if self.is_finished() || (self.status.is_scheduled() && fragments.is_empty()) {
            return None;
        }
        let extracted = extract_score(fragments);
        self.goals = Some(extracted.score);
        self.score_source = Some(extracted.source);
        Some(extracted.source)
    }

    /// Record pre-match odds. Ignored once the match has kicked off.
    pub fn update_odds(&mut self, odds: Odds) -> bool {
        if !self.status.is_scheduled() || self.odds == Some(odds) {
            return false;
        }
        self.odds = Some(odds);
        true
    }

    /// Apply a full provider snapshot.
    ///
    /// The status code is validated first so an unknown code rejects the whole
    /// snapshot. Odds and kickoff are taken only while the snapshot still
    /// reports the match as scheduled; the score is taken once it is in play.
    pub fn apply(&mut self, update: &FixtureUpdate) -> Result<MatchChange, DomainError> {
        let target = MatchStatus::from_code(&update.status)?;
        let mut change = MatchChange::default();

        if self.is_finished() {
            return Ok(change);
        }

        if let Some(id) = update.external_id {
            self.external_id = Some(id);
        }

        if self.status.is_scheduled() && target.is_scheduled() {
            if let Some(odds) = update.odds {
                change.odds = self.update_odds(odds);
            }
            if self.kickoff != update.kickoff {
                self.kickoff = update.kickoff;
                change.kickoff = true;
            }
        }

        let before = self.status;
        let previous_goals = self.goals;
        if target > MatchStatus::Scheduled {
            let extracted = extract_score(&update.scores);
            self.goals = Some(extracted.score);
            self.score_source = Some(extracted.source);
            if target.is_finished() && extracted.source.is_defaulted() {
                warn!(
                    error = %DomainError::InconsistentScoreData(self.key.clone()),
                    status = %update.status,
                    "Finished match has no usable score fragments"
                );
            }
        }
        change.score = self.goals != previous_goals;

        let after = self.update_status(&update.status)?;
        if after != before {
            change.status = Some((before, after));
        }

        Ok(change)
    }
}

/// Fixtures are the same when their composite keys match.
impl PartialEq for Match {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Match {}
