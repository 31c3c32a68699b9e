//! A season-long prediction game.
//!
//! [`Game`] owns the season's fixtures, the roster and every awarded
//! [`ScoreEntry`]. It places bets through a [`BetRepository`], folds provider
//! snapshots into its fixtures, and scores newly finished matches exactly once.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::domain::error::DomainError;
use crate::domain::{
    Bet, FixtureUpdate, GameId, GameRecord, Leaderboard, Match, MatchChange, MatchKey, Player,
    PlayerId, ScoreEntry, Scorer,
};
use crate::error::{Error, Result};
use crate::port::BetRepository;

/// Outcome of folding one provider snapshot into the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Created,
    Updated(MatchChange),
    Unchanged,
}

/// Totals for one batch of provider snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub created: usize,
    pub updated: usize,
    pub rejected: usize,
    pub finished: usize,
    /// Keys of matches that were created or changed.
    pub changed: Vec<MatchKey>,
}

pub struct Game {
    id: GameId,
    competition: String,
    season: String,
    matches: BTreeMap<MatchKey, Match>,
    players: BTreeMap<PlayerId, Player>,
    scorer: Arc<dyn Scorer>,
    entries: Vec<ScoreEntry>,
    /// Matches that have been evaluated.
    settled: BTreeSet<MatchKey>,
    /// (match, player) pairs that already have an entry.
    scored: HashSet<(MatchKey, PlayerId)>,
}

impl Game {
    pub fn new(
        id: GameId,
        competition: impl Into<String>,
        season: impl Into<String>,
        scorer: Arc<dyn Scorer>,
    ) -> Self {
        Self {
            id,
            competition: competition.into(),
            season: season.into(),
            matches: BTreeMap::new(),
            players: BTreeMap::new(),
            scorer,
            entries: Vec::new(),
            settled: BTreeSet::new(),
            scored: HashSet::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> &GameId {
        &self.id
    }

    #[must_use]
    pub fn competition(&self) -> &str {
        &self.competition
    }

    #[must_use]
    pub fn season(&self) -> &str {
        &self.season
    }

    /// What a game repository stores for this game.
    #[must_use]
    pub fn record(&self) -> GameRecord {
        GameRecord {
            id: self.id.clone(),
            competition: self.competition.clone(),
            season: self.season.clone(),
            players: self.players.keys().cloned().collect(),
        }
    }

    /// Add a player to the roster, replacing an existing profile with the same id.
    pub fn add_player(&mut self, player: Player) {
        self.players.insert(player.id.clone(), player);
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Add a fixture, or replace the known copy with a fresher one.
    ///
    /// A known fixture is kept when it is finished or further along than the
    /// incoming copy, so replacing never moves a status backwards.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ForeignFixture`] for another competition or season.
    pub fn add_match(&mut self, fixture: Match) -> std::result::Result<(), DomainError> {
        self.check_season(fixture.key())?;
        if let Some(known) = self.matches.get(fixture.key()) {
            if known.is_finished() || known.status() > fixture.status() {
                debug!(
                    fixture = %fixture.key(),
                    known = %known.status(),
                    incoming = %fixture.status(),
                    "Keeping fresher copy of fixture"
                );
                return Ok(());
            }
        }
        self.matches.insert(fixture.key().clone(), fixture);
        Ok(())
    }

    /// Fixtures in key order.
    pub fn matches(&self) -> impl Iterator<Item = &Match> {
        self.matches.values()
    }

    #[must_use]
    pub fn get_match(&self, key: &MatchKey) -> Option<&Match> {
        self.matches.get(key)
    }

    /// The season is over once every known fixture is finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.matches.is_empty() && self.matches.values().all(Match::is_finished)
    }

    fn check_season(&self, key: &MatchKey) -> std::result::Result<(), DomainError> {
        if key.belongs_to(&self.competition, &self.season) {
            Ok(())
        } else {
            Err(DomainError::ForeignFixture {
                key: key.clone(),
                competition: self.competition.clone(),
                season: self.season.clone(),
            })
        }
    }

    /// Fold one provider snapshot into the game.
    ///
    /// A fixture seen for the first time is created. Invalid snapshots are
    /// rejected whole and leave the fixture untouched.
    pub fn apply_update(
        &mut self,
        update: &FixtureUpdate,
    ) -> std::result::Result<Applied, DomainError> {
        let key = update.key();
        self.check_season(&key)?;

        if let Some(fixture) = self.matches.get_mut(&key) {
            let change = fixture.apply(update)?;
            return Ok(if change.is_empty() {
                Applied::Unchanged
            } else {
                Applied::Updated(change)
            });
        }

        let fixture = Match::from_update(update)?;
        debug!(fixture = %key, status = %fixture.status(), "Discovered fixture");
        self.matches.insert(key, fixture);
        Ok(Applied::Created)
    }

    /// Fold a batch of snapshots, skipping (and logging) rejected ones.
    pub fn apply_updates(&mut self, updates: &[FixtureUpdate]) -> SyncReport {
        let mut report = SyncReport::default();
        for update in updates {
            match self.apply_update(update) {
                Ok(Applied::Created) => {
                    report.created += 1;
                    if self.get_match(&update.key()).is_some_and(Match::is_finished) {
                        report.finished += 1;
                    }
                    report.changed.push(update.key());
                }
                Ok(Applied::Updated(change)) => {
                    report.updated += 1;
                    if change.finished() {
                        report.finished += 1;
                        info!(fixture = %update.key(), "Match finished");
                    }
                    report.changed.push(update.key());
                }
                Ok(Applied::Unchanged) => {}
                Err(err) => {
                    report.rejected += 1;
                    warn!(error = %err, fixture = %update.key(), "Rejected fixture update");
                }
            }
        }
        report
    }

    /// Place or replace a player's bet.
    ///
    /// # Errors
    ///
    /// - [`DomainError::UnknownPlayer`] / [`DomainError::UnknownMatch`] for ids
    ///   outside this game
    /// - [`DomainError::NegativeGoals`] for negative predictions
    /// - [`Error::NotModifiable`] once `now` has reached kickoff or the match
    ///   has started
    pub fn place_bet(
        &self,
        bets: &dyn BetRepository,
        player: &PlayerId,
        match_key: &MatchKey,
        home_goals: i64,
        away_goals: i64,
        now: DateTime<Utc>,
    ) -> Result<Bet> {
        if !self.players.contains_key(player) {
            return Err(DomainError::UnknownPlayer(player.clone()).into());
        }
        let fixture = self
            .matches
            .get(match_key)
            .ok_or_else(|| DomainError::UnknownMatch(match_key.clone()))?;

        let bet = Bet::try_new(match_key.clone(), player.clone(), home_goals, away_goals, now)?;

        if !Bet::is_modifiable(fixture, now) {
            return Err(Error::NotModifiable {
                match_key: match_key.clone(),
                kickoff: fixture.kickoff(),
                status: fixture.status(),
            });
        }

        bets.save(&self.id, bet.clone())?;
        debug!(player = %player, fixture = %match_key, prediction = %bet.predicted(), "Bet placed");
        Ok(bet)
    }

    /// Score every finished match that has not been scored yet.
    ///
    /// Returns only the entries created by this call; calling again on the
    /// same state returns nothing. A match whose bets cannot be read or scored
    /// is logged and left pending for the next call, without holding back the
    /// other matches.
    pub fn evaluate_finished_matches(&mut self, bets: &dyn BetRepository) -> Vec<ScoreEntry> {
        let pending: Vec<MatchKey> = self
            .matches
            .values()
            .filter(|m| m.is_finished() && !self.settled.contains(m.key()))
            .map(|m| m.key().clone())
            .collect();

        let mut created = Vec::new();
        for key in pending {
            match self.score_match(bets, &key) {
                Ok(entries) => {
                    for entry in &entries {
                        self.scored.insert(entry.pair());
                    }
                    self.entries.extend(entries.iter().cloned());
                    self.settled.insert(key);
                    created.extend(entries);
                }
                Err(err) => {
                    warn!(error = %err, fixture = %key, "Scoring failed, will retry next cycle");
                }
            }
        }
        created
    }

    fn score_match(&self, bets: &dyn BetRepository, key: &MatchKey) -> Result<Vec<ScoreEntry>> {
        let fixture = self
            .matches
            .get(key)
            .ok_or_else(|| DomainError::UnknownMatch(key.clone()))?;
        let roster: Vec<PlayerId> = self
            .players
            .keys()
            .filter(|player| !self.scored.contains(&(key.clone(), (*player).clone())))
            .cloned()
            .collect();

        let placed = bets.for_match(&self.id, key)?;
        let awards = self.scorer.score_match(fixture, &roster, &placed)?;

        info!(
            fixture = %key,
            score = %fixture.goals().unwrap_or_default(),
            bets = placed.len(),
            scorer = self.scorer.name(),
            "Scoring finished match"
        );

        Ok(awards
            .into_iter()
            .map(|(player, award)| {
                debug!(fixture = %key, player = %player, award = %award, "Awarded");
                ScoreEntry::new(self.id.clone(), key.clone(), player, award)
            })
            .collect())
    }

    /// Rehydrate previously persisted entries. Entries of other games and
    /// pairs already present are ignored.
    pub fn restore_entries(&mut self, entries: Vec<ScoreEntry>) {
        for entry in entries {
            if entry.game_id != self.id || self.scored.contains(&entry.pair()) {
                continue;
            }
            self.scored.insert(entry.pair());
            self.settled.insert(entry.match_key.clone());
            self.entries.push(entry);
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Standings over every entry awarded so far.
    #[must_use]
    pub fn leaderboard(&self) -> Leaderboard {
        Leaderboard::compute(self.players.values(), &self.entries)
    }
}
