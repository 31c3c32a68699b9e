//! Entry point for one game: bets, standings and provider synchronisation.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tracing::{debug, error, info, warn};

use super::game::Game;
use crate::domain::{Bet, Leaderboard, Match, MatchKey, PlayerId, ScoreEntry};
use crate::error::{Error, FetchError, Result};
use crate::port::{MatchDataSource, Repositories, TimeService};

/// What one poll cycle did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub fetched: usize,
    pub created: usize,
    pub updated: usize,
    pub rejected: usize,
    pub finished: usize,
    pub awarded: usize,
}

/// Serialises every mutation of a [`Game`] behind one lock.
///
/// Placing a bet reads the clock and checks kickoff under the write lock, and
/// a poll cycle applies, scores and persists under the same lock, so a bet can
/// never slip in between a match starting and its evaluation.
pub struct GameService {
    game: RwLock<Game>,
    repos: Repositories,
    source: Arc<dyn MatchDataSource>,
    clock: Arc<dyn TimeService>,
    fetch_timeout: Duration,
}

impl GameService {
    pub fn new(
        game: Game,
        repos: Repositories,
        source: Arc<dyn MatchDataSource>,
        clock: Arc<dyn TimeService>,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            game: RwLock::new(game),
            repos,
            source,
            clock,
            fetch_timeout,
        }
    }

    /// Restore persisted fixtures and score entries, then save the game
    /// record and roster.
    pub fn bootstrap(&self) -> Result<()> {
        let mut game = self.game.write();

        let stored = self.repos.matches.list(game.competition(), game.season())?;
        let restored_matches = stored.len();
        for fixture in stored {
            game.add_match(fixture)?;
        }

        let entries = self.repos.scores.for_game(game.id())?;
        let restored_entries = entries.len();
        game.restore_entries(entries);

        for player in game.players() {
            self.repos.players.save(player)?;
        }
        self.repos.games.save(&game.record())?;

        info!(
            game = %game.id(),
            matches = restored_matches,
            entries = restored_entries,
            "Game restored"
        );
        Ok(())
    }

    /// Place or replace a bet at the current time.
    pub fn place_bet(
        &self,
        player: &PlayerId,
        match_key: &MatchKey,
        home_goals: i64,
        away_goals: i64,
    ) -> Result<Bet> {
        let game = self.game.write();
        let now = self.clock.now();
        let result = game.place_bet(
            self.repos.bets.as_ref(),
            player,
            match_key,
            home_goals,
            away_goals,
            now,
        );
        match &result {
            Err(err) if err.is_user_error() => {
                debug!(error = %err, player = %player, fixture = %match_key, "Bet refused");
            }
            Err(err) => error!(error = %err, player = %player, "Failed to store bet"),
            Ok(_) => {}
        }
        result
    }

    pub fn bets_for_player(&self, player: &PlayerId) -> Result<Vec<Bet>> {
        let game = self.game.read();
        self.repos.bets.for_player(game.id(), player)
    }

    pub fn entries_for_player(&self, player: &PlayerId) -> Vec<ScoreEntry> {
        self.game
            .read()
            .entries()
            .iter()
            .filter(|entry| &entry.player_id == player)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn leaderboard(&self) -> Leaderboard {
        self.game.read().leaderboard()
    }

    /// Snapshot of every fixture, in kickoff order.
    #[must_use]
    pub fn matches(&self) -> Vec<Match> {
        let mut matches: Vec<Match> = self.game.read().matches().cloned().collect();
        matches.sort_by(|a, b| a.kickoff().cmp(&b.kickoff()).then_with(|| a.key().cmp(b.key())));
        matches
    }

    #[must_use]
    pub fn get_match(&self, key: &MatchKey) -> Option<Match> {
        self.game.read().get_match(key).cloned()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.game.read().is_complete()
    }

    /// Fetch, apply, score and persist once.
    ///
    /// A failed or timed-out fetch leaves the game untouched.
    pub async fn poll_once(&self) -> Result<CycleReport> {
        let updates = match tokio::time::timeout(self.fetch_timeout, self.source.fetch()).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                after_ms: u64::try_from(self.fetch_timeout.as_millis()).unwrap_or(u64::MAX),
            }),
        }?;
        debug!(source = self.source.name(), fixtures = updates.len(), "Fetched fixtures");

        let mut game = self.game.write();
        let sync = game.apply_updates(&updates);

        for key in &sync.changed {
            if let Some(fixture) = game.get_match(key) {
                self.repos.matches.save(fixture)?;
            }
        }

        let entries = game.evaluate_finished_matches(self.repos.bets.as_ref());
        if !entries.is_empty() {
            self.repos.scores.save_all(&entries)?;
        }

        let report = CycleReport {
            fetched: updates.len(),
            created: sync.created,
            updated: sync.updated,
            rejected: sync.rejected,
            finished: sync.finished,
            awarded: entries.len(),
        };
        if report.created + report.updated + report.awarded > 0 {
            info!(
                created = report.created,
                updated = report.updated,
                rejected = report.rejected,
                finished = report.finished,
                awarded = report.awarded,
                "Poll cycle applied"
            );
        }
        Ok(report)
    }

    /// Run one cycle and log any failure; the loop keeps going either way.
    pub(crate) async fn tick(&self) -> Option<CycleReport> {
        match self.poll_once().await {
            Ok(report) => Some(report),
            Err(Error::Fetch(err)) if err.is_transient() => {
                warn!(error = %err, source = self.source.name(), "Fetch failed, will retry");
                None
            }
            Err(err) => {
                error!(error = %err, "Poll cycle failed");
                None
            }
        }
    }
}
