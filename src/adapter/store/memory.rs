//! In-memory repositories backed by bounded LRU maps.
//!
//! Each repository is an explicit instance owned by whoever builds the
//! service; there is no shared global.

use std::sync::Arc;

use tracing::warn;

use super::cache::LruStore;
use crate::domain::{Bet, GameId, GameRecord, Match, MatchKey, Player, PlayerId, ScoreEntry};
use crate::error::{Error, Result};
use crate::port::{
    BetRepository, GameRepository, MatchRepository, PlayerRepository, Repositories,
    ScoreRepository,
};

type BetKey = (GameId, PlayerId, MatchKey);
type EntryKey = (GameId, MatchKey, PlayerId);

/// Bets are never evicted: a lost bet would be scored as no bet. A full store
/// refuses new bets and still accepts replacements.
pub struct InMemoryBetRepository {
    bets: LruStore<BetKey, Bet>,
}

impl InMemoryBetRepository {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            bets: LruStore::new(capacity),
        }
    }
}

impl BetRepository for InMemoryBetRepository {
    fn save(&self, game: &GameId, bet: Bet) -> Result<()> {
        let key = (game.clone(), bet.player_id().clone(), bet.match_key().clone());
        if self.bets.put_if_room(key, bet) {
            return Ok(());
        }
        warn!(game = %game, capacity = self.bets.capacity(), "Bet store is full");
        Err(Error::Store(format!("bet store is full ({} bets)", self.bets.capacity())))
    }

    fn get(&self, game: &GameId, player: &PlayerId, match_key: &MatchKey) -> Result<Option<Bet>> {
        Ok(self
            .bets
            .get(&(game.clone(), player.clone(), match_key.clone())))
    }

    fn for_player(&self, game: &GameId, player: &PlayerId) -> Result<Vec<Bet>> {
        let mut bets = self.bets.collect(|(g, p, _)| g == game && p == player);
        bets.sort_by(|a, b| a.match_key().cmp(b.match_key()));
        Ok(bets)
    }

    fn for_match(&self, game: &GameId, match_key: &MatchKey) -> Result<Vec<Bet>> {
        let mut bets = self.bets.collect(|(g, _, m)| g == game && m == match_key);
        bets.sort_by(|a, b| a.player_id().cmp(b.player_id()));
        Ok(bets)
    }
}

pub struct InMemoryMatchRepository {
    matches: LruStore<MatchKey, Match>,
}

impl InMemoryMatchRepository {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            matches: LruStore::new(capacity),
        }
    }
}

impl MatchRepository for InMemoryMatchRepository {
    fn save(&self, fixture: &Match) -> Result<()> {
        if let Some((evicted, _)) = self.matches.put(fixture.key().clone(), fixture.clone()) {
            warn!(fixture = %evicted, "Evicted fixture from full store");
        }
        Ok(())
    }

    fn get(&self, key: &MatchKey) -> Result<Option<Match>> {
        Ok(self.matches.get(key))
    }

    fn list(&self, competition: &str, season: &str) -> Result<Vec<Match>> {
        let mut matches = self.matches.collect(|key| key.belongs_to(competition, season));
        matches.sort_by(|a, b| a.kickoff().cmp(&b.kickoff()).then_with(|| a.key().cmp(b.key())));
        Ok(matches)
    }
}

pub struct InMemoryGameRepository {
    games: LruStore<GameId, GameRecord>,
}

impl InMemoryGameRepository {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            games: LruStore::new(capacity),
        }
    }
}

impl GameRepository for InMemoryGameRepository {
    fn save(&self, game: &GameRecord) -> Result<()> {
        if let Some((evicted, _)) = self.games.put(game.id.clone(), game.clone()) {
            warn!(game = %evicted, "Evicted game from full store");
        }
        Ok(())
    }

    fn get(&self, id: &GameId) -> Result<Option<GameRecord>> {
        Ok(self.games.get(id))
    }

    fn list(&self) -> Result<Vec<GameRecord>> {
        let mut games = self.games.collect(|_| true);
        games.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(games)
    }
}

pub struct InMemoryPlayerRepository {
    players: LruStore<PlayerId, Player>,
}

impl InMemoryPlayerRepository {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            players: LruStore::new(capacity),
        }
    }
}

impl PlayerRepository for InMemoryPlayerRepository {
    fn save(&self, player: &Player) -> Result<()> {
        if let Some((evicted, _)) = self.players.put(player.id.clone(), player.clone()) {
            warn!(player = %evicted, "Evicted player from full store");
        }
        Ok(())
    }

    fn get(&self, id: &PlayerId) -> Result<Option<Player>> {
        Ok(self.players.get(id))
    }

    fn list(&self) -> Result<Vec<Player>> {
        let mut players = self.players.collect(|_| true);
        players.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(players)
    }
}

pub struct InMemoryScoreRepository {
    entries: LruStore<EntryKey, ScoreEntry>,
}

impl InMemoryScoreRepository {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: LruStore::new(capacity),
        }
    }
}

impl ScoreRepository for InMemoryScoreRepository {
    fn save_all(&self, entries: &[ScoreEntry]) -> Result<()> {
        for entry in entries {
            let key = (
                entry.game_id.clone(),
                entry.match_key.clone(),
                entry.player_id.clone(),
            );
            if let Some((_, evicted)) = self.entries.put(key, entry.clone()) {
                warn!(
                    fixture = %evicted.match_key,
                    player = %evicted.player_id,
                    "Evicted score entry from full store"
                );
            }
        }
        Ok(())
    }

    fn for_game(&self, game: &GameId) -> Result<Vec<ScoreEntry>> {
        let mut entries = self.entries.collect(|(g, _, _)| g == game);
        entries.sort_by(|a, b| a.pair().cmp(&b.pair()));
        Ok(entries)
    }

    fn for_player(&self, game: &GameId, player: &PlayerId) -> Result<Vec<ScoreEntry>> {
        let mut entries = self.entries.collect(|(g, _, p)| g == game && p == player);
        entries.sort_by(|a, b| a.match_key.cmp(&b.match_key));
        Ok(entries)
    }
}

/// Build a full set of in-memory repositories. The bet store holds up to
/// `bet_capacity` bets; every other store is bounded to `capacity`.
#[must_use]
pub fn in_memory(capacity: usize, bet_capacity: usize) -> Repositories {
    Repositories {
        bets: Arc::new(InMemoryBetRepository::new(bet_capacity)),
        matches: Arc::new(InMemoryMatchRepository::new(capacity)),
        games: Arc::new(InMemoryGameRepository::new(capacity)),
        players: Arc::new(InMemoryPlayerRepository::new(capacity)),
        scores: Arc::new(InMemoryScoreRepository::new(capacity)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn key(matchday: u32) -> MatchKey {
        MatchKey::new("FL1", "2016", "Bastia", "Liverpool", matchday)
    }

    fn bet(player: &str, matchday: u32, home: i64, away: i64) -> Bet {
        let now = Utc.with_ymd_and_hms(2016, 8, 1, 12, 0, 0).unwrap();
        Bet::try_new(key(matchday), PlayerId::new(player), home, away, now).unwrap()
    }

    #[test]
    fn saved_bet_reads_back_unchanged() {
        let repo = InMemoryBetRepository::new(16);
        let game = GameId::new("g1");
        repo.save(&game, bet("p1", 1, 2, 1)).unwrap();

        let bets = repo.for_player(&game, &PlayerId::new("p1")).unwrap();
        assert_eq!(bets.len(), 1);
        assert_eq!((bets[0].home_goals(), bets[0].away_goals()), (2, 1));
    }

    #[test]
    fn second_bet_on_same_match_overwrites() {
        let repo = InMemoryBetRepository::new(16);
        let game = GameId::new("g1");
        repo.save(&game, bet("p1", 1, 2, 1)).unwrap();
        repo.save(&game, bet("p1", 1, 0, 0)).unwrap();

        let stored = repo.get(&game, &PlayerId::new("p1"), &key(1)).unwrap().unwrap();
        assert_eq!((stored.home_goals(), stored.away_goals()), (0, 0));
        assert_eq!(repo.for_match(&game, &key(1)).unwrap().len(), 1);
    }

    #[test]
    fn bets_are_scoped_by_game() {
        let repo = InMemoryBetRepository::new(16);
        repo.save(&GameId::new("g1"), bet("p1", 1, 2, 1)).unwrap();
        repo.save(&GameId::new("g2"), bet("p1", 1, 0, 3)).unwrap();

        let g2 = repo.for_player(&GameId::new("g2"), &PlayerId::new("p1")).unwrap();
        assert_eq!(g2.len(), 1);
        assert_eq!(g2[0].away_goals(), 3);
    }

    #[test]
    fn matches_list_in_kickoff_order() {
        let repo = InMemoryMatchRepository::new(16);
        let base = Utc.with_ymd_and_hms(2016, 8, 12, 18, 45, 0).unwrap();
        repo.save(&Match::new(key(2), base + Duration::days(7))).unwrap();
        repo.save(&Match::new(key(1), base)).unwrap();
        repo.save(&Match::new(MatchKey::new("PL", "2016", "A", "B", 1), base))
            .unwrap();

        let listed = repo.list("FL1", "2016").unwrap();
        let days: Vec<u32> = listed.iter().map(Match::matchday).collect();
        assert_eq!(days, vec![1, 2]);
    }

    #[test]
    fn full_bet_store_refuses_new_bets_and_keeps_old_ones() {
        let repo = InMemoryBetRepository::new(2);
        let game = GameId::new("g1");
        repo.save(&game, bet("p1", 1, 1, 0)).unwrap();
        repo.save(&game, bet("p1", 2, 1, 0)).unwrap();

        let refused = repo.save(&game, bet("p1", 3, 1, 0));
        assert!(matches!(refused, Err(Error::Store(_))));
        assert!(repo.get(&game, &PlayerId::new("p1"), &key(1)).unwrap().is_some());
        assert!(repo.get(&game, &PlayerId::new("p1"), &key(3)).unwrap().is_none());

        repo.save(&game, bet("p1", 1, 3, 3)).unwrap();
        let replaced = repo.get(&game, &PlayerId::new("p1"), &key(1)).unwrap().unwrap();
        assert_eq!((replaced.home_goals(), replaced.away_goals()), (3, 3));
    }

    #[test]
    fn other_stores_still_evict_oldest() {
        let repo = InMemoryMatchRepository::new(1);
        let base = Utc.with_ymd_and_hms(2016, 8, 12, 18, 45, 0).unwrap();
        repo.save(&Match::new(key(1), base)).unwrap();
        repo.save(&Match::new(key(2), base)).unwrap();

        assert!(repo.get(&key(1)).unwrap().is_none());
        assert!(repo.get(&key(2)).unwrap().is_some());
    }

    #[test]
    fn players_and_games_round_trip() {
        let repos = in_memory(8, 8);
        let player = Player::new(PlayerId::new("p1"), "Alice");
        repos.players.save(&player).unwrap();
        assert_eq!(repos.players.get(&player.id).unwrap(), Some(player.clone()));

        let record = GameRecord {
            id: GameId::new("g1"),
            competition: "FL1".into(),
            season: "2016".into(),
            players: vec![player.id],
        };
        repos.games.save(&record).unwrap();
        assert_eq!(repos.games.list().unwrap(), vec![record]);
    }
}
