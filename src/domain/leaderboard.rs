//! Season standings derived from score entries.

use std::collections::HashMap;

use serde::Serialize;

use super::entry::ScoreEntry;
use super::id::PlayerId;
use super::player::Player;
use super::scoring::AwardKind;

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    /// 1-based; players with equal totals share a rank.
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub points: i64,
    pub exact_hits: u32,
    pub outcome_hits: u32,
    pub missed: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Leaderboard {
    standings: Vec<Standing>,
}

impl Leaderboard {
    /// Sum every player's entries and order by total, highest first.
    ///
    /// Players with no entries appear with zero points. Equal totals are
    /// ordered by display name, then player id, so the order is deterministic.
    /// Entries of players not in `players` are ignored.
    pub fn compute<'a>(
        players: impl IntoIterator<Item = &'a Player>,
        entries: &[ScoreEntry],
    ) -> Self {
        let mut rows: HashMap<&PlayerId, Standing> = players
            .into_iter()
            .map(|player| {
                (
                    &player.id,
                    Standing {
                        rank: 0,
                        player_id: player.id.clone(),
                        name: player.name.clone(),
                        points: 0,
                        exact_hits: 0,
                        outcome_hits: 0,
                        missed: 0,
                    },
                )
            })
            .collect();

        for entry in entries {
            let Some(row) = rows.get_mut(&entry.player_id) else {
                continue;
            };
            row.points += entry.points;
            match entry.kind {
                AwardKind::Exact => row.exact_hits += 1,
                AwardKind::Outcome => row.outcome_hits += 1,
                AwardKind::NoBet => row.missed += 1,
                AwardKind::Wrong => {}
            }
        }

        let mut standings: Vec<Standing> = rows.into_values().collect();
        standings.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.player_id.cmp(&b.player_id))
        });

        let mut previous: Option<(i64, usize)> = None;
        for (index, row) in standings.iter_mut().enumerate() {
            row.rank = match previous {
                Some((points, rank)) if points == row.points => rank,
                _ => index + 1,
            };
            previous = Some((row.points, row.rank));
        }

        Self { standings }
    }

    #[must_use]
    pub fn standings(&self) -> &[Standing] {
        &self.standings
    }

    #[must_use]
    pub fn leader(&self) -> Option<&Standing> {
        self.standings.first()
    }

    #[must_use]
    pub fn get(&self, player: &PlayerId) -> Option<&Standing> {
        self.standings.iter().find(|row| &row.player_id == player)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.standings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.standings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id::{GameId, MatchKey};
    use crate::domain::scoring::{Award, Bonus};

    fn entry(player: &str, matchday: u32, kind: AwardKind, points: i64) -> ScoreEntry {
        ScoreEntry::new(
            GameId::new("g"),
            MatchKey::new("FL1", "2016", "A", "B", matchday),
            PlayerId::new(player),
            Award {
                kind,
                bonus: Bonus::None,
                points,
            },
        )
    }

    fn players() -> Vec<Player> {
        vec![
            Player::new(PlayerId::new("p1"), "Zoe"),
            Player::new(PlayerId::new("p2"), "Adam"),
            Player::new(PlayerId::new("p3"), "Mia"),
        ]
    }

    #[test]
    fn sums_and_sorts_descending() {
        let entries = vec![
            entry("p1", 1, AwardKind::Exact, 3),
            entry("p1", 2, AwardKind::Outcome, 1),
            entry("p2", 1, AwardKind::NoBet, -1),
            entry("p3", 1, AwardKind::Outcome, 1),
        ];
        let board = Leaderboard::compute(&players(), &entries);

        let order: Vec<&str> = board.standings().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(order, ["Zoe", "Mia", "Adam"]);
        assert_eq!(board.leader().map(|s| s.points), Some(4));
        assert_eq!(board.get(&PlayerId::new("p2")).map(|s| s.missed), Some(1));
    }

    #[test]
    fn ties_break_by_name_and_share_rank() {
        let entries = vec![
            entry("p1", 1, AwardKind::Outcome, 1),
            entry("p2", 1, AwardKind::Outcome, 1),
        ];
        let board = Leaderboard::compute(&players(), &entries);

        let rows = board.standings();
        assert_eq!(rows[0].name, "Adam");
        assert_eq!(rows[1].name, "Zoe");
        assert_eq!((rows[0].rank, rows[1].rank, rows[2].rank), (1, 1, 3));
    }

    #[test]
    fn players_without_entries_have_zero() {
        let board = Leaderboard::compute(&players(), &[]);
        assert_eq!(board.len(), 3);
        assert!(board.standings().iter().all(|s| s.points == 0 && s.rank == 1));
    }

    #[test]
    fn entries_for_unknown_players_are_ignored() {
        let board = Leaderboard::compute(&players(), &[entry("ghost", 1, AwardKind::Exact, 3)]);
        assert!(board.get(&PlayerId::new("ghost")).is_none());
    }
}
