//! Builders for domain primitives used across tests.
//!
//! Every builder targets the `FL1` 2016 season with kickoff at
//! [`kickoff()`], so tests focus on assertions rather than construction
//! boilerplate.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{
    FixtureUpdate, MatchKey, Odds, Player, PlayerId, ScoreFragment, ScorePhase, Side,
};

pub const COMPETITION: &str = "FL1";
pub const SEASON: &str = "2016";

/// 2016-08-12 18:45 UTC.
pub fn kickoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 8, 12, 18, 45, 0)
        .single()
        .unwrap_or_default()
}

pub fn season_key(home: &str, away: &str, matchday: u32) -> MatchKey {
    MatchKey::new(COMPETITION, SEASON, home, away, matchday)
}

pub fn player(id: &str, name: &str) -> Player {
    Player::new(PlayerId::new(id), name)
}

/// A not-yet-started fixture with no odds.
pub fn scheduled_update(home: &str, away: &str, matchday: u32) -> FixtureUpdate {
    FixtureUpdate {
        external_id: None,
        competition: COMPETITION.into(),
        season: SEASON.into(),
        home_team: home.into(),
        away_team: away.into(),
        matchday,
        kickoff: kickoff(),
        status: "NS".into(),
        scores: Vec::new(),
        odds: None,
    }
}

/// A scheduled fixture carrying the given odds triplet.
pub fn scheduled_with_odds(home: &str, away: &str, matchday: u32, odds: Odds) -> FixtureUpdate {
    FixtureUpdate {
        odds: Some(odds),
        ..scheduled_update(home, away, matchday)
    }
}

/// An in-play snapshot with a current score.
pub fn live_update(home: &str, away: &str, matchday: u32, goals: (u32, u32)) -> FixtureUpdate {
    FixtureUpdate {
        status: "2H".into(),
        scores: current(goals.0, goals.1),
        ..scheduled_update(home, away, matchday)
    }
}

/// A full-time snapshot with a current score.
pub fn finished_update(
    home: &str,
    away: &str,
    matchday: u32,
    home_goals: u32,
    away_goals: u32,
) -> FixtureUpdate {
    FixtureUpdate {
        status: "FT".into(),
        scores: current(home_goals, away_goals),
        ..scheduled_update(home, away, matchday)
    }
}

/// `CURRENT` fragments for both sides.
pub fn current(home: u32, away: u32) -> Vec<ScoreFragment> {
    vec![
        ScoreFragment::new(ScorePhase::Current, Side::Home, home),
        ScoreFragment::new(ScorePhase::Current, Side::Away, away),
    ]
}
